use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{Local, NaiveDate};

use crate::components::reminder_form::OnSubmit;
use crate::components::ReminderFormState;
use crate::form::{ReminderPayload, SubmitOutcome};
use crate::reminder::{Reminder, ReminderId, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Form,
}

pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub selected: usize,
    pub today: NaiveDate,
    pub form_state: Option<ReminderFormState>,
    pub status_message: Option<String>,
    pub show_help: bool,
    store: Store,
    submit_tx: Sender<ReminderPayload>,
    submissions: Receiver<ReminderPayload>,
}

impl App {
    pub fn new(store: Store) -> Self {
        let (submit_tx, submissions) = mpsc::channel();

        Self {
            running: true,
            input_mode: InputMode::Normal,
            selected: 0,
            today: Local::now().date_naive(),
            form_state: None,
            status_message: None,
            show_help: false,
            store,
            submit_tx,
            submissions,
        }
    }

    pub fn reminders(&self) -> &[Reminder] {
        self.store.reminders()
    }

    pub fn selected_reminder(&self) -> Option<&Reminder> {
        self.reminders().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.reminders().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn open_new_form(&mut self) {
        let draft = Reminder::draft(self.store.next_id(), self.today);
        self.open_form(&draft, true);
    }

    pub fn open_edit_form(&mut self) {
        match self.selected_reminder().cloned() {
            Some(reminder) => self.open_form(&reminder, false),
            None => self.status_message = Some("Nothing to edit".to_string()),
        }
    }

    fn open_form(&mut self, reminder: &Reminder, is_new: bool) {
        let tx = self.submit_tx.clone();
        let on_submit: OnSubmit = Box::new(move |payload| {
            if tx.send(payload).is_err() {
                log::error!("Reminder submitted after the app shut down");
            }
        });

        self.form_state = Some(ReminderFormState::new(reminder, is_new, on_submit));
        self.input_mode = InputMode::Form;
    }

    pub fn close_form(&mut self) {
        self.form_state = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn submit_form(&mut self) {
        let Some(ref mut form) = self.form_state else {
            return;
        };

        match form.submit() {
            SubmitOutcome::Submitted | SubmitOutcome::AlreadySubmitted => {
                self.close_form();
                self.receive_submissions();
            }
            SubmitOutcome::Rejected => {
                let count = form.form.errors().len();
                self.status_message = Some(format!(
                    "Fix {} field{} before saving",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
            }
        }
    }

    /// Persist every payload the form callback has handed over.
    pub fn receive_submissions(&mut self) {
        let mut last: Option<(ReminderId, bool)> = None;
        while let Ok(payload) = self.submissions.try_recv() {
            let id = payload.id;
            let created = self.store.upsert(payload);
            log::info!("Reminder {} {}", id, if created { "created" } else { "updated" });
            last = Some((id, created));
        }

        let Some((id, created)) = last else {
            return;
        };
        self.select_id(id);

        self.status_message = Some(match self.store.save() {
            Ok(()) if created => "Reminder created".to_string(),
            Ok(()) => "Reminder updated".to_string(),
            Err(err) => {
                log::error!("{:#}", err);
                format!("Save failed: {}", err)
            }
        });
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_reminder().map(|r| r.id) else {
            return;
        };

        self.store.delete(id);
        let len = self.reminders().len();
        self.selected = self.selected.min(len.saturating_sub(1));

        self.status_message = Some(match self.store.save() {
            Ok(()) => "Reminder deleted".to_string(),
            Err(err) => {
                log::error!("{:#}", err);
                format!("Save failed: {}", err)
            }
        });
    }

    fn select_id(&mut self, id: ReminderId) {
        if let Some(index) = self.reminders().iter().position(|r| r.id == id) {
            self.selected = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;

    fn app_in(dir: &tempfile::TempDir) -> App {
        App::new(Store::open(dir.path().join("reminders.toml")).unwrap())
    }

    #[test]
    fn new_reminder_is_saved_on_submit() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.open_new_form();
        assert_eq!(app.input_mode, InputMode::Form);
        let form = app.form_state.as_mut().unwrap();
        form.form.set_field(Field::Description, "Water plants");
        app.submit_form();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.status_message.as_deref(), Some("Reminder created"));

        let reloaded = Store::open(dir.path().join("reminders.toml")).unwrap();
        assert_eq!(reloaded.reminders().len(), 1);
        assert_eq!(reloaded.reminders()[0].description, "Water plants");
        assert_eq!(reloaded.reminders()[0].time, "09:00");
    }

    #[test]
    fn blank_draft_is_rejected_and_form_stays_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.open_new_form();
        app.submit_form();

        assert_eq!(app.input_mode, InputMode::Form);
        assert!(app.reminders().is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Fix 1 field before saving"));
    }

    #[test]
    fn edit_updates_in_place_and_keeps_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        for description in ["first", "second"] {
            app.open_new_form();
            let form = app.form_state.as_mut().unwrap();
            form.form.set_field(Field::Description, description);
            app.submit_form();
        }
        assert_eq!(app.reminders().len(), 2);

        app.selected = 0;
        let id = app.selected_reminder().unwrap().id;
        app.open_edit_form();
        app.form_state
            .as_mut()
            .unwrap()
            .form
            .set_field(Field::Time, "23:00");
        app.submit_form();

        assert_eq!(app.reminders().len(), 2);
        assert_eq!(app.selected_reminder().unwrap().id, id);
        assert_eq!(app.selected_reminder().unwrap().time, "23:00");
        assert_eq!(app.status_message.as_deref(), Some("Reminder updated"));
    }

    #[test]
    fn cancel_discards_edits() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.open_new_form();
        app.form_state
            .as_mut()
            .unwrap()
            .form
            .set_field(Field::Description, "never saved");
        app.close_form();
        app.receive_submissions();

        assert!(app.reminders().is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn delete_clamps_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        for description in ["a", "b"] {
            app.open_new_form();
            app.form_state
                .as_mut()
                .unwrap()
                .form
                .set_field(Field::Description, description);
            app.submit_form();
        }

        app.selected = 1;
        app.delete_selected();
        assert_eq!(app.reminders().len(), 1);
        assert_eq!(app.selected, 0);

        app.delete_selected();
        app.delete_selected();
        assert!(app.reminders().is_empty());
        assert_eq!(app.selected, 0);
    }
}
