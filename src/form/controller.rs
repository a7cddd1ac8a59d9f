use std::collections::BTreeSet;

use super::payload::ReminderPayload;
use super::schema::{self, ValidationErrors};
use super::values::{Field, FormValues};
use crate::reminder::{Reminder, ReminderId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Editing,
    Validating,
    /// Terminal: the callback has fired.
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Rejected,
    AlreadySubmitted,
}

/// Holds the values of one reminder being edited and fires `on_submit`
/// at most once, with a payload that passed validation.
pub struct ReminderForm<F>
where
    F: FnOnce(ReminderPayload),
{
    id: ReminderId,
    values: FormValues,
    errors: ValidationErrors,
    touched: BTreeSet<Field>,
    phase: FormPhase,
    submit_count: u32,
    on_submit: Option<F>,
}

impl<F> ReminderForm<F>
where
    F: FnOnce(ReminderPayload),
{
    pub fn new(reminder: &Reminder, on_submit: F) -> Self {
        let values = FormValues::from_reminder(reminder);
        let errors = schema::validate(&values).err().unwrap_or_default();

        Self {
            id: reminder.id,
            values,
            errors,
            touched: BTreeSet::new(),
            phase: FormPhase::Idle,
            submit_count: 0,
            on_submit: Some(on_submit),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// The error to display: only once the field was touched or a submit
    /// was attempted.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.phase == FormPhase::Submitted {
            return;
        }

        *self.values.get_mut(field) = value.into();
        self.touched.insert(field);
        self.phase = FormPhase::Editing;
        self.revalidate();
    }

    pub fn touch(&mut self, field: Field) {
        if self.phase != FormPhase::Submitted {
            self.touched.insert(field);
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase == FormPhase::Submitted {
            return SubmitOutcome::AlreadySubmitted;
        }

        self.submit_count += 1;
        self.touched.extend(Field::ALL);
        self.phase = FormPhase::Validating;
        self.revalidate();

        if !self.errors.is_empty() {
            log::debug!(
                "Reminder {} submit rejected: {}",
                self.id,
                self.errors
            );
            self.phase = FormPhase::Editing;
            return SubmitOutcome::Rejected;
        }

        let payload = ReminderPayload::from_values(self.id, std::mem::take(&mut self.values));
        self.phase = FormPhase::Submitted;
        log::debug!("Reminder {} submitted", self.id);

        if let Some(on_submit) = self.on_submit.take() {
            on_submit(payload);
        }
        SubmitOutcome::Submitted
    }

    fn revalidate(&mut self) {
        self.errors = schema::validate(&self.values).err().unwrap_or_default();
    }
}
