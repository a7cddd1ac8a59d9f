use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};
use crate::components::reminder_form::Focus;

/// Plain or shifted keys only; anything held with Ctrl/Alt is a shortcut.
fn is_typing(modifiers: KeyModifiers) -> bool {
    modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Clear status message on any key
    app.status_message = None;

    // Help overlay takes priority
    if app.show_help {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            app.show_help = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Form => handle_form_input(app, key),
        InputMode::Normal => handle_normal_input(app, key),
    }
}

fn handle_normal_input(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc || is_interrupt(&key) {
        app.running = false;
        return;
    }

    match key.code {
        KeyCode::Enter => app.open_edit_form(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Char(c) if is_typing(key.modifiers) => match c {
            'q' => app.running = false,
            'n' => app.open_new_form(),
            'e' => app.open_edit_form(),
            'd' => app.delete_selected(),
            'k' => app.select_prev(),
            'j' => app.select_next(),
            '?' => app.show_help = true,
            _ => {}
        },
        _ => {}
    }
}

fn handle_form_input(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc || is_interrupt(&key) {
        app.close_form();
        return;
    }
    if key.code == KeyCode::Enter {
        app.submit_form();
        return;
    }

    let Some(ref mut form) = app.form_state else {
        return;
    };

    match key.code {
        KeyCode::Tab => form.focus_next(),
        KeyCode::BackTab => form.focus_prev(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Right | KeyCode::Up => form.step(1),
        KeyCode::Left | KeyCode::Down => form.step(-1),
        KeyCode::Char(' ') if form.focus == Focus::Color => form.step(1),
        KeyCode::Char(c) if is_typing(key.modifiers) => form.input_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use crate::reminder::Store;

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key(app, KeyEvent::new(code, modifiers));
    }

    fn app_with_open_form(dir: &tempfile::TempDir) -> App {
        let mut app = App::new(Store::open(dir.path().join("reminders.toml")).unwrap());
        press(&mut app, KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Form);
        app
    }

    fn description(app: &App) -> &str {
        app.form_state.as_ref().unwrap().form.value(Field::Description)
    }

    #[test]
    fn plain_and_shifted_chars_are_typed() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_open_form(&dir);

        press(&mut app, KeyCode::Char('C'), KeyModifiers::SHIFT);
        press(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);

        assert_eq!(description(&app), "Ca");
    }

    #[test]
    fn modified_chars_are_not_typed() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_open_form(&dir);

        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('x'), KeyModifiers::ALT);
        press(&mut app, KeyCode::Char('S'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);

        assert_eq!(description(&app), "");
        assert_eq!(app.input_mode, InputMode::Form);
    }

    #[test]
    fn ctrl_c_cancels_the_form_then_quits() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_open_form(&dir);

        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.running);

        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!app.running);
    }

    #[test]
    fn ctrl_n_does_not_open_the_form() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Store::open(dir.path().join("reminders.toml")).unwrap());

        press(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn typed_reminder_is_saved_with_enter() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_open_form(&dir);

        for c in "Buy milk".chars() {
            press(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
        }
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.reminders()[0].description, "Buy milk");
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Store::open(dir.path().join("reminders.toml")).unwrap());

        press(&mut app, KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Normal);
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.show_help);
        assert!(app.running);
    }
}
