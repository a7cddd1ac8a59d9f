use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use ratatui::layout::{Constraint, Layout};
use reminder_tui::app::App;
use reminder_tui::components;
use reminder_tui::reminder::Store;
use reminder_tui::settings::Settings;
use reminder_tui::{event, keys, logging, theme, tui};

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init(&logging::log_path())?;

    let settings = Settings::load();
    theme::install(settings.theme.clone().into_theme());

    let data_file = settings
        .data_file()
        .ok_or_else(|| eyre!("Could not determine where to store reminders; set data_file in config.toml"))?;
    log::info!("Using reminders file {}", data_file.display());

    let mut app = App::new(Store::open(data_file)?);

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

            components::ReminderList::render(frame, layout[0], app.reminders(), app.selected);

            if let Some(ref form) = app.form_state {
                components::ReminderFormView::render(frame, area, form);
            }

            if app.show_help {
                components::Help::render(frame, area);
            }

            components::StatusBar::render(
                frame,
                layout[1],
                app.input_mode,
                app.status_message.as_deref(),
            );
        })?;

        if let Some(key) = event::next_key_press(Duration::from_millis(100))? {
            keys::handle_key(app, key);
        }
    }

    Ok(())
}
