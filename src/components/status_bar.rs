use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::InputMode;
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, mode: InputMode, message: Option<&str>) {
        let style = theme::current().status;
        let w = area.width as usize;

        let mode_str = match mode {
            InputMode::Normal => " Reminders ",
            InputMode::Form => " Reminders [Form] ",
        };

        // Show status message if present, otherwise context-aware hints
        let right_text = match (message, mode) {
            (Some(msg), _) => format!(" {} ", msg),
            (None, InputMode::Form) if w >= 60 => {
                " Tab:Next arrows:Pick Enter:Save Esc:Cancel ".to_string()
            }
            (None, InputMode::Normal) if w >= 70 => {
                " jk:Move n:New e:Edit d:Del ?:Help q:Quit ".to_string()
            }
            (None, InputMode::Normal) if w >= 40 => " n:New e:Edit q:Quit ".to_string(),
            _ => " ?:Help ".to_string(),
        };

        let padding_len = w.saturating_sub(mode_str.chars().count() + right_text.chars().count());
        let padding = " ".repeat(padding_len);

        let line = Line::from(vec![
            Span::styled(mode_str, style),
            Span::styled(padding, style),
            Span::styled(right_text, style),
        ]);

        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}
