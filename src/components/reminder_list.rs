use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::reminder::Reminder;
use crate::theme;

pub struct ReminderList;

impl ReminderList {
    pub fn render(frame: &mut Frame, area: Rect, reminders: &[Reminder], selected_index: usize) {
        let theme = theme::current();
        let w = area.width as usize;

        let title = if w >= 25 {
            format!(" Reminders ({}) ", reminders.len())
        } else {
            " Reminders ".to_string()
        };

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        if reminders.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No reminders yet. Press 'n' to add one.").style(theme.dim);
            frame.render_widget(msg, inner);
            return;
        }

        let inner_w = area.width.saturating_sub(2) as usize;

        let mut current_date = "";
        let mut items: Vec<ListItem> = Vec::new();
        let mut selected_row = 0;

        for (i, reminder) in reminders.iter().enumerate() {
            // Date header
            if reminder.date != current_date {
                if !current_date.is_empty() {
                    items.push(ListItem::new(Line::from("")));
                }
                current_date = reminder.date.as_str();
                items.push(ListItem::new(Line::from(Span::styled(
                    format!(" {}", current_date),
                    theme.header.add_modifier(Modifier::UNDERLINED),
                ))));
            }

            let is_selected = i == selected_index;
            if is_selected {
                selected_row = items.len();
            }

            let swatch = match reminder.palette_color() {
                Some(color) => Span::styled(" \u{25cf} ", Style::default().fg(color.to_ratatui())),
                None => Span::styled(" ? ", theme.error),
            };

            let text_style = if is_selected { theme.selected } else { Style::default() };

            let mut spans = vec![
                swatch,
                Span::styled(format!("{} ", reminder.time), theme.dim),
                Span::styled(
                    truncate(&reminder.description, inner_w.saturating_sub(10)),
                    text_style,
                ),
            ];

            // City if there's room
            if let Some(city) = reminder.city.as_deref().filter(|c| !c.is_empty()) {
                let city_str = format!("  @{}", city);
                if spans.iter().map(|s| s.width()).sum::<usize>() + city_str.chars().count() < inner_w {
                    spans.push(Span::styled(city_str, theme.dim));
                }
            }

            items.push(ListItem::new(Line::from(spans)));
        }

        let mut state = ListState::default().with_selected(Some(selected_row));
        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn truncate(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}
