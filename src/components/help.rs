use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme;

pub struct Help;

impl Help {
    pub fn render(frame: &mut Frame, area: Rect) {
        let theme = theme::current();

        let popup_w = area.width.min(52).max(30).min(area.width);
        let popup_h = area.height.min(20).max(12).min(area.height);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keybindings ")
            .title_style(theme.accent.add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(theme.accent);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let entry = |keys: &'static str, desc: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {:<10}", keys), key_style),
                Span::raw(desc),
            ])
        };

        let lines = vec![
            Line::from(Span::styled("List", section_style)),
            entry("j/k", "Select next/previous reminder"),
            entry("n", "New reminder"),
            entry("e/Enter", "Edit selected reminder"),
            entry("d", "Delete selected reminder"),
            Line::from(""),
            Line::from(Span::styled("Form", section_style)),
            entry("Tab", "Next field (S-Tab: previous)"),
            entry("\u{2190}/\u{2192}", "Cycle color"),
            entry("\u{2191}/\u{2193}", "Step date by day, time by 15m"),
            entry("Enter", "Save"),
            entry("Esc", "Cancel"),
            Line::from(""),
            Line::from(vec![
                Span::styled("  q", key_style),
                Span::styled(" / ", theme.dim),
                Span::styled("Esc     ", key_style),
                Span::raw("Quit / close popup"),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
