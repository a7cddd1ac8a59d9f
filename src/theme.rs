use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme built from settings. Only the first call wins.
pub fn install(theme: Theme) {
    if THEME.set(theme).is_err() {
        log::warn!("Theme already installed, ignoring");
    }
}

/// Get the active theme (default until one is installed).
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub selected: Style,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub accent: Style,
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            selected: Style::default().fg(Color::Black).bg(Color::Cyan),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            accent: Style::default().fg(Color::Indexed(62)),
            error: Style::default().fg(Color::LightRed),
        }
    }
}

impl Theme {
    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default(),
        }
    }

    fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(139, 233, 253)),
            header: Style::default().fg(Color::Rgb(248, 248, 242)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(98, 114, 164)),
            border: Style::default().fg(Color::Rgb(68, 71, 90)),
            status: Style::default()
                .fg(Color::Rgb(248, 248, 242))
                .bg(Color::Rgb(68, 71, 90)),
            accent: Style::default().fg(Color::Rgb(189, 147, 249)),
            error: Style::default().fg(Color::Rgb(255, 85, 85)),
        }
    }

    fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(131, 165, 152)),
            header: Style::default().fg(Color::Rgb(235, 219, 178)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(146, 131, 116)),
            border: Style::default().fg(Color::Rgb(102, 92, 84)),
            status: Style::default()
                .fg(Color::Rgb(235, 219, 178))
                .bg(Color::Rgb(80, 73, 69)),
            accent: Style::default().fg(Color::Rgb(250, 189, 47)),
            error: Style::default().fg(Color::Rgb(251, 73, 52)),
        }
    }

    fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(136, 192, 208)),
            header: Style::default().fg(Color::Rgb(229, 233, 240)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(76, 86, 106)),
            border: Style::default().fg(Color::Rgb(67, 76, 94)),
            status: Style::default()
                .fg(Color::Rgb(229, 233, 240))
                .bg(Color::Rgb(67, 76, 94)),
            accent: Style::default().fg(Color::Rgb(129, 161, 193)),
            error: Style::default().fg(Color::Rgb(191, 97, 106)),
        }
    }
}

// ── TOML config types ──

/// The `[theme]` table of the settings file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub selected_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub header_fg: Option<String>,
    pub dim_fg: Option<String>,
    pub border_fg: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
    pub accent_fg: Option<String>,
    pub error_fg: Option<String>,
}

impl ThemeConfig {
    pub fn into_theme(self) -> Theme {
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        let overrides: [(&Option<String>, fn(&mut Theme, Color)); 9] = [
            (&self.selected_fg, |t, c| t.selected = t.selected.fg(c)),
            (&self.selected_bg, |t, c| t.selected = t.selected.bg(c)),
            (&self.header_fg, |t, c| t.header = t.header.fg(c)),
            (&self.dim_fg, |t, c| t.dim = t.dim.fg(c)),
            (&self.border_fg, |t, c| t.border = t.border.fg(c)),
            (&self.status_fg, |t, c| t.status = t.status.fg(c)),
            (&self.status_bg, |t, c| t.status = t.status.bg(c)),
            (&self.accent_fg, |t, c| t.accent = t.accent.fg(c)),
            (&self.error_fg, |t, c| t.error = t.error.fg(c)),
        ];

        for (value, apply) in overrides {
            if let Some(raw) = value.as_deref() {
                match parse_color(raw) {
                    Some(c) => apply(&mut theme, c),
                    None => log::warn!("Ignoring unrecognised theme color '{}'", raw),
                }
            }
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') && s.len() == 7 {
        let r = u8::from_str_radix(s.get(1..3)?, 16).ok()?;
        let g = u8::from_str_radix(s.get(3..5)?, 16).ok()?;
        let b = u8::from_str_radix(s.get(5..7)?, 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightblue" => Some(Color::LightBlue),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}
