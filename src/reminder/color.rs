use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

/// The fixed palette a reminder can be tagged with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReminderColor {
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    #[default]
    Blue,
    Indigo,
    Purple,
    Pink,
    Gray,
}

pub const ALL_COLORS: [ReminderColor; 10] = [
    ReminderColor::Red,
    ReminderColor::Orange,
    ReminderColor::Yellow,
    ReminderColor::Green,
    ReminderColor::Teal,
    ReminderColor::Blue,
    ReminderColor::Indigo,
    ReminderColor::Purple,
    ReminderColor::Pink,
    ReminderColor::Gray,
];

impl ReminderColor {
    pub fn name(&self) -> &'static str {
        match self {
            ReminderColor::Red => "red",
            ReminderColor::Orange => "orange",
            ReminderColor::Yellow => "yellow",
            ReminderColor::Green => "green",
            ReminderColor::Teal => "teal",
            ReminderColor::Blue => "blue",
            ReminderColor::Indigo => "indigo",
            ReminderColor::Purple => "purple",
            ReminderColor::Pink => "pink",
            ReminderColor::Gray => "gray",
        }
    }

    pub fn to_ratatui(&self) -> Color {
        match self {
            ReminderColor::Red => Color::Rgb(239, 68, 68),
            ReminderColor::Orange => Color::Rgb(249, 115, 22),
            ReminderColor::Yellow => Color::Rgb(234, 179, 8),
            ReminderColor::Green => Color::Rgb(34, 197, 94),
            ReminderColor::Teal => Color::Rgb(20, 184, 166),
            ReminderColor::Blue => Color::Rgb(59, 130, 246),
            ReminderColor::Indigo => Color::Rgb(99, 102, 241),
            ReminderColor::Purple => Color::Rgb(168, 85, 247),
            ReminderColor::Pink => Color::Rgb(236, 72, 153),
            ReminderColor::Gray => Color::Rgb(107, 114, 128),
        }
    }

    fn index(&self) -> usize {
        ALL_COLORS.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        ALL_COLORS[(self.index() + 1) % ALL_COLORS.len()]
    }

    pub fn prev(&self) -> Self {
        ALL_COLORS[(self.index() + ALL_COLORS.len() - 1) % ALL_COLORS.len()]
    }
}

impl fmt::Display for ReminderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown reminder color '{}'", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for ReminderColor {
    type Err = UnknownColor;

    /// Exact, case-sensitive match on the palette names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_COLORS
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
