use std::fmt;

use crate::reminder::Reminder;

/// One named, independently validated piece of form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Description,
    Color,
    Date,
    Time,
    City,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Description,
        Field::Color,
        Field::Date,
        Field::Time,
        Field::City,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Description => "description",
            Field::Color => "color",
            Field::Date => "date",
            Field::Time => "time",
            Field::City => "city",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Form-local copy of the editable part of a [`Reminder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub description: String,
    pub color: String,
    pub date: String,
    pub time: String,
    pub city: String,
}

impl FormValues {
    pub fn from_reminder(reminder: &Reminder) -> Self {
        Self {
            description: reminder.description.clone(),
            color: reminder.color.clone(),
            date: reminder.date.clone(),
            time: reminder.time.clone(),
            city: reminder.city.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Description => &self.description,
            Field::Color => &self.color,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::City => &self.city,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Description => &mut self.description,
            Field::Color => &mut self.color,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::City => &mut self.city,
        }
    }
}
