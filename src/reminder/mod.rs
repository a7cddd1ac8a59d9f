pub mod color;
pub mod store;

pub use color::{ReminderColor, ALL_COLORS};
pub use store::Store;

use serde::{Deserialize, Serialize};

use crate::form::ReminderPayload;

pub type ReminderId = u64;

/// A scheduled reminder as the host keeps it.
///
/// Editable fields stay plain strings: records read from disk are not
/// trusted, the form schema is what decides whether they are valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub description: String,
    pub color: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Reminder {
    /// A blank reminder for the given day, used when creating a new one.
    pub fn draft(id: ReminderId, date: chrono::NaiveDate) -> Self {
        Self {
            id,
            description: String::new(),
            color: ReminderColor::default().name().to_string(),
            date: date.format(crate::form::schema::DATE_FORMAT_CHRONO).to_string(),
            time: "09:00".to_string(),
            city: None,
        }
    }

    pub fn palette_color(&self) -> Option<ReminderColor> {
        self.color.parse().ok()
    }

    pub fn apply(&mut self, payload: &ReminderPayload) {
        self.description = payload.description.clone();
        self.color = payload.color.clone();
        self.date = payload.date.clone();
        self.time = payload.time.clone();
        self.city = Some(payload.city.clone()).filter(|c| !c.is_empty());
    }

    /// Sort key: date then time, both zero-padded so string order works.
    pub fn schedule_key(&self) -> (&str, &str) {
        (&self.date, &self.time)
    }
}

impl From<ReminderPayload> for Reminder {
    fn from(payload: ReminderPayload) -> Self {
        let mut reminder = Reminder {
            id: payload.id,
            description: String::new(),
            color: String::new(),
            date: String::new(),
            time: String::new(),
            city: None,
        };
        reminder.apply(&payload);
        reminder
    }
}
