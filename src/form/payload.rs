use super::values::FormValues;
use crate::reminder::ReminderId;

/// What the form hands to its submit callback: the original id plus all
/// five editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderPayload {
    pub id: ReminderId,
    pub description: String,
    pub color: String,
    pub city: String,
    pub date: String,
    pub time: String,
}

impl ReminderPayload {
    pub fn from_values(id: ReminderId, values: FormValues) -> Self {
        let FormValues {
            description,
            color,
            date,
            time,
            city,
        } = values;

        Self {
            id,
            description,
            color,
            city,
            date,
            time,
        }
    }
}
