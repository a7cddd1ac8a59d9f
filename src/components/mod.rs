pub mod help;
pub mod reminder_form;
pub mod reminder_list;
pub mod status_bar;

pub use help::Help;
pub use reminder_form::{ReminderFormState, ReminderFormView};
pub use reminder_list::ReminderList;
pub use status_bar::StatusBar;
