//! The reminder form: values, schema, controller and submit adapter.
//!
//! Rendering lives in [`crate::components::reminder_form`]; nothing here
//! knows about the terminal.

pub mod controller;
pub mod payload;
pub mod schema;
pub mod values;

pub use controller::{FormPhase, ReminderForm, SubmitOutcome};
pub use payload::ReminderPayload;
pub use schema::{validate, validate_field, ValidationErrors};
pub use values::{Field, FormValues};
