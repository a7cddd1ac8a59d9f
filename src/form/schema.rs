//! Field rules for the reminder form.
//!
//! Each field is checked against an ordered list of rules and reports the
//! message of the first one it violates. There are no cross-field rules.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::values::{Field, FormValues};
use crate::reminder::ReminderColor;

pub const DESCRIPTION_MAX_CHARS: usize = 30;

pub const DATE_FORMAT: &str = "YYYY-MM-DD";
pub const TIME_FORMAT: &str = "HH:mm";

/// chrono equivalents of the display formats above.
pub const DATE_FORMAT_CHRONO: &str = "%Y-%m-%d";
pub const TIME_FORMAT_CHRONO: &str = "%H:%M";

// ASCII digits only.
const DATE_PATTERN: &str = r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$";
const TIME_PATTERN: &str = r"^([01][0-9]|2[0-3]):[0-5][0-9]$";

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DATE_PATTERN).expect("date pattern compiles"))
}

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TIME_PATTERN).expect("time pattern compiles"))
}

/// Per-field messages, at most one per field, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: Field, message: String) {
        self.errors.entry(field).or_insert(message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate every field. `Err` carries one message per failing field.
pub fn validate(values: &FormValues) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for field in Field::ALL {
        if let Err(message) = validate_field(field, values.get(field)) {
            errors.insert(field, message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate one field's value, returning the first violated rule's message.
pub fn validate_field(field: Field, value: &str) -> Result<(), String> {
    match field {
        Field::Description => {
            if value.is_empty() {
                return Err(format!(
                    "Please enter your reminder (max {} characters).",
                    DESCRIPTION_MAX_CHARS
                ));
            }
            if value.chars().count() > DESCRIPTION_MAX_CHARS {
                return Err(format!(
                    "Please enter no more than {} characters.",
                    DESCRIPTION_MAX_CHARS
                ));
            }
        }
        Field::Color => {
            if value.is_empty() {
                return Err("Please pick a color.".to_string());
            }
            if value.parse::<ReminderColor>().is_err() {
                return Err("Unknown color!".to_string());
            }
        }
        Field::Date => {
            if value.is_empty() {
                return Err("Please set the reminder date.".to_string());
            }
            if !date_regex().is_match(value) {
                return Err(format!("Date must be in the format ({}).", DATE_FORMAT));
            }
        }
        Field::Time => {
            if value.is_empty() {
                return Err("Please set the reminder time.".to_string());
            }
            if !time_regex().is_match(value) {
                return Err(format!("Time must be in the format ({}).", TIME_FORMAT));
            }
        }
        Field::City => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::ALL_COLORS;
    use proptest::prelude::*;

    fn valid_values() -> FormValues {
        FormValues {
            description: "Call mom".to_string(),
            color: "red".to_string(),
            date: "2024-01-01".to_string(),
            time: "09:00".to_string(),
            city: String::new(),
        }
    }

    #[test]
    fn valid_values_pass() {
        assert_eq!(validate(&valid_values()), Ok(()));
    }

    #[test]
    fn empty_description_reports_required_message() {
        let values = FormValues {
            description: String::new(),
            ..valid_values()
        };
        let errors = validate(&values).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Description),
            Some("Please enter your reminder (max 30 characters).")
        );
    }

    #[test]
    fn thirty_characters_is_the_limit() {
        assert!(validate_field(Field::Description, &"a".repeat(30)).is_ok());
        assert_eq!(
            validate_field(Field::Description, &"a".repeat(31)),
            Err("Please enter no more than 30 characters.".to_string())
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 30 two-byte characters
        assert!(validate_field(Field::Description, &"ی".repeat(30)).is_ok());
    }

    #[test]
    fn length_counts_scalar_values_not_utf16_units() {
        // Each emoji is two UTF-16 code units but one char.
        let thirty = "\u{1F600}".repeat(30);
        assert_eq!(thirty.encode_utf16().count(), 60);
        assert!(validate_field(Field::Description, &thirty).is_ok());

        let thirty_one = "\u{1F600}".repeat(31);
        assert_eq!(
            validate_field(Field::Description, &thirty_one),
            Err("Please enter no more than 30 characters.".to_string())
        );
    }

    #[test]
    fn empty_and_unknown_colors_have_distinct_messages() {
        assert_eq!(
            validate_field(Field::Color, ""),
            Err("Please pick a color.".to_string())
        );
        assert_eq!(
            validate_field(Field::Color, "chartreuse"),
            Err("Unknown color!".to_string())
        );
    }

    #[test]
    fn date_pattern_edges() {
        for ok in ["2024-01-01", "1999-12-31", "2024-02-30", "0000-10-10"] {
            assert!(validate_field(Field::Date, ok).is_ok(), "{ok} should pass");
        }
        for bad in ["2024-1-01", "2024-13-01", "2024-00-10", "2024-01-32", "24-01-01", "2024/01/01", " 2024-01-01"] {
            assert_eq!(
                validate_field(Field::Date, bad),
                Err("Date must be in the format (YYYY-MM-DD).".to_string()),
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn time_pattern_edges() {
        for ok in ["00:00", "09:00", "19:59", "23:59"] {
            assert!(validate_field(Field::Time, ok).is_ok(), "{ok} should pass");
        }
        for bad in ["24:00", "9:00", "09:60", "0900", "09:00:00"] {
            assert_eq!(
                validate_field(Field::Time, bad),
                Err("Time must be in the format (HH:mm).".to_string()),
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        assert!(validate_field(Field::Time, "٠٩:٠٠").is_err());
        assert!(validate_field(Field::Date, "۲۰۲۴-01-01").is_err());
    }

    #[test]
    fn city_is_unconstrained() {
        assert!(validate_field(Field::City, "").is_ok());
        assert!(validate_field(Field::City, &"x".repeat(200)).is_ok());
    }

    #[test]
    fn every_failing_field_is_reported_once() {
        let values = FormValues {
            description: String::new(),
            color: "mauve".to_string(),
            date: "tomorrow".to_string(),
            time: String::new(),
            city: String::new(),
        };
        let errors = validate(&values).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![Field::Description, Field::Color, Field::Date, Field::Time]
        );
    }

    proptest! {
        #[test]
        fn long_descriptions_fail_with_length_error(description in "[a-zA-Z ]{31,80}") {
            let values = FormValues { description, ..valid_values() };
            let errors = validate(&values).unwrap_err();
            prop_assert_eq!(
                errors.get(Field::Description),
                Some("Please enter no more than 30 characters.")
            );
        }

        #[test]
        fn colors_outside_the_palette_fail(color in "[a-z]{1,12}") {
            prop_assume!(!ALL_COLORS.iter().any(|c| c.name() == color));
            let values = FormValues { color, ..valid_values() };
            let errors = validate(&values).unwrap_err();
            prop_assert_eq!(errors.get(Field::Color), Some("Unknown color!"));
        }

        #[test]
        fn palette_colors_pass(index in 0..ALL_COLORS.len()) {
            prop_assert!(validate_field(Field::Color, ALL_COLORS[index].name()).is_ok());
        }

        #[test]
        fn well_formed_dates_pass(year in 0u32..10000, month in 1u32..=12, day in 1u32..=31) {
            let date = format!("{:04}-{:02}-{:02}", year, month, day);
            prop_assert!(validate_field(Field::Date, &date).is_ok());
        }

        #[test]
        fn out_of_range_months_fail(year in 0u32..10000, month in 13u32..100, day in 1u32..=28) {
            let date = format!("{:04}-{:02}-{:02}", year, month, day);
            prop_assert!(validate_field(Field::Date, &date).is_err());
        }

        #[test]
        fn well_formed_times_pass(hour in 0u32..24, minute in 0u32..60) {
            let time = format!("{:02}:{:02}", hour, minute);
            prop_assert!(validate_field(Field::Time, &time).is_ok());
        }

        #[test]
        fn out_of_range_hours_fail(hour in 24u32..100, minute in 0u32..60) {
            let time = format!("{:02}:{:02}", hour, minute);
            prop_assert!(validate_field(Field::Time, &time).is_err());
        }

        #[test]
        fn arbitrary_text_never_passes_as_time(text in "[a-z ]{0,8}") {
            prop_assert!(validate_field(Field::Time, &text).is_err());
        }
    }
}
