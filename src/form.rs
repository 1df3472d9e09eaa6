//! Maps raw text fields onto per-field validation messages.
//!
//! The front end hands over whatever the user typed; this module decides,
//! per field, whether it is usable and which message to show when it is not.
//! An empty field is "missing", never parsed as zero. The `today` snapshot
//! is injected by the caller so nothing here touches the clock.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::validate::{day_is_valid, month_is_valid, year_is_valid};

/// The three raw text fields of one submission.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub day: String,
    pub month: String,
    pub year: String,
}

/// Why a field was rejected. The `Display` text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Must be a valid day")]
    InvalidDay,
    #[error("Must be a valid month")]
    InvalidMonth,
    #[error("Must be a valid year")]
    InvalidYear,
    #[error("Must be in the past")]
    FutureYear,
}

/// Per-field outcome of checking one submission. `None` means the field is
/// fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldReport {
    pub day: Option<FieldError>,
    pub month: Option<FieldError>,
    pub year: Option<FieldError>,
}

impl FieldReport {
    pub fn is_clean(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }

    /// The failed fields, as (field name, error) pairs in day/month/year
    /// order.
    pub fn problems(&self) -> impl Iterator<Item = (&'static str, FieldError)> {
        [
            ("day", self.day),
            ("month", self.month),
            ("year", self.year),
        ]
        .into_iter()
        .filter_map(|(name, err)| err.map(|e| (name, e)))
    }
}

/// Checks all three fields of one submission against a single `today`
/// snapshot.
pub fn check_form(input: &RawInput, today: NaiveDate) -> FieldReport {
    FieldReport {
        day: check_day(&input.day, &input.month, today),
        month: check_month(&input.month),
        year: check_year(&input.year, today),
    }
}

/// Checks the day field. The month field supplies the month context when it
/// parses to a nonzero number; otherwise the current month stands in, so a
/// lone day field can still be judged. A present-but-invalid month makes the
/// day invalid as well.
pub fn check_day(raw_day: &str, raw_month: &str, today: NaiveDate) -> Option<FieldError> {
    if raw_day.is_empty() {
        return Some(FieldError::Required);
    }

    let month = match raw_month.trim().parse::<i32>() {
        Ok(0) | Err(_) => today.month() as i32,
        Ok(m) => m,
    };

    match raw_day.trim().parse::<i32>() {
        Ok(d) if day_is_valid(d, month) => None,
        _ => Some(FieldError::InvalidDay),
    }
}

/// Checks the month field.
pub fn check_month(raw: &str) -> Option<FieldError> {
    if raw.is_empty() {
        return Some(FieldError::Required);
    }

    match raw.trim().parse::<i32>() {
        Ok(m) if month_is_valid(m) => None,
        _ => Some(FieldError::InvalidMonth),
    }
}

/// Checks the year field, distinguishing a future year from a malformed or
/// out-of-range one.
pub fn check_year(raw: &str, today: NaiveDate) -> Option<FieldError> {
    if raw.is_empty() {
        return Some(FieldError::Required);
    }

    match raw.trim().parse::<i32>() {
        Ok(y) if year_is_valid(y, today.year()) => None,
        Ok(y) if y > today.year() => Some(FieldError::FutureYear),
        _ => Some(FieldError::InvalidYear),
    }
}
