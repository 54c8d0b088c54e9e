//! Calendar date validators
//!
//! `future_date` compares against midnight of the current day while
//! `past_date` compares against the current instant, so a value equal to
//! the current moment is not in the past.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::clock::ValidationContext;
use crate::result::ValidationResult;

const INVALID_DATE: &str = "Please enter a valid date.";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parse a field value into a local date-time
///
/// Date-only values resolve to local midnight. Values carrying an offset are
/// converted to local time.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Value must be a real calendar date
pub fn validate_date(value: &str) -> ValidationResult {
    ValidationResult::check(parse_date(value).is_some(), INVALID_DATE)
}

/// Value must be today or later
pub fn validate_future_date(value: &str, ctx: &ValidationContext) -> ValidationResult {
    let Some(date) = parse_date(value) else {
        return ValidationResult::fail(INVALID_DATE);
    };

    let start_of_today = ctx.now.date().and_time(NaiveTime::MIN);
    ValidationResult::check(date >= start_of_today, "Date must be today or in the future.")
}

/// Value must be strictly before the current instant
pub fn validate_past_date(value: &str, ctx: &ValidationContext) -> ValidationResult {
    let Some(date) = parse_date(value) else {
        return ValidationResult::fail(INVALID_DATE);
    };

    ValidationResult::check(date < ctx.now, "Date must be in the past.")
}
