//! String shape validators

use once_cell::sync::Lazy;
use regex::Regex;

use crate::result::ValidationResult;

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Value must be non-empty after trimming
pub fn validate_required(value: &str) -> ValidationResult {
    ValidationResult::check(!value.trim().is_empty(), "This field is required.")
}

/// Length in characters must be at least `min`
pub fn validate_min_length(value: &str, min: usize) -> ValidationResult {
    if value.chars().count() >= min {
        ValidationResult::ok()
    } else {
        ValidationResult::fail(format!("Minimum length is {} characters.", min))
    }
}

/// Length in characters must be at most `max`; `None` is unbounded
pub fn validate_max_length(value: &str, max: Option<usize>) -> ValidationResult {
    match max {
        Some(max) if value.chars().count() > max => {
            ValidationResult::fail(format!("Maximum length is {} characters.", max))
        }
        _ => ValidationResult::ok(),
    }
}

/// ASCII digits only
pub fn validate_numeric(value: &str) -> ValidationResult {
    ValidationResult::check(
        NUMERIC_REGEX.is_match(value),
        "This field should contain only numbers.",
    )
}

/// ASCII letters and digits only
pub fn validate_alphanumeric(value: &str) -> ValidationResult {
    ValidationResult::check(
        ALPHANUMERIC_REGEX.is_match(value),
        "This field should contain only letters and numbers.",
    )
}
