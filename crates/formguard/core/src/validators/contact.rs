//! Contact detail validators: email, phone, person name, postal code

use once_cell::sync::Lazy;
use regex::Regex;

use crate::result::ValidationResult;

// Email validation regex
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Letters, spaces and the punctuation found in names
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s.\-']+$").unwrap());

const PHONE_DIGITS: usize = 10;
const PINCODE_DIGITS: usize = 6;

/// Validate email format
pub fn validate_email(value: &str) -> ValidationResult {
    ValidationResult::check(
        EMAIL_REGEX.is_match(value),
        "Please enter a valid email address.",
    )
}

/// Validate a 10 digit mobile number; separators are ignored
pub fn validate_phone(value: &str) -> ValidationResult {
    let digits = digits_only(value);

    if digits.len() != PHONE_DIGITS {
        return ValidationResult::fail("Phone number must be exactly 10 digits.");
    }
    if all_zeros(&digits) {
        return ValidationResult::fail("Phone number cannot be all zeros.");
    }
    if digits.starts_with('0') {
        return ValidationResult::fail(
            "Please enter a valid mobile number (should not start with 0).",
        );
    }

    ValidationResult::ok()
}

/// Validate a person's name
pub fn validate_name(value: &str) -> ValidationResult {
    ValidationResult::check(
        NAME_REGEX.is_match(value) && value.chars().count() >= 2,
        "Name should contain only letters and be at least 2 characters long.",
    )
}

/// Validate a 6 digit Indian pincode; separators are ignored
pub fn validate_zipcode(value: &str) -> ValidationResult {
    let digits = digits_only(value);

    if digits.len() != PINCODE_DIGITS {
        return ValidationResult::fail("Zipcode must be exactly 6 digits.");
    }
    if all_zeros(&digits) {
        return ValidationResult::fail("Zipcode cannot be all zeros.");
    }
    if digits.starts_with('0') {
        return ValidationResult::fail("Indian pincode cannot start with 0.");
    }

    ValidationResult::ok()
}

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn all_zeros(digits: &str) -> bool {
    digits.chars().all(|c| c == '0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("a@b.co").valid);
        assert!(validate_email("user.name+tag@example.co.in").valid);
        assert!(!validate_email("a@b").valid);
        assert!(!validate_email("a b@c.com").valid);
        assert!(!validate_email("a@@b.com").valid);
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("1234567890").valid);
        assert!(validate_phone("98765-43210").valid);
        assert!(validate_phone("(987) 654 3210").valid);

        assert_eq!(
            validate_phone("12345").message,
            "Phone number must be exactly 10 digits."
        );
        assert_eq!(
            validate_phone("0000000000").message,
            "Phone number cannot be all zeros."
        );
        assert_eq!(
            validate_phone("0123456789").message,
            "Please enter a valid mobile number (should not start with 0)."
        );
    }

    #[test]
    fn test_name() {
        assert!(validate_name("Jo").valid);
        assert!(validate_name("Mary-Jane O'Neil Jr.").valid);
        assert!(!validate_name("J").valid);
        assert!(!validate_name("R2D2").valid);
    }

    #[test]
    fn test_zipcode() {
        assert!(validate_zipcode("123456").valid);
        assert!(validate_zipcode("560 001").valid);

        assert_eq!(
            validate_zipcode("1234").message,
            "Zipcode must be exactly 6 digits."
        );
        assert_eq!(
            validate_zipcode("000000").message,
            "Zipcode cannot be all zeros."
        );
        assert_eq!(
            validate_zipcode("012345").message,
            "Indian pincode cannot start with 0."
        );
    }
}
