// File: src/result.rs
// Purpose: Outcome of a single validator run

use serde::{Deserialize, Serialize};

/// Result of validating one value
///
/// `message` is empty exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// Create a passing result
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// Create a failing result with a user-facing message
    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "failures carry a message");
        Self {
            valid: false,
            message,
        }
    }

    /// Pass when `condition` holds, otherwise fail with `message`
    pub fn check(condition: bool, message: &str) -> Self {
        if condition {
            Self::ok()
        } else {
            Self::fail(message)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_empty_iff_valid() {
        assert_eq!(ValidationResult::ok().message, "");
        assert!(!ValidationResult::fail("nope").message.is_empty());
        assert_eq!(ValidationResult::check(true, "unused"), ValidationResult::ok());
        assert_eq!(
            ValidationResult::check(false, "bad"),
            ValidationResult::fail("bad")
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&ValidationResult::fail("x")).unwrap();
        assert_eq!(json, r#"{"valid":false,"message":"x"}"#);
    }
}
