// File: src/config.rs
// Purpose: Engine configuration parsed from formguard.toml text

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub classes: ClassConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,

    #[serde(default)]
    pub notification: NotificationConfig,

    #[serde(default)]
    pub detection: DetectionConfig,
}

/// CSS class names the renderer toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassConfig {
    #[serde(default = "default_valid_classes")]
    pub valid: Vec<String>,

    #[serde(default = "default_invalid_classes")]
    pub invalid: Vec<String>,

    /// Transient attention effect added to invalid fields
    #[serde(default = "default_shake_class")]
    pub shake: String,

    /// Class(es) of the error message node placed next to a field
    #[serde(default = "default_error_slot_class")]
    pub error_slot: String,
}

/// Timing of visual feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default = "default_shake_ms")]
    pub shake_ms: u32,

    /// Clear stale errors on every keystroke before re-validating
    #[serde(default = "default_true")]
    pub clear_on_input: bool,
}

/// Aggregate message shown when a form fails validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_form_error_message")]
    pub form_error_message: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

/// Field name heuristics used when binding listeners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Names containing this fragment get the phone validator
    #[serde(default = "default_phone_fragment")]
    pub phone_fragment: String,

    /// Names containing any of these get the name validator
    #[serde(default = "default_name_fragments")]
    pub name_fragments: Vec<String>,

    /// Date fields whose name contains this must be in the past
    #[serde(default = "default_birth_fragment")]
    pub birth_fragment: String,

    /// Date fields whose name contains this must be today or later
    #[serde(default = "default_appointment_fragment")]
    pub appointment_fragment: String,

    /// Exact names that get the zipcode validator
    #[serde(default = "default_zipcode_names")]
    pub zipcode_names: Vec<String>,
}

// Default values
fn default_valid_classes() -> Vec<String> {
    vec!["is-valid".to_string(), "valid".to_string()]
}

fn default_invalid_classes() -> Vec<String> {
    vec!["is-invalid".to_string(), "invalid".to_string()]
}

fn default_shake_class() -> String {
    "shake".to_string()
}

fn default_error_slot_class() -> String {
    "error-message invalid-feedback".to_string()
}

fn default_shake_ms() -> u32 {
    300
}

fn default_true() -> bool {
    true
}

fn default_form_error_message() -> String {
    "Please correct the errors in the form before submitting.".to_string()
}

fn default_timeout_ms() -> u32 {
    5000
}

fn default_phone_fragment() -> String {
    "phone".to_string()
}

fn default_name_fragments() -> Vec<String> {
    vec!["name".to_string(), "Name".to_string()]
}

fn default_birth_fragment() -> String {
    "birth".to_string()
}

fn default_appointment_fragment() -> String {
    "appointment".to_string()
}

fn default_zipcode_names() -> Vec<String> {
    vec![
        "zipcode".to_string(),
        "zip".to_string(),
        "postal_code".to_string(),
    ]
}

// Default implementations
impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            valid: default_valid_classes(),
            invalid: default_invalid_classes(),
            shake: default_shake_class(),
            error_slot: default_error_slot_class(),
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            shake_ms: default_shake_ms(),
            clear_on_input: true,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            form_error_message: default_form_error_message(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            phone_fragment: default_phone_fragment(),
            name_fragments: default_name_fragments(),
            birth_fragment: default_birth_fragment(),
            appointment_fragment: default_appointment_fragment(),
            zipcode_names: default_zipcode_names(),
        }
    }
}

impl ClassConfig {
    /// Selector matching an existing error slot (`.error-message, .invalid-feedback`)
    pub fn error_slot_selector(&self) -> String {
        self.error_slot
            .split_whitespace()
            .map(|class| format!(".{}", class))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl EngineConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: EngineConfig =
            toml::from_str(content).context("Failed to parse formguard config")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.classes.valid, vec!["is-valid", "valid"]);
        assert_eq!(config.classes.invalid, vec!["is-invalid", "invalid"]);
        assert_eq!(config.feedback.shake_ms, 300);
        assert!(config.feedback.clear_on_input);
        assert_eq!(config.notification.timeout_ms, 5000);
        assert_eq!(config.detection.zipcode_names, vec!["zipcode", "zip", "postal_code"]);
    }

    #[test]
    fn test_empty_config() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            [classes]
            invalid = ["has-error"]

            [notification]
            timeout_ms = 2500
        "#;
        let config = EngineConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.classes.invalid, vec!["has-error"]);
        assert_eq!(config.classes.valid, vec!["is-valid", "valid"]);
        assert_eq!(config.notification.timeout_ms, 2500);
        assert_eq!(
            config.notification.form_error_message,
            "Please correct the errors in the form before submitting."
        );
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(EngineConfig::from_toml_str("[classes\nvalid = 3").is_err());
    }

    #[test]
    fn test_parse_error_names_the_config() {
        let err = EngineConfig::from_toml_str("[feedback]\nshake_ms = \"slow\"").unwrap_err();
        assert!(err.to_string().contains("formguard config"));
    }

    #[test]
    fn test_error_slot_selector() {
        let classes = ClassConfig::default();
        assert_eq!(classes.error_slot_selector(), ".error-message, .invalid-feedback");
    }
}
