// File: src/error.rs
// Purpose: Programmer and configuration errors (user input errors are ValidationResults)

use thiserror::Error;

/// Errors raised by misuse of the engine.
///
/// A bad field value is never one of these; it is reported as an invalid
/// [`ValidationResult`](crate::ValidationResult) instead.
#[derive(Debug, Error)]
pub enum FormGuardError {
    #[error("unknown validator '{0}'")]
    UnknownValidator(String),

    #[error("missing expected structure: {0}")]
    MissingStructure(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
