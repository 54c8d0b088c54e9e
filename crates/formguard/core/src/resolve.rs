// File: src/resolve.rs
// Purpose: Decide which validator applies to a field and run it

use crate::clock::ValidationContext;
use crate::field::FieldDescriptor;
use crate::registry::ValidatorName;
use crate::result::ValidationResult;

/// Infer a validator from the field's declared type and name
///
/// Only email and phone fields are detected; anything else has no rule.
pub fn auto_detect(field: &FieldDescriptor) -> Option<ValidatorName> {
    if field.input_type == "email" {
        Some(ValidatorName::Email)
    } else if field.name == "phone" || field.input_type == "tel" {
        Some(ValidatorName::Phone)
    } else {
        None
    }
}

/// Validate one field
///
/// 1. required and blank fails before any other rule
/// 2. optional and blank passes
/// 3. an explicit validator wins over auto-detection
/// 4. otherwise the auto-detected validator runs, if any
pub fn check_field(
    field: &FieldDescriptor,
    explicit: Option<ValidatorName>,
    ctx: &ValidationContext,
) -> ValidationResult {
    let value = field.trimmed();

    if value.is_empty() {
        if field.required {
            return ValidationResult::fail(format!("{} is required.", field.display_label()));
        }
        return ValidationResult::ok();
    }

    match explicit.or_else(|| auto_detect(field)) {
        Some(validator) => validator.run(value, field, ctx),
        None => ValidationResult::ok(),
    }
}
