// File: src/registry.rs
// Purpose: Closed set of validator names and their functions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clock::ValidationContext;
use crate::error::FormGuardError;
use crate::field::FieldDescriptor;
use crate::result::ValidationResult;
use crate::validators;

/// Signature shared by every registered validator
///
/// The value is already trimmed. The descriptor supplies per-field
/// constraints such as `data-min-length`.
pub type ValidatorFn = fn(&str, &FieldDescriptor, &ValidationContext) -> ValidationResult;

/// Name of a built-in validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidatorName {
    Required,
    Email,
    Phone,
    Name,
    Date,
    FutureDate,
    PastDate,
    Zipcode,
    MinLength,
    MaxLength,
    Numeric,
    Alphanumeric,
}

impl ValidatorName {
    pub const ALL: [ValidatorName; 12] = [
        ValidatorName::Required,
        ValidatorName::Email,
        ValidatorName::Phone,
        ValidatorName::Name,
        ValidatorName::Date,
        ValidatorName::FutureDate,
        ValidatorName::PastDate,
        ValidatorName::Zipcode,
        ValidatorName::MinLength,
        ValidatorName::MaxLength,
        ValidatorName::Numeric,
        ValidatorName::Alphanumeric,
    ];

    /// Name as written in markup and on the JS side
    pub fn as_str(self) -> &'static str {
        match self {
            ValidatorName::Required => "required",
            ValidatorName::Email => "email",
            ValidatorName::Phone => "phone",
            ValidatorName::Name => "name",
            ValidatorName::Date => "date",
            ValidatorName::FutureDate => "futureDate",
            ValidatorName::PastDate => "pastDate",
            ValidatorName::Zipcode => "zipcode",
            ValidatorName::MinLength => "minLength",
            ValidatorName::MaxLength => "maxLength",
            ValidatorName::Numeric => "numeric",
            ValidatorName::Alphanumeric => "alphanumeric",
        }
    }

    /// Look up the function registered under this name
    pub fn func(self) -> ValidatorFn {
        match self {
            ValidatorName::Required => required,
            ValidatorName::Email => email,
            ValidatorName::Phone => phone,
            ValidatorName::Name => name,
            ValidatorName::Date => date,
            ValidatorName::FutureDate => future_date,
            ValidatorName::PastDate => past_date,
            ValidatorName::Zipcode => zipcode,
            ValidatorName::MinLength => min_length,
            ValidatorName::MaxLength => max_length,
            ValidatorName::Numeric => numeric,
            ValidatorName::Alphanumeric => alphanumeric,
        }
    }

    /// Run this validator against an already trimmed value
    pub fn run(
        self,
        value: &str,
        field: &FieldDescriptor,
        ctx: &ValidationContext,
    ) -> ValidationResult {
        (self.func())(value, field, ctx)
    }

    /// Whether this validator reacts to date pickers rather than keystrokes
    pub fn is_date_kind(self) -> bool {
        matches!(
            self,
            ValidatorName::Date | ValidatorName::FutureDate | ValidatorName::PastDate
        )
    }
}

// Adapters giving every validator the registry signature

fn required(v: &str, _: &FieldDescriptor, _: &ValidationContext) -> ValidationResult {
    validators::validate_required(v)
}

fn email(v: &str, _: &FieldDescriptor, _: &ValidationContext) -> ValidationResult {
    validators::validate_email(v)
}

fn phone(v: &str, _: &FieldDescriptor, _: &ValidationContext) -> ValidationResult {
    validators::validate_phone(v)
}

fn name(v: &str, _: &FieldDescriptor, _: &ValidationContext) -> ValidationResult {
    validators::validate_name(v)
}

fn date(v: &str, _: &FieldDescriptor, _: &ValidationContext) -> ValidationResult {
    validators::validate_date(v)
}

fn future_date(v: &str, _: &FieldDescriptor, ctx: &ValidationContext) -> ValidationResult {
    validators::validate_future_date(v, ctx)
}

fn past_date(v: &str, _: &FieldDescriptor, ctx: &ValidationContext) -> ValidationResult {
    validators::validate_past_date(v, ctx)
}

fn zipcode(v: &str, _: &FieldDescriptor, _: &ValidationContext) -> ValidationResult {
    validators::validate_zipcode(v)
}

fn min_length(v: &str, field: &FieldDescriptor, _: &ValidationContext) -> ValidationResult {
    validators::validate_min_length(v, field.constraints.min_length.unwrap_or(0))
}

fn max_length(v: &str, field: &FieldDescriptor, _: &ValidationContext) -> ValidationResult {
    validators::validate_max_length(v, field.constraints.max_length)
}

fn numeric(v: &str, _: &FieldDescriptor, _: &ValidationContext) -> ValidationResult {
    validators::validate_numeric(v)
}

fn alphanumeric(v: &str, _: &FieldDescriptor, _: &ValidationContext) -> ValidationResult {
    validators::validate_alphanumeric(v)
}

impl fmt::Display for ValidatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidatorName {
    type Err = FormGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidatorName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FormGuardError::UnknownValidator(s.to_string()))
    }
}
