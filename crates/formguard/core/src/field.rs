// File: src/field.rs
// Purpose: Abstract view of a form field read from the host page

use serde::{Deserialize, Serialize};

use crate::registry::ValidatorName;

/// Numeric constraints sourced from `data-min-length` / `data-max-length`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConstraints {
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
}

impl FieldConstraints {
    /// Build constraints from raw attribute values
    ///
    /// Values that do not parse are treated as absent. A maximum of zero
    /// means "no maximum".
    pub fn from_attributes(min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            min_length: parse_length_attr("data-min-length", min),
            max_length: parse_length_attr("data-max-length", max).filter(|&n| n > 0),
        }
    }
}

/// Reads the leading digits of an attribute, so `"10px"` is 10
fn parse_length_attr(attr: &str, raw: Option<&str>) -> Option<usize> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());

    match raw[..end].parse::<usize>() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!("Ignoring {}=\"{}\": not a length", attr, raw);
            None
        }
    }
}

/// Snapshot of a field's value and metadata
///
/// Built fresh for every validation call; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    /// Declared input type (`email`, `tel`, `date`, `select-one`, ...)
    #[serde(default, rename = "type")]
    pub input_type: String,
    /// Text of the associated `<label>`, if any
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Explicit `data-validator` hint
    #[serde(default)]
    pub validator: Option<ValidatorName>,
    #[serde(default, flatten)]
    pub constraints: FieldConstraints,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_constraints(mut self, constraints: FieldConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_validator(mut self, validator: ValidatorName) -> Self {
        self.validator = Some(validator);
        self
    }

    /// The trimmed value every validator sees
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Human readable name used in "is required" messages
    ///
    /// Label text (asterisks stripped), then placeholder, then the field
    /// name title-cased, then `Field`.
    pub fn display_label(&self) -> String {
        if let Some(label) = self.label.as_deref() {
            let cleaned = label.replace('*', "");
            let cleaned = cleaned.trim();
            if !cleaned.is_empty() {
                return cleaned.to_string();
            }
        }

        if let Some(placeholder) = self.placeholder.as_deref().filter(|p| !p.is_empty()) {
            return placeholder.to_string();
        }

        let from_name = title_case(&self.name.replace(['_', '-'], " "));
        if from_name.trim().is_empty() {
            "Field".to_string()
        } else {
            from_name
        }
    }
}

/// Uppercase the first character of every word
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_word = false;
    for c in s.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}
