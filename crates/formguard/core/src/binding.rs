// File: src/binding.rs
// Purpose: Which validator a field gets and which user events trigger it

use serde::{Deserialize, Serialize};

use crate::config::DetectionConfig;
use crate::field::FieldDescriptor;
use crate::registry::ValidatorName;

/// User-originated events the engine listens to
///
/// Submit is handled at form level and never appears in a field plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldEvent {
    Input,
    Blur,
    Change,
}

impl FieldEvent {
    /// DOM event type string
    pub fn as_str(self) -> &'static str {
        match self {
            FieldEvent::Input => "input",
            FieldEvent::Blur => "blur",
            FieldEvent::Change => "change",
        }
    }
}

/// What to do when an event fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ClearErrors,
    Validate(Option<ValidatorName>),
}

/// Ordered actions to run per event for one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingPlan {
    pub hint: Option<ValidatorName>,
    pub triggers: Vec<(FieldEvent, Vec<Action>)>,
}

impl BindingPlan {
    /// Actions to run for `event`, in order
    pub fn actions_for(&self, event: FieldEvent) -> &[Action] {
        self.triggers
            .iter()
            .find(|(e, _)| *e == event)
            .map(|(_, actions)| actions.as_slice())
            .unwrap_or(&[])
    }

    pub fn events(&self) -> impl Iterator<Item = FieldEvent> + '_ {
        self.triggers.iter().map(|(event, _)| *event)
    }
}

/// Turns field metadata into explicit validator overrides
#[derive(Debug, Clone, Default)]
pub struct BindingPolicy {
    detection: DetectionConfig,
    clear_on_input: bool,
}

impl BindingPolicy {
    pub fn new(detection: DetectionConfig, clear_on_input: bool) -> Self {
        Self {
            detection,
            clear_on_input,
        }
    }

    /// Validator implied by the field's attributes, if any
    ///
    /// A `data-validator` attribute wins; then phone, email, date pickers,
    /// person names and postal codes, in that order.
    pub fn hint_for(&self, field: &FieldDescriptor) -> Option<ValidatorName> {
        if field.validator.is_some() {
            return field.validator;
        }

        let name = field.name.as_str();
        let kind = field.input_type.as_str();
        let d = &self.detection;

        if name == "phone" || kind == "tel" || has_fragment(name, &d.phone_fragment) {
            return Some(ValidatorName::Phone);
        }
        if kind == "email" || name == "email" {
            return Some(ValidatorName::Email);
        }
        if kind == "date" {
            return Some(if has_fragment(name, &d.birth_fragment) {
                ValidatorName::PastDate
            } else if has_fragment(name, &d.appointment_fragment) {
                ValidatorName::FutureDate
            } else {
                ValidatorName::Date
            });
        }
        if d.name_fragments.iter().any(|f| has_fragment(name, f)) {
            return Some(ValidatorName::Name);
        }
        if d.zipcode_names.iter().any(|z| z == name) {
            return Some(ValidatorName::Zipcode);
        }

        None
    }

    /// Listener plan for a field
    ///
    /// Keystrokes clear stale errors and re-run text validators live; blur
    /// always validates; date pickers validate on change.
    pub fn plan(&self, field: &FieldDescriptor) -> BindingPlan {
        let hint = self.hint_for(field);
        let mut input = Vec::new();
        let mut triggers = Vec::new();

        if self.clear_on_input {
            input.push(Action::ClearErrors);
        }

        match hint {
            Some(name) if name.is_date_kind() => {
                triggers.push((FieldEvent::Change, vec![Action::Validate(hint)]));
            }
            Some(_) => input.push(Action::Validate(hint)),
            None => {}
        }

        if !input.is_empty() {
            triggers.insert(0, (FieldEvent::Input, input));
        }
        triggers.push((FieldEvent::Blur, vec![Action::Validate(hint)]));

        BindingPlan { hint, triggers }
    }
}

fn has_fragment(name: &str, fragment: &str) -> bool {
    !fragment.is_empty() && name.contains(fragment)
}
