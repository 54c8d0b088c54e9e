// File: src/render.rs
// Purpose: Presentation port for a single field and the renderer driving it

use crate::config::{ClassConfig, FeedbackConfig};
use crate::field::FieldDescriptor;
use crate::result::ValidationResult;

/// Host-side view of one field
///
/// Implemented by the DOM adapter in the browser and by plain structs in
/// tests. The engine never holds on to a view between events.
pub trait FieldView {
    /// Fresh snapshot of the field's value and metadata
    fn descriptor(&self) -> FieldDescriptor;

    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    fn has_class(&self, class: &str) -> bool;

    /// Add `class` and remove it again after `duration_ms`
    fn pulse_class(&mut self, class: &str, duration_ms: u32);

    /// Create the error message node if the field has none yet
    fn ensure_error_slot(&mut self, class: &str);

    /// Set the error node's text and visibility
    fn set_error_text(&mut self, text: &str, visible: bool);

    /// Hide the error node if it exists; never creates one
    fn hide_error(&mut self);

    fn focus(&mut self);

    fn scroll_into_view(&mut self);
}

/// Applies validation results to a field's presentation state
#[derive(Debug, Clone, Default)]
pub struct FeedbackRenderer {
    classes: ClassConfig,
    feedback: FeedbackConfig,
}

impl FeedbackRenderer {
    pub fn new(classes: ClassConfig, feedback: FeedbackConfig) -> Self {
        Self { classes, feedback }
    }

    pub fn classes(&self) -> &ClassConfig {
        &self.classes
    }

    /// Show `result` on the field
    pub fn render<F: FieldView + ?Sized>(&self, field: &mut F, result: &ValidationResult) {
        for class in self.classes.valid.iter().chain(&self.classes.invalid) {
            field.remove_class(class);
        }

        if result.valid {
            for class in &self.classes.valid {
                field.add_class(class);
            }
        } else {
            for class in &self.classes.invalid {
                field.add_class(class);
            }
            field.pulse_class(&self.classes.shake, self.feedback.shake_ms);
        }

        field.ensure_error_slot(&self.classes.error_slot);
        field.set_error_text(&result.message, !result.message.is_empty());
    }

    /// Drop invalid styling while the user is still typing
    pub fn clear<F: FieldView + ?Sized>(&self, field: &mut F) {
        for class in &self.classes.invalid {
            field.remove_class(class);
        }
        field.hide_error();
    }

    /// Whether the field currently shows as invalid
    pub fn is_marked_invalid<F: FieldView + ?Sized>(&self, field: &F) -> bool {
        self.classes.invalid.iter().any(|class| field.has_class(class))
    }
}
