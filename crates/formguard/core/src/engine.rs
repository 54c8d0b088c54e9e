// File: src/engine.rs
// Purpose: ValidationEngine ties resolution, rendering and form-level checks together

use crate::binding::{Action, BindingPlan, BindingPolicy, FieldEvent};
use crate::clock::{Clock, SystemClock, ValidationContext};
use crate::config::EngineConfig;
use crate::field::FieldDescriptor;
use crate::form::{FormView, Notification, NotificationLevel};
use crate::registry::ValidatorName;
use crate::render::{FeedbackRenderer, FieldView};
use crate::resolve::check_field;
use crate::result::ValidationResult;

/// Client-side validation engine
///
/// Stateless between calls: every operation reads the field afresh, applies
/// the outcome and forgets it.
#[derive(Debug, Clone)]
pub struct ValidationEngine<C: Clock = SystemClock> {
    config: EngineConfig,
    renderer: FeedbackRenderer,
    policy: BindingPolicy,
    clock: C,
}

impl ValidationEngine<SystemClock> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for ValidationEngine<SystemClock> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<C: Clock> ValidationEngine<C> {
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        let renderer = FeedbackRenderer::new(config.classes.clone(), config.feedback.clone());
        let policy = BindingPolicy::new(config.detection.clone(), config.feedback.clear_on_input);
        Self {
            config,
            renderer,
            policy,
            clock,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn renderer(&self) -> &FeedbackRenderer {
        &self.renderer
    }

    pub fn context(&self) -> ValidationContext {
        ValidationContext::from_clock(&self.clock)
    }

    /// Pure check of a descriptor, no presentation side effects
    pub fn check(
        &self,
        field: &FieldDescriptor,
        explicit: Option<ValidatorName>,
    ) -> ValidationResult {
        check_field(field, explicit, &self.context())
    }

    /// Listener plan for a field
    pub fn plan_for(&self, field: &FieldDescriptor) -> BindingPlan {
        self.policy.plan(field)
    }

    /// Validate a field and render the outcome on it
    pub fn validate_field<F: FieldView + ?Sized>(
        &self,
        field: &mut F,
        explicit: Option<ValidatorName>,
    ) -> ValidationResult {
        let descriptor = field.descriptor();
        let result = self.check(&descriptor, explicit);

        tracing::debug!(
            field = %descriptor.name,
            validator = ?explicit,
            valid = result.valid,
            "validated field"
        );

        self.renderer.render(field, &result);
        result
    }

    /// Remove invalid styling ahead of the next validation
    pub fn clear_field<F: FieldView + ?Sized>(&self, field: &mut F) {
        self.renderer.clear(field);
    }

    /// React to a user event on a field according to its binding plan
    ///
    /// Returns the last validation result produced, if any action validated.
    pub fn handle_event<F: FieldView + ?Sized>(
        &self,
        field: &mut F,
        event: FieldEvent,
    ) -> Option<ValidationResult> {
        let plan = self.plan_for(&field.descriptor());
        let mut last = None;

        for action in plan.actions_for(event) {
            match *action {
                Action::ClearErrors => self.clear_field(field),
                Action::Validate(explicit) => last = Some(self.validate_field(field, explicit)),
            }
        }

        last
    }

    /// Validate every field of a form
    ///
    /// Each field is checked with its own `data-validator` hint, falling back
    /// to auto-detection; the name heuristics used by live listeners do not
    /// apply here. All fields are checked and rendered even after the first
    /// failure. When any fails, the first field marked invalid gets focus and
    /// is scrolled into view and a single notification is raised.
    pub fn validate_form<V: FormView + ?Sized>(&self, form: &mut V) -> bool {
        let mut valid = true;

        for field in form.fields_mut().iter_mut() {
            let explicit = field.descriptor().validator;
            valid &= self.validate_field(field, explicit).valid;
        }

        if valid {
            return true;
        }

        let first_invalid = form
            .fields_mut()
            .iter_mut()
            .find(|field| self.renderer.is_marked_invalid(&**field));

        if let Some(field) = first_invalid {
            tracing::debug!(field = %field.descriptor().name, "form failed validation");
            field.focus();
            field.scroll_into_view();
        }

        let notification = Notification::new(
            self.config.notification.form_error_message.clone(),
            NotificationLevel::Error,
            self.config.notification.timeout_ms,
        );
        form.notify(&notification);

        false
    }
}
