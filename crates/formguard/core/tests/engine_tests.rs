//! Integration tests for the validation engine
//!
//! Drives the engine through in-memory field and form views, so nothing here
//! needs a browser. Covers:
//! - Validator contracts (phone, zipcode, email, dates)
//! - Required/optional gate
//! - Feedback rendering and clearing
//! - Event handling through binding plans
//! - Form-level validation

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use formguard_core::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Default)]
struct MockField {
    descriptor: FieldDescriptor,
    classes: BTreeSet<String>,
    pulses: Vec<(String, u32)>,
    slots_created: usize,
    error_text: Option<String>,
    error_visible: bool,
    focused: bool,
    scrolled: bool,
}

impl MockField {
    fn new(descriptor: FieldDescriptor) -> Self {
        Self {
            descriptor,
            ..Self::default()
        }
    }

    fn set_value(&mut self, value: &str) {
        self.descriptor.value = value.to_string();
    }

    fn is_invalid(&self) -> bool {
        self.classes.contains("is-invalid") && self.classes.contains("invalid")
    }

    fn is_valid(&self) -> bool {
        self.classes.contains("is-valid") && self.classes.contains("valid")
    }
}

impl FieldView for MockField {
    fn descriptor(&self) -> FieldDescriptor {
        self.descriptor.clone()
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn pulse_class(&mut self, class: &str, duration_ms: u32) {
        self.pulses.push((class.to_string(), duration_ms));
    }

    fn ensure_error_slot(&mut self, _class: &str) {
        if self.error_text.is_none() {
            self.slots_created += 1;
            self.error_text = Some(String::new());
        }
    }

    fn set_error_text(&mut self, text: &str, visible: bool) {
        self.error_text = Some(text.to_string());
        self.error_visible = visible;
    }

    fn hide_error(&mut self) {
        self.error_visible = false;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn scroll_into_view(&mut self) {
        self.scrolled = true;
    }
}

#[derive(Debug, Default)]
struct MockForm {
    fields: Vec<MockField>,
    notifications: Vec<Notification>,
}

impl FormView for MockForm {
    type Field = MockField;

    fn fields_mut(&mut self) -> &mut [MockField] {
        &mut self.fields
    }

    fn notify(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .and_then(|d| d.and_hms_opt(10, 15, 30))
        .unwrap()
}

fn engine() -> ValidationEngine<FixedClock> {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
    ValidationEngine::with_clock(EngineConfig::default(), FixedClock(now()))
}

fn run(name: ValidatorName, value: &str) -> ValidationResult {
    let field = FieldDescriptor::new("field", value);
    engine().check(&field, Some(name))
}

#[rstest]
#[case("1234567890", true)]
#[case("0123456789", false)]
#[case("0000000000", false)]
#[case("12345", false)]
fn test_phone_contract(#[case] value: &str, #[case] valid: bool) {
    assert_eq!(run(ValidatorName::Phone, value).valid, valid);
}

#[rstest]
#[case("123456", true)]
#[case("012345", false)]
#[case("000000", false)]
#[case("1234", false)]
fn test_zipcode_contract(#[case] value: &str, #[case] valid: bool) {
    assert_eq!(run(ValidatorName::Zipcode, value).valid, valid);
}

#[rstest]
#[case("a@b.co", true)]
#[case("a@b", false)]
#[case("a b@c.com", false)]
fn test_email_contract(#[case] value: &str, #[case] valid: bool) {
    assert_eq!(run(ValidatorName::Email, value).valid, valid);
}

#[test]
fn test_future_date_against_midnight() {
    assert!(run(ValidatorName::FutureDate, "2026-10-18").valid);
    assert!(!run(ValidatorName::FutureDate, "2026-10-17").valid);
}

#[test]
fn test_past_date_against_current_instant() {
    assert!(!run(ValidatorName::PastDate, "2026-10-18T10:15:30").valid);
    assert!(run(ValidatorName::PastDate, "2026-10-18T10:15:29").valid);
}

#[test]
fn test_required_and_optional_gate() {
    let engine = engine();
    let blank_required = FieldDescriptor::new("full_name", "  ").required();
    let result = engine.check(&blank_required, Some(ValidatorName::Name));
    assert_eq!(result, ValidationResult::fail("Full Name is required."));

    let blank_optional = FieldDescriptor::new("full_name", "");
    assert_eq!(
        engine.check(&blank_optional, Some(ValidatorName::Name)),
        ValidationResult::ok()
    );
}

#[test]
fn test_render_invalid_then_corrected() {
    let engine = engine();
    let mut field = MockField::new(FieldDescriptor::new("phone", "12345").with_type("tel"));

    let result = engine.validate_field(&mut field, None);
    assert!(!result.valid);
    assert!(field.is_invalid());
    assert!(!field.is_valid());
    assert_eq!(field.pulses, vec![("shake".to_string(), 300)]);
    assert_eq!(
        field.error_text.as_deref(),
        Some("Phone number must be exactly 10 digits.")
    );
    assert!(field.error_visible);

    field.set_value("9876543210");
    let result = engine.validate_field(&mut field, None);
    assert!(result.valid);
    assert!(field.is_valid());
    assert!(!field.is_invalid());
    assert_eq!(field.error_text.as_deref(), Some(""));
    assert!(!field.error_visible);
    assert_eq!(field.slots_created, 1, "error slot is created once and reused");
}

#[test]
fn test_clear_on_input_hides_stale_error() {
    let engine = engine();
    let mut field = MockField::new(FieldDescriptor::new("notes", "").required());

    engine.validate_field(&mut field, None);
    assert!(field.is_invalid());

    engine.clear_field(&mut field);
    assert!(!field.is_invalid());
    assert!(!field.error_visible);
    assert!(!engine.renderer().is_marked_invalid(&field));
}

#[test]
fn test_handle_event_follows_binding_plan() {
    let engine = engine();
    let mut field = MockField::new(FieldDescriptor::new("zipcode", "0123"));

    let result = engine.handle_event(&mut field, FieldEvent::Input);
    assert_eq!(
        result.map(|r| r.message),
        Some("Zipcode must be exactly 6 digits.".to_string())
    );

    field.set_value("560001");
    let result = engine.handle_event(&mut field, FieldEvent::Input);
    assert!(result.is_some_and(|r| r.valid));
    assert!(field.is_valid());

    // change events only drive date pickers
    assert_eq!(engine.handle_event(&mut field, FieldEvent::Change), None);
}

#[test]
fn test_handle_event_on_date_picker() {
    let engine = engine();
    let mut field = MockField::new(
        FieldDescriptor::new("appointment_date", "2026-10-01").with_type("date"),
    );

    assert_eq!(engine.handle_event(&mut field, FieldEvent::Input), None);
    let result = engine.handle_event(&mut field, FieldEvent::Change);
    assert_eq!(
        result.map(|r| r.message),
        Some("Date must be today or in the future.".to_string())
    );
}

#[test]
fn test_form_marks_exactly_the_invalid_field() {
    let engine = engine();
    let mut form = MockForm {
        fields: vec![
            MockField::new(FieldDescriptor::new("email", "a@b.co").with_type("email")),
            MockField::new(FieldDescriptor::new("phone", "0123456789").with_type("tel")),
            MockField::new(FieldDescriptor::new("notes", "hello")),
        ],
        ..MockForm::default()
    };

    assert!(!engine.validate_form(&mut form));

    let marks: Vec<(bool, bool)> = form
        .fields
        .iter()
        .map(|f| (f.is_valid(), f.is_invalid()))
        .collect();
    assert_eq!(marks, vec![(true, false), (false, true), (true, false)]);

    assert!(!form.fields[0].focused);
    assert!(form.fields[1].focused);
    assert!(form.fields[1].scrolled);

    assert_eq!(
        form.notifications,
        vec![Notification::new(
            "Please correct the errors in the form before submitting.",
            NotificationLevel::Error,
            5000,
        )]
    );
}

#[test]
fn test_form_reports_every_problem_and_focuses_first() {
    let engine = engine();
    let mut form = MockForm {
        fields: vec![
            MockField::new(FieldDescriptor::new("first_name", "").required()),
            MockField::new(
                FieldDescriptor::new("postal_code", "000000").with_validator(ValidatorName::Zipcode),
            ),
        ],
        ..MockForm::default()
    };

    assert!(!engine.validate_form(&mut form));
    assert!(form.fields.iter().all(MockField::is_invalid));
    assert!(form.fields[0].focused);
    assert!(!form.fields[1].focused);
    assert_eq!(form.notifications.len(), 1);
}

#[test]
fn test_form_ignores_listener_name_heuristics() {
    let engine = engine();
    let mut form = MockForm {
        fields: vec![
            MockField::new(FieldDescriptor::new("username", "john123").required()),
            MockField::new(FieldDescriptor::new("doctor_name", "7").with_type("select-one")),
            MockField::new(FieldDescriptor::new("zip", "12")),
        ],
        ..MockForm::default()
    };

    // live listeners would check these as name and zipcode fields
    assert!(engine.plan_for(&form.fields[0].descriptor).hint.is_some());
    assert!(engine.plan_for(&form.fields[2].descriptor).hint.is_some());

    assert!(engine.validate_form(&mut form));
    assert!(form.fields.iter().all(MockField::is_valid));
    assert!(form.notifications.is_empty());
}

#[test]
fn test_form_keeps_explicit_validator_attribute() {
    let engine = engine();
    let mut form = MockForm {
        fields: vec![
            MockField::new(FieldDescriptor::new("zip", "12")),
            MockField::new(FieldDescriptor::new("code", "12").with_validator(ValidatorName::Zipcode)),
        ],
        ..MockForm::default()
    };

    assert!(!engine.validate_form(&mut form));
    assert!(form.fields[0].is_valid());
    assert!(form.fields[1].is_invalid());
    assert!(form.fields[1].focused);
    assert_eq!(
        form.fields[1].error_text.as_deref(),
        Some("Zipcode must be exactly 6 digits.")
    );
}

#[test]
fn test_valid_form_raises_nothing() {
    let engine = engine();
    let mut form = MockForm {
        fields: vec![
            MockField::new(FieldDescriptor::new("first_name", "Asha").required()),
            MockField::new(FieldDescriptor::new("date_of_birth", "1990-04-12").with_type("date")),
        ],
        ..MockForm::default()
    };

    assert!(engine.validate_form(&mut form));
    assert!(form.fields.iter().all(MockField::is_valid));
    assert!(form.fields.iter().all(|f| !f.focused));
    assert!(form.notifications.is_empty());
}

#[test]
fn test_custom_classes_from_config() {
    let config = EngineConfig::from_toml_str(
        r#"
        [classes]
        valid = ["ok"]
        invalid = ["bad"]
        shake = "wobble"

        [feedback]
        shake_ms = 120
        "#,
    )
    .unwrap();
    let engine = ValidationEngine::with_clock(config, FixedClock(now()));
    let mut field = MockField::new(FieldDescriptor::new("code", "abc!").with_validator(ValidatorName::Alphanumeric));

    engine.handle_event(&mut field, FieldEvent::Blur);
    assert!(field.has_class("bad"));
    assert!(!field.has_class("is-invalid"));
    assert_eq!(field.pulses, vec![("wobble".to_string(), 120)]);
}
