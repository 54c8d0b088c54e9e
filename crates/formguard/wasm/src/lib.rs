//! formguard WASM
//!
//! WebAssembly bindings for the formguard validation engine.
//! Nothing is wired automatically: the host page calls `register` (or
//! `registerMatching`) with the forms it wants governed.

use std::rc::Rc;

use formguard_core::{
    check_field, EngineConfig, FieldConstraints, FieldDescriptor, FieldView, FormGuardError,
    SystemClock, ValidationContext, ValidationEngine, ValidatorName,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlFormElement};

mod dom;
mod listeners;

use dom::{to_js, DomField, DomForm};

/// Forms picked up by `registerMatching()` when no selector is given
pub const DEFAULT_FORM_SELECTOR: &str = "form[data-validate=\"true\"], .needs-validation";

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Field error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn parse_validator(validator: Option<String>) -> Result<Option<ValidatorName>, JsValue> {
    validator
        .map(|name| name.parse::<ValidatorName>())
        .transpose()
        .map_err(to_js)
}

fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

/// Run one named validator on a raw value
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateValue('zipcode', '560001');
/// // { valid: true, message: '' }
/// ```
#[wasm_bindgen(js_name = validateValue)]
pub fn validate_value(validator: &str, value: &str, constraints: JsValue) -> Result<JsValue, JsValue> {
    let name = validator.parse::<ValidatorName>().map_err(to_js)?;
    let constraints: FieldConstraints = if is_absent(&constraints) {
        FieldConstraints::default()
    } else {
        serde_wasm_bindgen::from_value(constraints)?
    };

    let field = FieldDescriptor::new("", value).with_constraints(constraints);
    let ctx = ValidationContext::from_clock(&SystemClock);
    let result = name.run(field.trimmed(), &field, &ctx);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Validate a plain field description without touching the page
///
/// # Example (JavaScript)
/// ```javascript
/// const result = checkField({ name: 'phone', type: 'tel', value: '0123456789' });
/// // { valid: false, message: 'Please enter a valid mobile number (should not start with 0).' }
/// ```
#[wasm_bindgen(js_name = checkField)]
pub fn check_field_js(descriptor: JsValue, validator: Option<String>) -> Result<JsValue, JsValue> {
    let field: FieldDescriptor = serde_wasm_bindgen::from_value(descriptor)?;
    let explicit = parse_validator(validator)?;
    let ctx = ValidationContext::from_clock(&SystemClock);
    Ok(serde_wasm_bindgen::to_value(&check_field(&field, explicit, &ctx))?)
}

/// Names of every built-in validator
#[wasm_bindgen(js_name = validatorNames)]
pub fn validator_names() -> Result<JsValue, JsValue> {
    let names: Vec<&str> = ValidatorName::ALL.iter().map(|n| n.as_str()).collect();
    Ok(serde_wasm_bindgen::to_value(&names)?)
}

/// Validation engine bound to the page
#[wasm_bindgen]
pub struct FormGuard {
    engine: Rc<ValidationEngine>,
}

#[wasm_bindgen]
impl FormGuard {
    /// Create an engine; `config` mirrors the `formguard.toml` sections
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FormGuard, JsValue> {
        let config = if is_absent(&config) {
            EngineConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| to_js(FormGuardError::Config(e.to_string())))?
        };

        Ok(FormGuard {
            engine: Rc::new(ValidationEngine::new(config)),
        })
    }

    /// Create an engine from the text of a `formguard.toml` file
    #[wasm_bindgen(js_name = fromToml)]
    pub fn from_toml(text: &str) -> Result<FormGuard, JsValue> {
        let config = EngineConfig::from_toml_str(text)
            .map_err(|e| to_js(FormGuardError::Config(format!("{:#}", e))))?;

        Ok(FormGuard {
            engine: Rc::new(ValidationEngine::new(config)),
        })
    }

    /// Wire validation listeners onto one form; returns the field count
    pub fn register(&self, form: &HtmlFormElement) -> Result<usize, JsValue> {
        listeners::register_form(&self.engine, form)
    }

    /// Register every form matching `selector`; returns the form count
    #[wasm_bindgen(js_name = registerMatching)]
    pub fn register_matching(&self, selector: Option<String>) -> Result<usize, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| {
                to_js(FormGuardError::MissingStructure(
                    "no document available".to_string(),
                ))
            })?;

        let selector = selector.as_deref().unwrap_or(DEFAULT_FORM_SELECTOR);
        let nodes = document.query_selector_all(selector)?;
        let mut count = 0;

        for index in 0..nodes.length() {
            if let Some(form) = nodes.get(index).and_then(|n| n.dyn_into::<HtmlFormElement>().ok()) {
                listeners::register_form(&self.engine, &form)?;
                count += 1;
            }
        }

        Ok(count)
    }

    /// Validate one field and render the outcome, outside the listener flow
    #[wasm_bindgen(js_name = validateField)]
    pub fn validate_field(&self, element: HtmlElement, validator: Option<String>) -> Result<bool, JsValue> {
        let explicit = parse_validator(validator)?;
        let mut field = self.dom_field(element)?;
        Ok(self.engine.validate_field(&mut field, explicit).valid)
    }

    /// Validate a whole form, e.g. before an AJAX submit
    #[wasm_bindgen(js_name = validateForm)]
    pub fn validate_form(&self, form: &HtmlFormElement) -> Result<bool, JsValue> {
        let mut dom_form = DomForm::collect(form, &self.slot_selector())?;
        Ok(self.engine.validate_form(&mut dom_form))
    }

    /// Errors a form would show, without changing the page
    #[wasm_bindgen(js_name = formErrors)]
    pub fn form_errors(&self, form: &HtmlFormElement) -> Result<JsValue, JsValue> {
        let dom_form = DomForm::collect(form, &self.slot_selector())?;
        let errors: Vec<FieldError> = dom_form
            .fields()
            .iter()
            .filter_map(|field| {
                let descriptor = field.descriptor();
                let result = self.engine.check(&descriptor, descriptor.validator);
                (!result.valid).then(|| FieldError {
                    field: descriptor.name,
                    message: result.message,
                })
            })
            .collect();
        Ok(serde_wasm_bindgen::to_value(&errors)?)
    }

    /// Drop invalid styling from a field
    #[wasm_bindgen(js_name = clearField)]
    pub fn clear_field(&self, element: HtmlElement) -> Result<(), JsValue> {
        let mut field = self.dom_field(element)?;
        self.engine.clear_field(&mut field);
        Ok(())
    }
}

impl FormGuard {
    fn slot_selector(&self) -> String {
        self.engine.config().classes.error_slot_selector()
    }

    fn dom_field(&self, element: HtmlElement) -> Result<DomField, JsValue> {
        DomField::new(element, &self.slot_selector()).map_err(to_js)
    }
}
