//! Event wiring between a page's forms and the engine
//!
//! Only user-originated events (input, blur, change, submit) are listened
//! to, so rendering feedback can never re-trigger validation.

use std::rc::Rc;

use formguard_core::{FieldView, ValidationEngine};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlFormElement};

use crate::dom::{field_elements, to_js, DomField, DomForm};

/// Attach field and submit listeners to `form`
///
/// Returns the number of fields wired. Listeners live as long as the page.
pub fn register_form(engine: &Rc<ValidationEngine>, form: &HtmlFormElement) -> Result<usize, JsValue> {
    let selector = engine.config().classes.error_slot_selector();
    let elements = field_elements(form)?;

    for element in &elements {
        let field = DomField::new(element.clone(), &selector).map_err(to_js)?;
        let plan = engine.plan_for(&field.descriptor());

        for event in plan.events() {
            let handler = field_handler(Rc::clone(engine), element.clone(), selector.clone(), event);
            element.add_event_listener_with_callback(event.as_str(), handler.as_ref().unchecked_ref())?;
            handler.forget();
        }
    }

    let on_submit = submit_handler(Rc::clone(engine), form.clone(), selector);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    tracing::info!(fields = elements.len(), "registered form");
    Ok(elements.len())
}

fn field_handler(
    engine: Rc<ValidationEngine>,
    element: HtmlElement,
    selector: String,
    event: formguard_core::FieldEvent,
) -> Closure<dyn FnMut(Event)> {
    Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        match DomField::new(element.clone(), &selector) {
            Ok(mut field) => {
                engine.handle_event(&mut field, event);
            }
            Err(err) => web_sys::console::error_1(&to_js(err)),
        }
    })
}

fn submit_handler(
    engine: Rc<ValidationEngine>,
    form: HtmlFormElement,
    selector: String,
) -> Closure<dyn FnMut(Event)> {
    Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        match DomForm::collect(&form, &selector) {
            Ok(mut dom_form) => {
                if !engine.validate_form(&mut dom_form) {
                    event.prevent_default();
                }
            }
            Err(err) => {
                // Broken markup must not let an unchecked form through
                event.prevent_default();
                web_sys::console::error_1(&err);
            }
        }
    })
}
