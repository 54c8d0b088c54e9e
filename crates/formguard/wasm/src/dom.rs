//! DOM adapters for the engine's presentation ports

use formguard_core::{
    FieldConstraints, FieldDescriptor, FieldView, FormGuardError, FormView, Notification,
    ValidatorName,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// Elements a form validates
pub const FIELD_SELECTOR: &str = "input, select, textarea";

/// Input types that carry no user data
const SKIPPED_INPUT_TYPES: &[&str] = &["hidden", "submit", "button", "reset", "image"];

const NOTIFICATION_STYLE: &str = "position: fixed; top: 20px; right: 20px; z-index: 10000; \
    padding: 15px 20px; border-radius: 8px; color: white; font-weight: 500; \
    box-shadow: 0 4px 12px rgba(0,0,0,0.15); animation: slideInRight 0.3s ease; max-width: 400px;";

/// Log a failed DOM call without interrupting the handler
pub(crate) fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        web_sys::console::error_2(&JsValue::from_str(context), &err);
    }
}

pub(crate) fn to_js(err: FormGuardError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One form control, read fresh from the page
pub struct DomField {
    element: HtmlElement,
    parent: Element,
    document: Document,
    slot_selector: String,
    validator: Option<ValidatorName>,
}

impl DomField {
    pub fn new(element: HtmlElement, slot_selector: &str) -> Result<Self, FormGuardError> {
        let parent = element.parent_element().ok_or_else(|| {
            FormGuardError::MissingStructure(format!(
                "field '{}' has no parent element for its error message",
                field_key(&element)
            ))
        })?;
        let document = element.owner_document().ok_or_else(|| {
            FormGuardError::MissingStructure(format!(
                "field '{}' is not attached to a document",
                field_key(&element)
            ))
        })?;
        let validator = element
            .get_attribute("data-validator")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().parse::<ValidatorName>())
            .transpose()?;

        Ok(Self {
            element,
            parent,
            document,
            slot_selector: slot_selector.to_string(),
            validator,
        })
    }

    fn label_text(&self) -> Option<String> {
        let id = self.element.id();
        let by_for = if id.is_empty() {
            None
        } else {
            self.document
                .query_selector(&format!("label[for=\"{}\"]", id))
                .ok()
                .flatten()
        };

        by_for
            .or_else(|| self.parent.query_selector("label").ok().flatten())
            .or_else(|| {
                self.element
                    .closest(".form-group")
                    .ok()
                    .flatten()
                    .and_then(|group| group.query_selector("label").ok().flatten())
            })
            .and_then(|label| label.text_content())
    }

    fn error_slot(&self) -> Option<Element> {
        self.parent.query_selector(&self.slot_selector).ok().flatten()
    }

    fn set_slot_display(slot: &Element, visible: bool) {
        if let Some(slot) = slot.dyn_ref::<HtmlElement>() {
            let display = if visible { "block" } else { "none" };
            report(
                "failed to style error message",
                slot.style().set_property("display", display),
            );
        }
    }
}

impl FieldView for DomField {
    fn descriptor(&self) -> FieldDescriptor {
        let el = &self.element;
        let (value, required, name, input_type) =
            if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                (input.value(), input.required(), input.name(), input.type_())
            } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
                (select.value(), select.required(), select.name(), select.type_())
            } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
                (area.value(), area.required(), area.name(), area.type_())
            } else {
                let name = el.get_attribute("name").unwrap_or_default();
                (String::new(), el.has_attribute("required"), name, String::new())
            };

        FieldDescriptor {
            value,
            required,
            name,
            id: el.id(),
            input_type,
            label: self.label_text(),
            placeholder: el.get_attribute("placeholder"),
            validator: self.validator,
            constraints: FieldConstraints::from_attributes(
                el.get_attribute("data-min-length").as_deref(),
                el.get_attribute("data-max-length").as_deref(),
            ),
        }
    }

    fn add_class(&mut self, class: &str) {
        report("failed to add class", self.element.class_list().add_1(class));
    }

    fn remove_class(&mut self, class: &str) {
        report("failed to remove class", self.element.class_list().remove_1(class));
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn pulse_class(&mut self, class: &str, duration_ms: u32) {
        self.add_class(class);

        let Some(window) = web_sys::window() else {
            return;
        };
        let element = self.element.clone();
        let class = class.to_string();
        let expire = Closure::once_into_js(move || {
            report("failed to remove class", element.class_list().remove_1(&class));
        });
        report(
            "failed to schedule class removal",
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    expire.unchecked_ref::<js_sys::Function>(),
                    timeout_arg(duration_ms),
                )
                .map(|_| ()),
        );
    }

    fn ensure_error_slot(&mut self, class: &str) {
        if self.error_slot().is_some() {
            return;
        }
        let created = self.document.create_element("div").and_then(|slot| {
            slot.set_class_name(class);
            self.parent.append_child(&slot).map(|_| ())
        });
        report("failed to create error message", created);
    }

    fn set_error_text(&mut self, text: &str, visible: bool) {
        if let Some(slot) = self.error_slot() {
            slot.set_text_content(Some(text));
            Self::set_slot_display(&slot, visible);
        }
    }

    fn hide_error(&mut self) {
        if let Some(slot) = self.error_slot() {
            Self::set_slot_display(&slot, false);
        }
    }

    fn focus(&mut self) {
        report("failed to focus field", self.element.focus());
    }

    fn scroll_into_view(&mut self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        self.element
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// A form and its data-carrying controls in document order
pub struct DomForm {
    document: Document,
    fields: Vec<DomField>,
}

impl DomForm {
    pub fn collect(form: &HtmlFormElement, slot_selector: &str) -> Result<Self, JsValue> {
        let document = form.owner_document().ok_or_else(|| {
            to_js(FormGuardError::MissingStructure(
                "form is not attached to a document".to_string(),
            ))
        })?;

        let fields = field_elements(form)?
            .into_iter()
            .map(|element| DomField::new(element, slot_selector).map_err(to_js))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { document, fields })
    }

    pub fn fields(&self) -> &[DomField] {
        &self.fields
    }
}

impl FormView for DomForm {
    type Field = DomField;

    fn fields_mut(&mut self) -> &mut [DomField] {
        &mut self.fields
    }

    fn notify(&mut self, notification: &Notification) {
        report(
            "failed to show notification",
            show_notification(&self.document, notification),
        );
    }
}

/// Controls inside `form` that hold user data
pub fn field_elements(form: &HtmlFormElement) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = form.query_selector_all(FIELD_SELECTOR)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);

    for index in 0..nodes.length() {
        let Some(element) = nodes.get(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let skipped = element
            .dyn_ref::<HtmlInputElement>()
            .is_some_and(|input| SKIPPED_INPUT_TYPES.contains(&input.type_().as_str()));
        if !skipped {
            elements.push(element);
        }
    }

    Ok(elements)
}

/// Render a dismissible banner that removes itself after its timeout
pub fn show_notification(document: &Document, notification: &Notification) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let banner = document.create_element("div")?;
    banner.set_class_name(&format!(
        "notification notification-{}",
        notification.level.as_str()
    ));

    let content = document.create_element("div")?;
    content.set_class_name("notification-content");

    let message = document.create_element("span")?;
    message.set_class_name("notification-message");
    message.set_text_content(Some(&notification.message));

    let close = document.create_element("button")?;
    close.set_class_name("notification-close");
    close.set_text_content(Some("\u{00d7}"));

    content.append_child(&message)?;
    content.append_child(&close)?;
    banner.append_child(&content)?;

    if let Some(banner) = banner.dyn_ref::<HtmlElement>() {
        banner.style().set_css_text(&format!(
            "{} background-color: {};",
            NOTIFICATION_STYLE,
            notification.level.color()
        ));
    }

    body.append_child(&banner)?;

    let target = banner.clone();
    let on_close = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        target.remove();
    });
    close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
    on_close.forget();

    if let Some(window) = web_sys::window() {
        let target = banner;
        let expire = Closure::once_into_js(move || target.remove());
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            expire.unchecked_ref(),
            timeout_arg(notification.timeout_ms),
        )?;
    }

    Ok(())
}

/// `setTimeout` delay, saturating instead of wrapping negative
fn timeout_arg(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

fn field_key(element: &HtmlElement) -> String {
    element
        .get_attribute("name")
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| element.id())
}
