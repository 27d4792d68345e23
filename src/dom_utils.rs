//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for the show / hide / lookup / listener patterns used by
//! the page components, so `set_attribute("style", …)` and closure
//! boilerplate do not spread across the code-base.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement};

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

pub fn set_visible(el: &Element, visible: bool) {
    if visible {
        show(el);
    } else {
        hide(el);
    }
}

/// Add or remove the `active` modifier.
pub fn set_active(el: &Element, active: bool) {
    let _ = el.class_list().toggle_with_force("active", active);
}

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// `querySelectorAll` collected into elements.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Same as [`query_all`] but scoped to the descendants of `root`.
pub fn query_within(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// `<input id=…>` cast to `HtmlInputElement`, if present.
pub fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

/// Attach `handler` for `event` and leak the closure for the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Escape a value for use inside a double-quoted attribute selector.
pub fn attr_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_values_are_escaped() {
        assert_eq!(attr_value("reaction:1:agree"), "reaction:1:agree");
        assert_eq!(attr_value(r#"a"b\c"#), r#"a\"b\\c"#);
    }
}
