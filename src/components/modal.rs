//! Shared modal helper used by the file-rejection dialog and the guest
//! challenge.
//!
//! Pages usually ship the modal markup; when they don't, a bare
//! `<div id="{id}" class="modal"><div class="modal-content">` is created so
//! callers can still fill it in.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils;

/// Ensure a `<div id="{id}" class="modal">…` exists in the DOM and return it.
///
/// Returns `(backdrop, content)`.
pub fn ensure_modal(document: &Document, id: &str) -> Result<(Element, Element), JsValue> {
    // Backdrop first ------------------------------------------------------
    let backdrop = if let Some(el) = document.get_element_by_id(id) {
        el
    } else {
        let el = document.create_element("div")?;
        el.set_id(id);
        el.set_class_name("modal");
        dom_utils::hide(&el);
        document
            .body()
            .ok_or_else(|| JsValue::from_str("<body> element missing"))?
            .append_child(&el)?;
        el
    };

    // Content wrapper inside backdrop ------------------------------------
    let content = if let Some(el) = backdrop.query_selector(".modal-content")? {
        el
    } else {
        let el = document.create_element("div")?;
        el.set_class_name("modal-content");
        backdrop.append_child(&el)?;
        el
    };

    Ok((backdrop, content))
}

pub fn show(modal_backdrop: &Element) {
    dom_utils::show(modal_backdrop);
}

pub fn hide(modal_backdrop: &Element) {
    dom_utils::hide(modal_backdrop);
}

/// Hide every `[data-modal-close]` target's enclosing modal on click.
pub fn bind_close_buttons(document: &Document, id: &str) -> Result<(), JsValue> {
    let Some(backdrop) = document.get_element_by_id(id) else {
        return Ok(());
    };
    for button in dom_utils::query_within(&backdrop, "[data-modal-close]")? {
        let backdrop = backdrop.clone();
        dom_utils::listen(&button, "click", move |_| hide(&backdrop))?;
    }
    Ok(())
}
