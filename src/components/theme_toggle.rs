use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils;
use crate::messages::Message;
use crate::state::dispatch_global_message;

pub fn mount(document: &Document) -> Result<(), JsValue> {
    if let Some(toggle) = document.get_element_by_id("themeToggle") {
        dom_utils::listen(&toggle, "click", |event| {
            event.prevent_default();
            dispatch_global_message(Message::ToggleTheme);
        })?;
    }
    Ok(())
}
