//! Reaction buttons on report cards.
//!
//! Markup: `<button class="reaction-btn" data-report-id="42"
//! data-reaction-type="agree">…<span data-reaction-count="agree"
//! data-report-id="42">3</span></button>`

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils;
use crate::messages::Message;
use crate::models::{ActionRequest, TriggerId};
use crate::state::dispatch_global_message;

pub fn mount(document: &Document) -> Result<(), JsValue> {
    let buttons = dom_utils::query_all(document, ".reaction-btn[data-report-id][data-reaction-type]")?;
    debug_log!("binding {} reaction buttons", buttons.len());

    for button in buttons {
        let report_id = button.get_attribute("data-report-id").unwrap_or_default();
        let reaction_type = button.get_attribute("data-reaction-type").unwrap_or_default();
        if report_id.is_empty() || reaction_type.is_empty() {
            continue;
        }

        let trigger = TriggerId::reaction(&report_id, &reaction_type);
        button.set_attribute("data-trigger", trigger.as_str())?;

        dom_utils::listen(&button, "click", move |event| {
            event.prevent_default();
            dispatch_global_message(Message::PerformAction {
                trigger: trigger.clone(),
                request: ActionRequest::toggle_reaction(report_id.clone(), reaction_type.clone()),
            });
        })?;
    }
    Ok(())
}
