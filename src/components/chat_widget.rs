//! Floating FAQ chat widget.
//!
//! `#chatToggle` opens/closes `#chatWindow`; opening it also retires the
//! welcome hint for good.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::components::dom_surface::focus;
use crate::dom_utils;
use crate::messages::Message;
use crate::models::TriggerId;
use crate::state::dispatch_global_message;

pub const SEND_TRIGGER: &str = "chat-send";

pub fn mount(document: &Document) -> Result<(), JsValue> {
    let Some(panel) = document.get_element_by_id("chatWindow") else {
        return Ok(());
    };

    if let Some(toggle) = document.get_element_by_id("chatToggle") {
        let doc = document.clone();
        dom_utils::listen(&toggle, "click", move |_| {
            let open = !panel.class_list().contains("open");
            let _ = panel.class_list().toggle_with_force("open", open);
            if open {
                dispatch_global_message(Message::WelcomeHintDismissed);
                if let Some(input) = doc.get_element_by_id("chatInput") {
                    focus(&input);
                }
            }
        })?;
    }

    if let Some(close) = document.get_element_by_id("chatHintClose") {
        dom_utils::listen(&close, "click", |event| {
            event.stop_propagation();
            dispatch_global_message(Message::WelcomeHintDismissed);
        })?;
    }

    if let Some(send) = document.get_element_by_id("chatSend") {
        send.set_attribute("data-trigger", SEND_TRIGGER)?;
    }

    if let Some(form) = document.get_element_by_id("chatForm") {
        let doc = document.clone();
        dom_utils::listen(&form, "submit", move |event| {
            event.prevent_default();
            let Some(input) = dom_utils::input_by_id(&doc, "chatInput") else {
                return;
            };
            // The reducer clears the input once the message is accepted.
            dispatch_global_message(Message::ChatSubmitted {
                trigger: TriggerId::new(SEND_TRIGGER),
                text: input.value(),
            });
        })?;
    }

    Ok(())
}
