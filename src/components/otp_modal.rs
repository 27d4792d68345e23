//! Guest verification modal (`#otpModal`): email stage, code stage, back
//! and close controls, plus any `[data-open-otp]` link on the page.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, KeyboardEvent};

use crate::dom_utils;
use crate::messages::Message;
use crate::models::TriggerId;
use crate::state::dispatch_global_message;

pub const REQUEST_TRIGGER: &str = "otp-request";
pub const VERIFY_TRIGGER: &str = "otp-verify";

pub fn mount(document: &Document) -> Result<(), JsValue> {
    for link in dom_utils::query_all(document, "[data-open-otp]")? {
        dom_utils::listen(&link, "click", |event| {
            event.prevent_default();
            dispatch_global_message(Message::ChallengeRequested);
        })?;
    }

    if document.get_element_by_id("otpModal").is_none() {
        return Ok(());
    }

    if let Some(button) = document.get_element_by_id("otpEmailSubmit") {
        tag_trigger(&button, REQUEST_TRIGGER)?;
        let doc = document.clone();
        dom_utils::listen(&button, "click", move |event| {
            event.prevent_default();
            submit_email(&doc);
        })?;
    }

    if let Some(button) = document.get_element_by_id("otpCodeSubmit") {
        tag_trigger(&button, VERIFY_TRIGGER)?;
        let doc = document.clone();
        dom_utils::listen(&button, "click", move |event| {
            event.prevent_default();
            submit_code(&doc);
        })?;
    }

    // Enter in either input behaves like its submit button.
    if let Some(input) = document.get_element_by_id("otpEmail") {
        let doc = document.clone();
        dom_utils::listen(&input, "keydown", move |event| {
            if is_enter(&event) {
                event.prevent_default();
                submit_email(&doc);
            }
        })?;
    }
    if let Some(input) = document.get_element_by_id("otpCode") {
        let doc = document.clone();
        dom_utils::listen(&input, "keydown", move |event| {
            if is_enter(&event) {
                event.prevent_default();
                submit_code(&doc);
            }
        })?;
    }

    if let Some(button) = document.get_element_by_id("otpBack") {
        dom_utils::listen(&button, "click", |event| {
            event.prevent_default();
            dispatch_global_message(Message::ChallengeBack);
        })?;
    }

    for button in dom_utils::query_all(document, "[data-otp-close]")? {
        dom_utils::listen(&button, "click", |event| {
            event.prevent_default();
            dispatch_global_message(Message::ChallengeDismissed);
        })?;
    }

    Ok(())
}

fn tag_trigger(el: &Element, trigger: &str) -> Result<(), JsValue> {
    el.set_attribute("data-trigger", trigger)
}

fn is_enter(event: &web_sys::Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .map(|e| e.key() == "Enter")
        .unwrap_or(false)
}

fn submit_email(document: &Document) {
    let email = dom_utils::input_by_id(document, "otpEmail")
        .map(|el| el.value())
        .unwrap_or_default();
    dispatch_global_message(Message::ChallengeEmailSubmitted {
        trigger: TriggerId::new(REQUEST_TRIGGER),
        email,
    });
}

fn submit_code(document: &Document) {
    let code = dom_utils::input_by_id(document, "otpCode")
        .map(|el| el.value())
        .unwrap_or_default();
    dispatch_global_message(Message::ChallengeCodeSubmitted {
        trigger: TriggerId::new(VERIFY_TRIGGER),
        code,
    });
}
