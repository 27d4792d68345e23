//! Report submission form: field collection, attachment picker and the
//! result panel's dismiss buttons.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom_utils;
use crate::messages::Message;
use crate::models::{ActionRequest, Attachment, ReportDraft, SurfaceId, TriggerId};
use crate::state::dispatch_global_message;

pub const SUBMIT_TRIGGER: &str = "report-submit";

pub fn mount(document: &Document) -> Result<(), JsValue> {
    let Some(form) = document.get_element_by_id("reportForm") else {
        return Ok(());
    };

    // The submit button is the busy indicator for the whole form.
    if let Some(button) = form.query_selector("[type=submit]")? {
        button.set_attribute("data-trigger", SUBMIT_TRIGGER)?;
    }

    let doc = document.clone();
    dom_utils::listen(&form, "submit", move |event| {
        event.prevent_default();
        dispatch_global_message(Message::PerformAction {
            trigger: TriggerId::new(SUBMIT_TRIGGER),
            request: ActionRequest::submit_report(read_draft(&doc)),
        });
    })?;

    if let Some(input) = dom_utils::input_by_id(document, "attachment") {
        let picker = input.clone();
        dom_utils::listen(&input, "change", move |_| {
            dispatch_global_message(Message::AttachmentSelected(selected_files(&picker)));
        })?;
    }

    Ok(())
}

/// `[data-dismiss-result="report|otp|chat"]` buttons close their result panel.
pub fn mount_dismiss_buttons(document: &Document) -> Result<(), JsValue> {
    for button in dom_utils::query_all(document, "[data-dismiss-result]")? {
        let surface = dismiss_target(&button.get_attribute("data-dismiss-result").unwrap_or_default());
        dom_utils::listen(&button, "click", move |_| {
            dispatch_global_message(Message::ResultDismissed(surface));
        })?;
    }
    Ok(())
}

pub fn dismiss_target(value: &str) -> SurfaceId {
    match value.trim() {
        "otp" => SurfaceId::ChallengePanel,
        "chat" => SurfaceId::ChatPanel,
        _ => SurfaceId::ReportResult,
    }
}

fn read_draft(document: &Document) -> ReportDraft {
    let report_type = document
        .query_selector("input[name=\"reportType\"]:checked")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default();

    let category = document
        .get_element_by_id("category")
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default();

    let title = dom_utils::input_by_id(document, "title")
        .map(|el| el.value())
        .unwrap_or_default();

    let description = document
        .get_element_by_id("description")
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default();

    let attachment = dom_utils::input_by_id(document, "attachment")
        .and_then(|input| selected_files(&input).into_iter().next());

    ReportDraft { report_type, category, title, description, attachment }
}

fn selected_files(input: &HtmlInputElement) -> Vec<Attachment> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|file| Attachment { name: file.name(), file: Some(file) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_buttons_map_to_surfaces() {
        assert_eq!(dismiss_target("otp"), SurfaceId::ChallengePanel);
        assert_eq!(dismiss_target(" chat "), SurfaceId::ChatPanel);
        assert_eq!(dismiss_target(""), SurfaceId::ReportResult);
    }
}
