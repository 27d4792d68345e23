//! Browser implementation of the Presentation Surface.
//!
//! Every element is looked up on demand; a missing element means the current
//! page does not render that surface and the patch is skipped.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::attachment;
use crate::components::modal;
use crate::constants::BUSY_LABEL_HTML;
use crate::dom_utils::{self, attr_value};
use crate::messages::ChatAuthor;
use crate::models::{ChallengeStage, GuestChallenge, SurfaceId, Theme, TriggerId, UiStage};
use crate::surface::PresentationSurface;
use crate::toast::{self, ToastKind};

const IDLE_LABEL_ATTR: &str = "data-idle-label";

/// Container id of each result surface.
pub fn container_id(surface: SurfaceId) -> &'static str {
    match surface {
        SurfaceId::ReportResult => "reportResult",
        SurfaceId::ChallengePanel => "otpFeedback",
        SurfaceId::ChatPanel => "chatStatus",
    }
}

pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> Option<Self> {
        dom_utils::document().map(Self::new)
    }

    /// `[data-trigger="…"]` first, then an element whose id is the trigger.
    fn trigger_element(&self, trigger: &TriggerId) -> Result<Option<Element>, JsValue> {
        let selector = format!("[data-trigger=\"{}\"]", attr_value(trigger.as_str()));
        match self.document.query_selector(&selector)? {
            Some(el) => Ok(Some(el)),
            None => Ok(self.document.get_element_by_id(trigger.as_str())),
        }
    }

    fn set_child_text(&self, root: &Element, selector: &str, text: &str) -> Result<(), JsValue> {
        if let Some(el) = root.query_selector(selector)? {
            el.set_text_content(Some(text));
        }
        Ok(())
    }
}

impl PresentationSurface for DomSurface {
    fn set_trigger_busy(&self, trigger: &TriggerId, busy: bool) -> Result<(), JsValue> {
        let Some(el) = self.trigger_element(trigger)? else {
            debug_log!("trigger {} not on this page", trigger);
            return Ok(());
        };

        if busy {
            if !el.has_attribute(IDLE_LABEL_ATTR) {
                el.set_attribute(IDLE_LABEL_ATTR, &el.inner_html())?;
            }
            el.set_inner_html(BUSY_LABEL_HTML);
            el.set_attribute("disabled", "")?;
            el.set_attribute("aria-busy", "true")?;
        } else {
            if let Some(label) = el.get_attribute(IDLE_LABEL_ATTR) {
                el.set_inner_html(&label);
                el.remove_attribute(IDLE_LABEL_ATTR)?;
            }
            el.remove_attribute("disabled")?;
            el.remove_attribute("aria-busy")?;
        }
        Ok(())
    }

    fn set_trigger_active(&self, trigger: &TriggerId, active: bool) -> Result<(), JsValue> {
        if let Some(el) = self.trigger_element(trigger)? {
            dom_utils::set_active(&el, active);
        }
        Ok(())
    }

    fn clear_active_reactions(&self, target: &str) -> Result<(), JsValue> {
        let selector = format!(".reaction-btn[data-report-id=\"{}\"]", attr_value(target));
        for el in dom_utils::query_all(&self.document, &selector)? {
            dom_utils::set_active(&el, false);
        }
        Ok(())
    }

    fn show_stage(
        &self,
        surface: SurfaceId,
        stage: UiStage,
        title: Option<&str>,
        message: Option<&str>,
    ) -> Result<(), JsValue> {
        let Some(container) = self.document.get_element_by_id(container_id(surface)) else {
            return Ok(());
        };

        if stage == UiStage::Idle {
            dom_utils::hide(&container);
            container.remove_attribute("data-stage")?;
            return Ok(());
        }

        let parts = [
            (".result-loading", UiStage::Loading),
            (".result-success", UiStage::Success),
            (".result-error", UiStage::Error),
        ];
        for (selector, shown_in) in parts {
            if let Some(part) = container.query_selector(selector)? {
                dom_utils::set_visible(&part, stage == shown_in);
            }
        }

        // Remote text is set as text, never as markup.
        self.set_child_text(&container, ".result-title", title.unwrap_or_default())?;
        self.set_child_text(&container, ".result-message", message.unwrap_or_default())?;

        container.set_attribute(
            "data-stage",
            match stage {
                UiStage::Loading => "loading",
                UiStage::Success => "success",
                _ => "error",
            },
        )?;
        dom_utils::show(&container);
        if stage != UiStage::Loading {
            container.scroll_into_view();
        }
        Ok(())
    }

    fn set_counter(&self, counter: &str, target: &str, value: u64) -> Result<(), JsValue> {
        let selector = format!(
            "[data-reaction-count=\"{}\"][data-report-id=\"{}\"]",
            attr_value(counter),
            attr_value(target)
        );
        let text = value.to_string();
        for el in dom_utils::query_all(&self.document, &selector)? {
            el.set_text_content(Some(&text));
        }
        Ok(())
    }

    fn reject_attachments(&self, files: &[String]) -> Result<(), JsValue> {
        let (backdrop, content) = modal::ensure_modal(&self.document, "fileErrorModal")?;
        let body = self.document.get_element_by_id("fileErrorBody").unwrap_or(content);
        body.set_inner_html("");

        let intro = self.document.create_element("p")?;
        intro.set_text_content(Some("The following files are not allowed:"));
        body.append_child(&intro)?;

        let list = self.document.create_element("ul")?;
        for name in files {
            let item = self.document.create_element("li")?;
            item.set_text_content(Some(name));
            list.append_child(&item)?;
        }
        body.append_child(&list)?;

        let formats = self.document.create_element("p")?;
        formats.set_text_content(Some(&format!(
            "Allowed formats: {}",
            attachment::allowed_formats_label()
        )));
        body.append_child(&formats)?;

        if let Some(input) = dom_utils::input_by_id(&self.document, "attachment") {
            input.set_value("");
        }
        modal::show(&backdrop);
        Ok(())
    }

    fn set_attachment_label(&self, label: &str) -> Result<(), JsValue> {
        if let Some(el) = self.document.query_selector(".file-upload-label span")? {
            el.set_text_content(Some(label));
        }
        Ok(())
    }

    fn show_challenge(&self, challenge: Option<&GuestChallenge>) -> Result<(), JsValue> {
        let Some(backdrop) = self.document.get_element_by_id("otpModal") else {
            return Ok(());
        };
        let Some(challenge) = challenge else {
            modal::hide(&backdrop);
            return Ok(());
        };

        let collecting_code = challenge.stage == ChallengeStage::CollectCode;
        if let Some(el) = self.document.get_element_by_id("otpEmailStage") {
            dom_utils::set_visible(&el, !collecting_code);
        }
        if let Some(el) = self.document.get_element_by_id("otpCodeStage") {
            dom_utils::set_visible(&el, collecting_code);
        }

        let email = challenge.email.as_deref().unwrap_or_default();
        if let Some(el) = self.document.get_element_by_id("otpEmailDisplay") {
            el.set_text_content(Some(email));
        }
        if let Some(input) = dom_utils::input_by_id(&self.document, "otpEmail") {
            if input.value().is_empty() {
                input.set_value(email);
            }
        }

        let focus_id = if collecting_code { "otpCode" } else { "otpEmail" };
        if let Some(input) = dom_utils::input_by_id(&self.document, focus_id) {
            if collecting_code {
                input.set_value("");
            }
            let _ = input.focus();
        }

        modal::show(&backdrop);
        Ok(())
    }

    fn append_chat_bubble(&self, author: ChatAuthor, text: &str) -> Result<(), JsValue> {
        let Some(messages) = self.document.get_element_by_id("chatMessages") else {
            return Ok(());
        };

        let row = self.document.create_element("div")?;
        row.set_class_name(match author {
            ChatAuthor::User => "chat-message user",
            ChatAuthor::Bot => "chat-message bot",
        });

        let bubble = self.document.create_element("div")?;
        bubble.set_class_name("bubble");
        bubble.set_text_content(Some(text));
        row.append_child(&bubble)?;

        let time = self.document.create_element("span")?;
        time.set_class_name("time");
        time.set_text_content(Some(&chrono::Local::now().format("%H:%M").to_string()));
        row.append_child(&time)?;

        messages.append_child(&row)?;
        messages.set_scroll_top(messages.scroll_height());
        Ok(())
    }

    fn clear_chat_input(&self) -> Result<(), JsValue> {
        if let Some(input) = dom_utils::input_by_id(&self.document, "chatInput") {
            input.set_value("");
        }
        Ok(())
    }

    fn show_welcome_hint(&self, visible: bool) -> Result<(), JsValue> {
        if let Some(el) = self.document.get_element_by_id("chatHint") {
            dom_utils::set_visible(&el, visible);
        }
        Ok(())
    }

    fn apply_theme(&self, theme: Theme) -> Result<(), JsValue> {
        if let Some(body) = self.document.body() {
            body.set_attribute("data-theme", theme.as_str())?;
        }
        if let Some(icon) = self.document.get_element_by_id("themeIcon") {
            icon.set_class_name(theme.icon_class());
        }
        Ok(())
    }

    fn toast(&self, success: bool, message: &str) -> Result<(), JsValue> {
        let kind = if success { ToastKind::Success } else { ToastKind::Error };
        toast::show(&self.document, message, kind)
    }
}

/// Focus helper for page components that hold a bare `Element`.
pub fn focus(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}
