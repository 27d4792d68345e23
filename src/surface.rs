//! The Presentation Surface as the controller sees it.
//!
//! Reducers never touch the DOM; they emit [`SurfacePatch`] values and the
//! executor forwards each one to a `PresentationSurface`.  The browser
//! implementation lives in `components::dom_surface`; tests can record
//! patches with any other implementation.

use wasm_bindgen::JsValue;

use crate::messages::{ChatAuthor, SurfacePatch};
use crate::models::{GuestChallenge, SurfaceId, Theme, TriggerId, UiStage};

pub trait PresentationSurface {
    /// Disable the trigger and swap its label for a busy indicator, or undo it.
    fn set_trigger_busy(&self, trigger: &TriggerId, busy: bool) -> Result<(), JsValue>;
    fn set_trigger_active(&self, trigger: &TriggerId, active: bool) -> Result<(), JsValue>;
    fn clear_active_reactions(&self, target: &str) -> Result<(), JsValue>;

    fn show_stage(
        &self,
        surface: SurfaceId,
        stage: UiStage,
        title: Option<&str>,
        message: Option<&str>,
    ) -> Result<(), JsValue>;

    /// Counter addressed by `(counter, target)`.
    fn set_counter(&self, counter: &str, target: &str, value: u64) -> Result<(), JsValue>;

    /// List the rejected names and clear the file input.
    fn reject_attachments(&self, files: &[String]) -> Result<(), JsValue>;
    fn set_attachment_label(&self, label: &str) -> Result<(), JsValue>;

    /// `None` hides the challenge modal.
    fn show_challenge(&self, challenge: Option<&GuestChallenge>) -> Result<(), JsValue>;

    fn append_chat_bubble(&self, author: ChatAuthor, text: &str) -> Result<(), JsValue>;
    fn clear_chat_input(&self) -> Result<(), JsValue>;
    fn show_welcome_hint(&self, visible: bool) -> Result<(), JsValue>;
    fn apply_theme(&self, theme: Theme) -> Result<(), JsValue>;
    fn toast(&self, success: bool, message: &str) -> Result<(), JsValue>;
}

pub fn apply_patch(surface: &dyn PresentationSurface, patch: &SurfacePatch) -> Result<(), JsValue> {
    match patch {
        SurfacePatch::TriggerBusy { trigger, busy } => surface.set_trigger_busy(trigger, *busy),
        SurfacePatch::TriggerActive { trigger, active } => surface.set_trigger_active(trigger, *active),
        SurfacePatch::ClearActiveReactions { target } => surface.clear_active_reactions(target),
        SurfacePatch::Stage { surface: id, stage, title, message } => {
            surface.show_stage(*id, *stage, title.as_deref(), message.as_deref())
        }
        SurfacePatch::Counter { counter, target, value } => surface.set_counter(counter, target, *value),
        SurfacePatch::AttachmentRejected { files } => surface.reject_attachments(files),
        SurfacePatch::AttachmentLabel(label) => surface.set_attachment_label(label),
        SurfacePatch::Challenge(challenge) => surface.show_challenge(challenge.as_ref()),
        SurfacePatch::ChatBubble { author, text } => surface.append_chat_bubble(*author, text),
        SurfacePatch::ChatInputCleared => surface.clear_chat_input(),
        SurfacePatch::WelcomeHint(visible) => surface.show_welcome_hint(*visible),
        SurfacePatch::Theme(theme) => surface.apply_theme(*theme),
        SurfacePatch::Toast { success, message } => surface.toast(*success, message),
    }
}
