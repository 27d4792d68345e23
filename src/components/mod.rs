pub mod chat_widget;
pub mod dom_surface;
pub mod modal;
pub mod navigation;
pub mod otp_modal;
pub mod reactions;
pub mod report_form;
pub mod theme_toggle;

use wasm_bindgen::JsValue;
use web_sys::Document;

/// Bind every component whose markup is present on the page.
pub fn mount_all(document: &Document) -> Result<(), JsValue> {
    theme_toggle::mount(document)?;
    navigation::highlight(document)?;
    report_form::mount(document)?;
    report_form::mount_dismiss_buttons(document)?;
    reactions::mount(document)?;
    otp_modal::mount(document)?;
    modal::bind_close_buttons(document, "fileErrorModal")?;
    chat_widget::mount(document)?;
    Ok(())
}
