//! localStorage access for the two persisted flags (theme, welcome hint).

use wasm_bindgen::prelude::*;
use web_sys::Storage;

use crate::constants::{THEME_STORAGE_KEY, WELCOME_HINT_STORAGE_KEY};
use crate::messages::Message;
use crate::models::Theme;

fn local_storage() -> Result<Storage, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
    window
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage is not available"))
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

pub fn set_item(key: &str, value: &str) -> Result<(), JsValue> {
    local_storage()?.set_item(key, value)
}

/// Read both flags into the message the reducer expects at start-up.  A
/// missing or blocked storage behaves like a first visit.
pub fn load_preferences() -> Message {
    Message::PreferencesLoaded {
        theme: get_item(THEME_STORAGE_KEY).as_deref().and_then(Theme::parse),
        welcome_hint_seen: get_item(WELCOME_HINT_STORAGE_KEY).as_deref() == Some("true"),
    }
}
