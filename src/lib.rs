use wasm_bindgen::prelude::*;

#[macro_use]
mod macros;

pub mod attachment;
pub mod command_executors;
pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod reducers;
pub mod state;
pub mod storage;
pub mod surface;
pub mod toast;
pub mod update;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let document = dom_utils::document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    // Bind whatever this page renders; absent markup is skipped.
    components::mount_all(&document)?;

    // Restore theme and welcome-hint flags last so the first paint finds
    // every element in place.
    state::dispatch_global_message(storage::load_preferences());

    debug_log!("report portal frontend started");
    Ok(())
}
