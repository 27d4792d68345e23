//! Executes the side effects requested by the reducer.  Browser only.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::components::dom_surface::DomSurface;
use crate::messages::{Command, Message};
use crate::models::ActionOutcome;
use crate::network::api_client::ApiClient;
use crate::state::dispatch_global_message;
use crate::surface::apply_patch;

pub fn execute(cmd: Command) {
    match cmd {
        Command::SendRequest { trigger, request } => {
            spawn_local(async move {
                let result = ApiClient::perform(&request).await;
                if let Err(e) = &result {
                    warn_log!("{} failed: {}", request.kind, e);
                }
                let outcome = ActionOutcome::from_result(request.kind, request.target.clone(), result);
                dispatch_global_message(Message::ActionResolved { trigger, outcome });
            });
        }
        Command::Paint(patch) => match DomSurface::current() {
            Some(surface) => {
                if let Err(e) = apply_patch(&surface, &patch) {
                    warn_log!("Failed to paint {:?}: {:?}", patch, e);
                }
            }
            None => warn_log!("No document to paint {:?}", patch),
        },
        Command::NavigateAfter { url, delay_ms } => {
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().set_href(&url) {
                        warn_log!("Failed to navigate to {}: {:?}", url, e);
                    }
                }
            });
        }
        Command::Reload { delay_ms } => {
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().reload() {
                        warn_log!("Failed to reload: {:?}", e);
                    }
                }
            });
        }
        Command::Persist { key, value } => {
            if let Err(e) = crate::storage::set_item(key, &value) {
                warn_log!("Failed to persist {}: {:?}", key, e);
            }
        }
    }
}
