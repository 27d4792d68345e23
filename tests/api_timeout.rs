//! Browser check that a request which never answers is aborted and reported
//! as a network failure.  Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::Headers;

use report_portal_frontend::error::ActionError;
use report_portal_frontend::models::{ActionRequest, OutcomeStatus};
use report_portal_frontend::network::config::set_api_config;
use report_portal_frontend::network::{set_request_decorator, ApiClient, ApiConfig, RequestDecorator};

wasm_bindgen_test_configure!(run_in_browser);

struct NoToken;

impl RequestDecorator for NoToken {
    fn decorate(&self, _headers: &Headers) -> Result<(), JsValue> {
        Ok(())
    }
}

#[wasm_bindgen_test]
async fn unanswered_request_times_out_as_network_failure() {
    // Non-routable address: the connection never completes.
    set_api_config(ApiConfig {
        base_url: "http://10.255.255.1".to_string(),
        request_timeout_ms: 50,
        ..ApiConfig::default()
    });
    set_request_decorator(Rc::new(NoToken));

    let err = ApiClient::perform(&ActionRequest::request_otp("guest@example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), OutcomeStatus::NetworkError);
    assert_eq!(err, ActionError::network("request timed out after 50 ms"));
}
