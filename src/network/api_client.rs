use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AbortController, AbortSignal, FormData, Headers, Request, RequestCredentials, RequestInit,
    RequestMode, Response, UrlSearchParams,
};

use super::config::{api_config, ApiConfig};
use super::csrf::{current_decorator, RequestDecorator};
use super::decode::{interpret, HttpReply};
use crate::error::ActionError;
use crate::models::{ActionRequest, ActionSuccess};

// REST client for the Remote Action API
pub struct ApiClient;

impl ApiClient {
    /// Issue `request` and decode the reply.  Exactly one `fetch` per call.
    pub async fn perform(request: &ActionRequest) -> Result<ActionSuccess, ActionError> {
        let config = api_config();
        let url = config.url_for(request.kind, request.target.as_deref())?;
        let decorator = current_decorator(&config);

        debug_log!("{} → POST {}", request.kind, url);
        let reply = Self::post_with_timeout(&config, &url, request, &*decorator).await?;
        debug_log!("{} ← HTTP {}", request.kind, reply.status);

        interpret(request.kind, &reply)
    }

    // The abort timer is cancelled when `_timer` drops at the end of the call.
    async fn post_with_timeout(
        config: &ApiConfig,
        url: &str,
        request: &ActionRequest,
        decorator: &dyn RequestDecorator,
    ) -> Result<HttpReply, ActionError> {
        let controller = AbortController::new().map_err(transport_error)?;
        let timed_out = Rc::new(Cell::new(false));

        let _timer = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(config.request_timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        Self::post_form(url, request, decorator, &controller.signal())
            .await
            .map_err(|e| fetch_failure(timed_out.get(), config.request_timeout_ms, || describe(&e)))
    }

    // Helper function to make the form POST
    async fn post_form(
        url: &str,
        request: &ActionRequest,
        decorator: &dyn RequestDecorator,
        signal: &AbortSignal,
    ) -> Result<HttpReply, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_credentials(RequestCredentials::SameOrigin);
        opts.set_signal(Some(signal));

        // The browser sets Content-Type (and the multipart boundary) from the
        // body type.
        let headers = Headers::new()?;
        headers.set("Accept", "application/json")?;
        headers.set("X-Requested-With", "XMLHttpRequest")?;
        decorator.decorate(&headers)?;
        opts.set_headers(&headers);

        let body = encode_body(request)?;
        opts.set_body(&body);

        let fetch_request = Request::new_with_str_and_init(url, &opts)?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let status = resp.status();
        let text = JsFuture::from(resp.text()?).await?;
        Ok(HttpReply::new(status, text.as_string().unwrap_or_default()))
    }
}

/// Multipart `FormData` for report submission (it may carry a file),
/// form-encoded `URLSearchParams` for everything else.
fn encode_body(request: &ActionRequest) -> Result<JsValue, JsValue> {
    if request.needs_multipart() {
        let form = FormData::new()?;
        for (name, value) in request.form_fields() {
            form.append_with_str(name, &value)?;
        }
        if let Some(attachment) = request.attachment() {
            if let Some(file) = &attachment.file {
                form.append_with_blob_and_filename("attachment", file, &attachment.name)?;
            }
        }
        Ok(form.into())
    } else {
        let params = UrlSearchParams::new()?;
        for (name, value) in request.form_fields() {
            params.append(name, &value);
        }
        Ok(params.into())
    }
}

/// A fetch that failed after our own abort timer fired is a timeout; any
/// other failure carries the transport's description.  Both are network
/// failures.
pub(crate) fn fetch_failure(
    timed_out: bool,
    timeout_ms: u32,
    detail: impl FnOnce() -> String,
) -> ActionError {
    if timed_out {
        ActionError::network(format!("request timed out after {} ms", timeout_ms))
    } else {
        ActionError::network(detail())
    }
}

fn transport_error(err: JsValue) -> ActionError {
    ActionError::network(describe(&err))
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", err))
}
