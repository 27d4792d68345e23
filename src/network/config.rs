use std::cell::RefCell;

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::constants::DEFAULT_REQUEST_TIMEOUT_MS;
use crate::error::ActionError;
use crate::models::ActionKind;

/// Endpoint paths per action kind.  `{id}` is replaced by the request target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiRoutes {
    pub submit_report: String,
    pub toggle_reaction: String,
    pub request_otp: String,
    pub verify_otp: String,
    pub send_chat: String,
}

impl Default for ApiRoutes {
    fn default() -> Self {
        Self {
            submit_report: "/reports/api/submit/".to_string(),
            toggle_reaction: "/reports/api/reaction/{id}/".to_string(),
            request_otp: "/api/kontol/request-otp/".to_string(),
            verify_otp: "/api/kontol/verify-otp/".to_string(),
            send_chat: "/chat/api/chat/".to_string(),
        }
    }
}

impl ApiRoutes {
    fn template(&self, kind: ActionKind) -> &str {
        match kind {
            ActionKind::SubmitReport => &self.submit_report,
            ActionKind::ToggleReaction => &self.toggle_reaction,
            ActionKind::RequestOtp => &self.request_otp,
            ActionKind::VerifyOtp => &self.verify_otp,
            ActionKind::SendChat => &self.send_chat,
        }
    }
}

/// API route configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Empty means same-origin relative URLs.
    pub base_url: String,
    pub routes: ApiRoutes,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub request_timeout_ms: u32,
}

impl Default for ApiConfig {
    /// Same-origin defaults matching the server's URL layout.  The
    /// compile-time `API_BASE_URL` / `CSRF_*` variables override them, and
    /// `init_api_config_js()` can override everything at runtime.
    fn default() -> Self {
        Self {
            base_url: option_env!("API_BASE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_default(),
            routes: ApiRoutes::default(),
            csrf_cookie: option_env!("CSRF_COOKIE_NAME").unwrap_or("csrftoken").to_string(),
            csrf_header: option_env!("CSRF_HEADER_NAME").unwrap_or("X-CSRFToken").to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim_end_matches('/').to_string(), ..Self::default() }
    }

    /// Full URL for `kind`.  Templates containing `{id}` need a target.
    pub fn url_for(&self, kind: ActionKind, target: Option<&str>) -> Result<String, ActionError> {
        let template = self.routes.template(kind);
        let path = if template.contains("{id}") {
            let id = target.filter(|t| !t.trim().is_empty()).ok_or(ActionError::Unexpected {
                status: 0,
                message: None,
            })?;
            template.replace("{id}", id.trim())
        } else {
            template.to_string()
        };
        Ok(format!("{}{}", self.base_url, path))
    }
}

thread_local! {
    static API_CONFIG: RefCell<ApiConfig> = RefCell::new(ApiConfig::default());
}

pub fn api_config() -> ApiConfig {
    API_CONFIG.with(|cfg| cfg.borrow().clone())
}

pub fn set_api_config(config: ApiConfig) {
    API_CONFIG.with(|cfg| *cfg.borrow_mut() = config);
}

/// Runtime override from the hosting page, e.g.
/// `init_api_config_js({ base_url: "https://lapor.example", request_timeout_ms: 20000 })`.
/// Missing fields keep their defaults.
#[wasm_bindgen]
pub fn init_api_config_js(value: JsValue) -> Result<(), JsValue> {
    let mut config: ApiConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("invalid api config: {}", e)))?;
    config.base_url = config.base_url.trim_end_matches('/').to_string();
    if config.request_timeout_ms == 0 {
        config.request_timeout_ms = DEFAULT_REQUEST_TIMEOUT_MS;
    }
    debug_log!("api config: {:?}", config);
    set_api_config(config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_route_needs_a_target() {
        let cfg = ApiConfig::from_url("https://lapor.example/");
        assert_eq!(
            cfg.url_for(ActionKind::ToggleReaction, Some("9b2e")).as_deref(),
            Ok("https://lapor.example/reports/api/reaction/9b2e/")
        );
        assert!(cfg.url_for(ActionKind::ToggleReaction, None).is_err());
        assert!(cfg.url_for(ActionKind::ToggleReaction, Some(" ")).is_err());
    }

    #[test]
    fn same_origin_by_default() {
        let cfg = ApiConfig { base_url: String::new(), ..ApiConfig::default() };
        assert_eq!(cfg.url_for(ActionKind::VerifyOtp, None).as_deref(), Ok("/api/kontol/verify-otp/"));
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let cfg: ApiConfig =
            serde_json::from_str(r#"{"routes":{"send_chat":"/faq/ask/"}}"#).expect("valid json");
        assert_eq!(cfg.routes.send_chat, "/faq/ask/");
        assert_eq!(cfg.routes.submit_report, ApiRoutes::default().submit_report);
        assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }
}
