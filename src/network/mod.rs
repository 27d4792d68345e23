// Network layer: configuration, request decoration, the fetch client and
// response decoding.
pub mod api_client;
pub mod config;
pub mod csrf;
pub mod decode;

// Re-export commonly used items
pub use api_client::ApiClient;
pub use config::{api_config, init_api_config_js, ApiConfig};
pub use csrf::{set_request_decorator, RequestDecorator};
pub use decode::{interpret, HttpReply};
