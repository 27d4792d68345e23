// Build script: the API base URL is baked in through `option_env!` in
// `network/config.rs`, so rebuild whenever it (or the CSRF overrides) change.

fn main() {
    for var in ["API_BASE_URL", "CSRF_COOKIE_NAME", "CSRF_HEADER_NAME"] {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    match std::env::var("API_BASE_URL") {
        Ok(url) if !url.trim().is_empty() => {
            println!("cargo:warning=Using API_BASE_URL={}", url.trim());
        }
        _ => {
            // Relative URLs – the page and the API share an origin.
        }
    }
}
