//! Anti-forgery credential, attached to every request through a pluggable
//! [`RequestDecorator`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Headers, HtmlDocument, HtmlInputElement};

use super::config::ApiConfig;

/// A step that may add headers to an outgoing request.
pub trait RequestDecorator {
    fn decorate(&self, headers: &Headers) -> Result<(), JsValue>;
}

/// Reads the token from the cookie, then the `<meta name="csrf-token">` tag,
/// then the hidden form input a server-rendered page embeds.
pub struct CsrfTokenDecorator {
    pub cookie_name: String,
    pub header_name: String,
}

impl CsrfTokenDecorator {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            cookie_name: config.csrf_cookie.clone(),
            header_name: config.csrf_header.clone(),
        }
    }

    fn lookup(&self) -> Option<String> {
        let document = web_sys::window()?.document()?;
        token_from_document_cookie(&document, &self.cookie_name)
            .or_else(|| token_from_meta(&document))
            .or_else(|| token_from_form_input(&document))
    }
}

impl RequestDecorator for CsrfTokenDecorator {
    fn decorate(&self, headers: &Headers) -> Result<(), JsValue> {
        match self.lookup() {
            Some(token) => headers.set(&self.header_name, &token),
            None => {
                debug_log!("no anti-forgery token found, sending request without it");
                Ok(())
            }
        }
    }
}

thread_local! {
    static DECORATOR: RefCell<Option<Rc<dyn RequestDecorator>>> = RefCell::new(None);
}

/// Replace the request decorator (tests, pages with a different scheme).
pub fn set_request_decorator(decorator: Rc<dyn RequestDecorator>) {
    DECORATOR.with(|cell| *cell.borrow_mut() = Some(decorator));
}

/// The installed decorator, defaulting to the CSRF one built from `config`.
pub fn current_decorator(config: &ApiConfig) -> Rc<dyn RequestDecorator> {
    DECORATOR.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(|| Rc::new(CsrfTokenDecorator::from_config(config)))
            .clone()
    })
}

/// Find `name` in a `document.cookie` style string.
pub fn token_from_cookie_str(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn token_from_document_cookie(document: &Document, name: &str) -> Option<String> {
    let html: &HtmlDocument = document.dyn_ref()?;
    let cookies = html.cookie().ok()?;
    token_from_cookie_str(&cookies, name)
}

fn token_from_meta(document: &Document) -> Option<String> {
    document
        .query_selector("meta[name='csrf-token']")
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .filter(|token| !token.is_empty())
}

fn token_from_form_input(document: &Document) -> Option<String> {
    document
        .query_selector("input[name='csrfmiddlewaretoken']")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .filter(|token| !token.is_empty())
}
