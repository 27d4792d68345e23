//! Highlights the navigation link that matches the current location.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils;

/// Index of the href that is the longest prefix of `path`.  The root link
/// only matches the root path itself.
pub fn best_match<'a, I>(path: &str, hrefs: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    hrefs
        .into_iter()
        .enumerate()
        .filter(|(_, href)| {
            if *href == "/" {
                path == "/"
            } else {
                !href.is_empty() && path.starts_with(href)
            }
        })
        .max_by_key(|(_, href)| href.len())
        .map(|(i, _)| i)
}

pub fn highlight(document: &Document) -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let path = window.location().pathname()?;

    let links = dom_utils::query_all(document, "nav a[href]")?;
    let hrefs: Vec<String> = links
        .iter()
        .map(|a| a.get_attribute("href").unwrap_or_default())
        .collect();

    let best = best_match(&path, hrefs.iter().map(String::as_str));
    for (i, link) in links.iter().enumerate() {
        dom_utils::set_active(link, Some(i) == best);
    }
    Ok(())
}
