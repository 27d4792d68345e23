//! Attachment allow-list checks and upload-label text.

use crate::constants::{ALLOWED_ATTACHMENT_EXTENSIONS, ATTACHMENT_PROMPT};

/// True when `name` ends in one of the allowed extensions (case-insensitive).
pub fn is_allowed(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_ATTACHMENT_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed)),
        None => false,
    }
}

/// Ok when every name passes, otherwise the offending names in input order.
pub fn validate_names<'a, I>(names: I) -> Result<(), Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let invalid: Vec<String> = names
        .into_iter()
        .filter(|name| !is_allowed(name))
        .map(str::to_string)
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(invalid)
    }
}

/// Label shown next to the file input for the current selection.
pub fn selection_label(names: &[String]) -> String {
    match names {
        [] => ATTACHMENT_PROMPT.to_string(),
        [only] => only.clone(),
        many => format!("{} files selected", many.len()),
    }
}

/// Human readable list of accepted formats, e.g. for rejection dialogs.
pub fn allowed_formats_label() -> String {
    ALLOWED_ATTACHMENT_EXTENSIONS
        .iter()
        .filter(|ext| **ext != "jpeg")
        .map(|ext| ext.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}
