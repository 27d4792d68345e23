//! Small crate-wide convenience macros.

/// Log to the browser console in debug wasm builds.  Compiled out on native
/// targets (unit tests) where calling into `web_sys::console` would panic,
/// and in release builds to keep the bundle quiet.
///
/// ```rust,ignore
/// debug_log!("trigger {} already pending", trigger);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(all(debug_assertions, target_arch = "wasm32"))]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(all(debug_assertions, target_arch = "wasm32")))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Like [`debug_log!`] but always emitted on wasm32 (release included) as a
/// console warning.  Used for failures the user cannot see in the page.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Acquire a **mutable** borrow from a `RefCell`.  Kept as a macro so the
/// call-sites that touch `APP_STATE` read the same everywhere.
#[macro_export]
macro_rules! mut_borrow {
    ($cell:expr) => {
        $cell.borrow_mut()
    };
}
