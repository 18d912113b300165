//! Thin wrappers over the browser window used by the action bar.

use dioxus::logger::tracing::{error, warn};

/// `window.location.origin`, e.g. `https://shop.example`.
pub fn current_origin() -> Option<String> {
    let window = web_sys::window()?;
    match window.location().origin() {
        Ok(origin) => Some(origin),
        Err(e) => {
            error!("Could not read window origin: {:?}", e);
            None
        }
    }
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        warn!("No window to open {} from", url);
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => warn!("Opening {} was blocked", url),
        Err(e) => error!("Failed to open {}: {:?}", url, e),
    }
}

pub fn print_document() {
    let Some(window) = web_sys::window() else {
        warn!("No window to print from");
        return;
    };
    if let Err(e) = window.print() {
        error!("Print failed: {:?}", e);
    }
}
