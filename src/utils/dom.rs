//! DOM and Web API utility functions.

use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::error::CommandError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Open a URL in a new tab.
pub fn open_external(url: &str) -> Result<(), CommandError> {
    let window = window().ok_or(CommandError::NoWindow)?;
    window
        .open_with_url_and_target(url, "_blank")
        .map_err(|_| CommandError::failed(format!("failed to open {url}")))?;
    Ok(())
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the terminal input element.
#[inline]
pub fn focus_terminal_input() {
    focus_element("input");
}
