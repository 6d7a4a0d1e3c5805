use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use prickleys_store::PageMeta;

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Point the window at a new URL, e.g. a `mailto:` link.
///
/// # Errors
/// Returns an error if there is no window or the browser refuses the navigation.
pub fn navigate_to(url: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    win.location().set_href(url)
}

/// Show a blocking alert. Does nothing outside a browser.
pub fn alert(message: &str) {
    if let Some(win) = window()
        && let Err(err) = win.alert_with_message(message)
    {
        log::warn!("alert failed: {}", js_error_message(&err));
    }
}

fn ensure_meta(doc: &Document, name: &str) -> Result<Element, JsValue> {
    if let Some(existing) = doc.query_selector(&format!("meta[name='{name}']"))? {
        return Ok(existing);
    }
    let meta = doc.create_element("meta")?;
    meta.set_attribute("name", name)?;
    if let Some(head) = doc.head() {
        head.append_child(&meta)?;
    }
    Ok(meta)
}

/// Apply title, description and viewport to the document head.
///
/// # Errors
/// Returns an error if there is no document or a meta tag cannot be created.
pub fn apply_page_meta(meta: &PageMeta) -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    doc.set_title(&meta.title);
    ensure_meta(&doc, "description")?.set_attribute("content", &meta.description)?;
    ensure_meta(&doc, "viewport")?.set_attribute("content", &meta.viewport)?;
    Ok(())
}
