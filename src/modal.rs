use crate::constants::{MODAL_CLOSED_DISPLAY, MODAL_OPEN_DISPLAY};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Toggle only the `display` declaration; other inline styles are kept.
fn set_display(document: &web::Document, selector: &str, display: &str) -> bool {
    let Ok(Some(el)) = document.query_selector(selector) else {
        return false;
    };
    let Some(html) = el.dyn_ref::<web::HtmlElement>() else {
        return false;
    };
    _ = html.style().set_property("display", display);
    true
}

/// Show the modal matching `selector`. A missing element is logged and
/// otherwise ignored.
pub fn open(document: &web::Document, selector: &str) {
    if set_display(document, selector, MODAL_OPEN_DISPLAY) {
        log::info!("[modal] opened {}", selector);
    } else {
        log::error!("[modal] Modal element not found: {}", selector);
    }
}

pub fn close(document: &web::Document, selector: &str) {
    if !set_display(document, selector, MODAL_CLOSED_DISPLAY) {
        log::debug!("[modal] nothing to close for {}", selector);
    }
}

pub fn close_all(document: &web::Document, selectors: &[String]) {
    for s in selectors {
        close(document, s);
    }
}
