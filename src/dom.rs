use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` to the click event of every element matching `selector`.
pub fn add_click_listener(
    document: &web::Document,
    selector: &str,
    handler: impl FnMut() + 'static,
) {
    let nodes = match document.query_selector_all(selector) {
        Ok(n) => n,
        Err(e) => {
            log::warn!("[dom] bad selector {}: {:?}", selector, e);
            return;
        }
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i) {
            _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn set_body_cursor(document: &web::Document, cursor: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("cursor", cursor);
    }
}

/// `location.search` with percent-escapes decoded.
pub fn location_query() -> String {
    let raw = web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    js_sys::decode_uri_component(&raw)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or(raw)
}
