use super::keymap::{command_for_key, KeyCommand};
use crate::dom;
use crate::modal;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    canvas: &web::HtmlCanvasElement,
    modal_selectors: &[String],
) {
    let Some(cmd) = command_for_key(&ev.key()) else {
        return;
    };
    let Some(doc) = dom::window_document() else {
        return;
    };
    match cmd {
        KeyCommand::CloseModal => modal::close_all(&doc, modal_selectors),
        KeyCommand::ToggleFullscreen => {
            if doc.fullscreen_element().is_some() {
                doc.exit_fullscreen();
            } else {
                _ = canvas.request_fullscreen();
            }
            ev.prevent_default();
        }
    }
}

pub fn wire_global_keydown(canvas: web::HtmlCanvasElement, modal_selectors: Vec<String>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &canvas, &modal_selectors);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
