use crate::constants::LOADING_OVERLAY_ID;
use showcase_core::BootState;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn show_error(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        _ = el.class_list().add_1("error");
        el.set_text_content(Some(text));
        show(document);
    }
}

/// Mirror the boot state in the loading overlay: progress text while
/// loading, the error message on failure, hidden once ready.
pub fn update(document: &web::Document, state: &BootState) {
    let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) else {
        log::debug!("[overlay] #{} missing", LOADING_OVERLAY_ID);
        return;
    };
    match state {
        BootState::Ready => hide(document),
        BootState::Failed(_) => show_error(document, &state.message()),
        BootState::Loading(_) => {
            el.set_text_content(Some(&state.message()));
        }
    }
}
