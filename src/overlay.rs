use web_sys as web;

pub const LOADING_OVERLAY_ID: &str = "loading-overlay";

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

/// Write a status line into the overlay, e.g. when WebGPU is unavailable.
pub fn set_status(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        el.set_text_content(Some(text));
    }
}
