use crate::core::Cursor;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move || handler()) as Box<dyn FnMut()>
        );
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
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

pub fn set_cursor(cursor: Cursor) {
    if let Some(body) = window_document().and_then(|d| d.body()) {
        _ = body.style().set_property("cursor", cursor.css());
    }
}

/// `mailto:` stays in the current tab; everything else opens a new one.
pub fn open_url(url: &str, new_tab: bool) {
    let Some(w) = web::window() else { return };
    let result = if new_tab {
        w.open_with_url_and_target(url, "_blank").map(|_| ())
    } else {
        w.location().set_href(url)
    };
    if let Err(e) = result {
        log::warn!("[dom] open {} failed: {:?}", url, e);
    }
}
