use crate::audio::BackgroundMusic;
use crate::core::{Effects, PortfolioScene};
use crate::input::{key_action, KeyAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn toggle_fullscreen(canvas: &web::HtmlCanvasElement) {
    if let Some(doc) = crate::dom::window_document() {
        if doc.fullscreen_element().is_some() {
            doc.exit_fullscreen();
        } else {
            _ = canvas.request_fullscreen();
        }
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<PortfolioScene>>,
    music: Option<&BackgroundMusic>,
    canvas: &web::HtmlCanvasElement,
) {
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    log::debug!("[keys] {:?}", action);
    match action {
        KeyAction::GoBack => {
            let mut effects = Effects::new();
            scene.borrow_mut().go_back(&mut effects);
            super::apply_effects(&effects);
        }
        KeyAction::ToggleMusic => match music {
            Some(m) => m.toggle(),
            None => log::debug!("[keys] no music element"),
        },
        KeyAction::ToggleFullscreen => {
            toggle_fullscreen(canvas);
            ev.prevent_default();
        }
    }
}

pub fn wire_global_keydown(
    scene: Rc<RefCell<PortfolioScene>>,
    music: Option<BackgroundMusic>,
    canvas: web::HtmlCanvasElement,
) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene, music.as_ref(), &canvas);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
