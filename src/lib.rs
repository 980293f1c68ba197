#![cfg(target_arch = "wasm32")]
use crate::core::{PortfolioScene, SceneObject};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_mute_button(document: &web::Document, music: &audio::BackgroundMusic) {
    let music = music.clone();
    dom::add_click_listener(document, audio::MUTE_BUTTON_ID, move || music.toggle());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("floating-rv starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    overlay::show(&document);
    wire_canvas_resize(&canvas);

    let scene = Rc::new(RefCell::new(PortfolioScene::default()));

    // Music is optional; the scene works without the element.
    let music = match audio::BackgroundMusic::from_document(&document) {
        Ok(m) => {
            wire_mute_button(&document, &m);
            Some(m)
        }
        Err(e) => {
            log::warn!("[audio] {}", e);
            None
        }
    };

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        overlay::set_status(&document, "WebGPU is not available in this browser.");
    }

    events::wire_global_keydown(scene.clone(), music, canvas.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        mouse_state: Rc::new(RefCell::new(input::MouseState::default())),
        hovered: Rc::new(RefCell::new(None::<SceneObject>)),
    });

    // Everything is procedural, so loading is done once the GPU is up.
    if gpu.is_some() {
        overlay::hide(&document);
        scene.borrow_mut().begin_intro();
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
