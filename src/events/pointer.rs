use crate::constants::PICK_ANCHORS;
use crate::core::{Effects, PortfolioScene, SceneObject};
use crate::input;
use crate::render;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<PortfolioScene>>,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
    pub hovered: Rc<RefCell<Option<SceneObject>>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

/// Interactive object under the canvas pixel, if any.
fn pick(w: &InputWiring, pos: Vec2) -> Option<SceneObject> {
    let scene = w.scene.borrow();
    let aspect = w.canvas.width() as f32 / w.canvas.height().max(1) as f32;
    let camera = scene.camera().camera(aspect);
    let (ro, rd) = render::screen_to_world_ray(&w.canvas, pos.x, pos.y, &camera);
    let live = PICK_ANCHORS.iter().filter(|a| {
        scene
            .object(a.name)
            .map_or(false, |o| scene.is_interactive(o))
    });
    let name = input::pick_nearest(ro, rd, live.map(|a| (a.name, a.center, a.radius)))?;
    scene.object(name)
}

fn update_hover(w: &InputWiring, next: Option<SceneObject>) {
    let prev = *w.hovered.borrow();
    if prev == next {
        return;
    }
    let mut effects = Effects::new();
    {
        let mut scene = w.scene.borrow_mut();
        if let Some(o) = prev {
            scene.pointer_leave(o, &mut effects);
        }
        if let Some(o) = next {
            scene.pointer_enter(o, &mut effects);
        }
    }
    *w.hovered.borrow_mut() = next;
    super::apply_effects(&effects);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let drag = w.mouse_state.borrow_mut().move_to(pos);
        match drag {
            Some(delta) => w.scene.borrow_mut().drag(delta.x, delta.y),
            None => {
                let next = pick(&w, pos);
                update_hover(&w, next);
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.mouse_state.borrow_mut().press(pos);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let was_click = w.mouse_state.borrow_mut().release();
        if was_click {
            if let Some(object) = pick(&w, pos) {
                let mut effects = Effects::new();
                w.scene.borrow_mut().click(object, &mut effects);
                super::apply_effects(&effects);
            }
        }
        // hover may have changed under a camera that moved during the drag
        let next = pick(&w, pos);
        update_hover(&w, next);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let notches = input::wheel_notches(ev.delta_y(), ev.delta_mode());
        w.scene.borrow_mut().zoom(notches);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
