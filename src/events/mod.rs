use crate::core::{Effects, SceneEffect};
use crate::dom;

pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};

/// Carry out what the scene asked for after an input event.
pub fn apply_effects(effects: &Effects) {
    for effect in effects {
        match *effect {
            SceneEffect::OpenUrl { url, new_tab } => dom::open_url(url, new_tab),
            SceneEffect::SetCursor(cursor) => dom::set_cursor(cursor),
        }
    }
}
