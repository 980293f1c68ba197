pub mod ambient;
pub mod constants;
pub mod focus;
pub mod orbit;
pub mod pose;
pub mod scene;
pub mod signs;
pub mod state;
pub mod timers;

pub use focus::FocusTarget;
pub use scene::{Effects, PortfolioScene, SceneEffect, SceneFrame};
pub use signs::{Cursor, SceneObject};
pub use state::Camera;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
