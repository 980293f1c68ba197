use glam::{Mat4, Vec2, Vec3, Vec4};
use web_sys as web;

/// Pointer travel, in canvas pixels, before a press counts as an orbit drag.
pub const DRAG_THRESHOLD_PX: f32 = 4.0;
/// Pixels per wheel notch when the browser reports pixel deltas.
pub const WHEEL_PX_PER_NOTCH: f32 = 100.0;

#[derive(Default, Clone, Copy, Debug)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub dragging: bool,
    pub press_x: f32,
    pub press_y: f32,
}

impl MouseState {
    pub fn press(&mut self, pos: Vec2) {
        self.down = true;
        self.dragging = false;
        self.press_x = pos.x;
        self.press_y = pos.y;
        self.x = pos.x;
        self.y = pos.y;
    }

    /// Track a move; returns the delta to feed the orbit rig while dragging.
    pub fn move_to(&mut self, pos: Vec2) -> Option<Vec2> {
        let delta = Vec2::new(pos.x - self.x, pos.y - self.y);
        self.x = pos.x;
        self.y = pos.y;
        if !self.down {
            return None;
        }
        if !self.dragging {
            let travel = Vec2::new(pos.x - self.press_x, pos.y - self.press_y).length();
            self.dragging = travel > DRAG_THRESHOLD_PX;
        }
        self.dragging.then_some(delta)
    }

    /// Release; true when the press was a click rather than a drag.
    pub fn release(&mut self) -> bool {
        let click = self.down && !self.dragging;
        self.down = false;
        self.dragging = false;
        click
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Closest named sphere hit along the ray.
pub fn pick_nearest<'a>(
    ray_origin: Vec3,
    ray_dir: Vec3,
    anchors: impl IntoIterator<Item = (&'a str, Vec3, f32)>,
) -> Option<&'a str> {
    let mut best = None::<(&'a str, f32)>;
    for (name, center, radius) in anchors {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((name, t)),
            }
        }
    }
    best.map(|(name, _)| name)
}

#[inline]
pub fn ndc_from_px(px: Vec2, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(2.0 * px.x / w - 1.0, 1.0 - 2.0 * px.y / h)
}

/// World-space ray through an NDC point, given the camera's view-projection.
pub fn ray_from_ndc(view_proj: Mat4, eye: Vec3, ndc: Vec2) -> (Vec3, Vec3) {
    let inv = view_proj.inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    (eye, (p1 - eye).normalize())
}

/// Wheel delta to zoom notches; scrolling down (positive) zooms out.
#[inline]
pub fn wheel_notches(delta_y: f64, delta_mode: u32) -> f32 {
    let notches = match delta_mode {
        // DOM_DELTA_PIXEL
        0 => delta_y as f32 / WHEEL_PX_PER_NOTCH,
        // lines and pages both count as whole notches
        _ => delta_y.signum() as f32,
    };
    notches.clamp(-3.0, 3.0)
}

/// Global keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    GoBack,
    ToggleMusic,
    ToggleFullscreen,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" => Some(KeyAction::GoBack),
        "m" | "M" => Some(KeyAction::ToggleMusic),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        _ => None,
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
