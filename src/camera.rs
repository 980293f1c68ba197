use crate::core::Camera;
use crate::input;
use glam::{Vec2, Vec3};
use web_sys as web;

/// Compute a world-space ray from canvas backing-store pixel coordinates.
///
/// Returns `(ray_origin, ray_direction)` in world space.
#[inline]
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    sx: f32,
    sy: f32,
    camera: &Camera,
) -> (Vec3, Vec3) {
    let ndc = input::ndc_from_px(
        Vec2::new(sx, sy),
        canvas.width() as f32,
        canvas.height() as f32,
    );
    input::ray_from_ndc(camera.view_proj(), camera.eye, ndc)
}
