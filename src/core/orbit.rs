use super::constants::{
    ORBIT_AUTO_ROTATE_SPEED, ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE,
    ORBIT_POLAR_EPS, ORBIT_ROTATE_PER_PX, ORBIT_ZOOM_STEP,
};
use super::pose::INITIAL;
use super::state::CameraRig;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Free-orbit rig around a fixed target: auto-rotates, follows pointer drags
/// and wheel zoom, and keeps the eye within a distance band.
///
/// It only moves the camera while `CameraRig::orbit_enabled` is set.
#[derive(Clone, Debug)]
pub struct OrbitRig {
    pub target: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate_speed: f32,
    pub damping: f32,
    delta_azimuth: f32,
    delta_polar: f32,
    zoom_scale: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            target: INITIAL.look_at,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            damping: ORBIT_DAMPING,
            delta_azimuth: 0.0,
            delta_polar: 0.0,
            zoom_scale: 1.0,
        }
    }
}

impl OrbitRig {
    /// Queue a drag rotation, in canvas pixels.
    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        self.delta_azimuth -= dx_px * ORBIT_ROTATE_PER_PX;
        self.delta_polar -= dy_px * ORBIT_ROTATE_PER_PX;
    }

    /// Queue a zoom; positive notches move the eye away from the target.
    pub fn zoom(&mut self, notches: f32) {
        self.zoom_scale *= ORBIT_ZOOM_STEP.powf(-notches);
    }

    /// Throw away queued input, e.g. when a scripted focus takes over.
    pub fn reset_input(&mut self) {
        self.delta_azimuth = 0.0;
        self.delta_polar = 0.0;
        self.zoom_scale = 1.0;
    }

    pub fn update(&mut self, rig: &mut CameraRig, dt_sec: f32) {
        if !rig.orbit_enabled {
            self.reset_input();
            return;
        }
        let offset = rig.eye - self.target;
        let radius = offset.length();
        if radius < 1e-6 {
            return;
        }
        let mut azimuth = offset.x.atan2(offset.z);
        let mut polar = (offset.y / radius).clamp(-1.0, 1.0).acos();

        azimuth -= TAU / 60.0 * self.auto_rotate_speed * dt_sec;
        azimuth += self.delta_azimuth * self.damping;
        polar += self.delta_polar * self.damping;
        polar = polar.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);

        let radius = (radius * self.zoom_scale).clamp(self.min_distance, self.max_distance);
        self.zoom_scale = 1.0;
        self.delta_azimuth *= 1.0 - self.damping;
        self.delta_polar *= 1.0 - self.damping;

        let sin_polar = polar.sin();
        rig.eye = self.target
            + Vec3::new(
                radius * sin_polar * azimuth.sin(),
                radius * polar.cos(),
                radius * sin_polar * azimuth.cos(),
            );
        rig.target = self.target;
    }
}
