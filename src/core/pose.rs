use glam::Vec3;

/// A named camera viewpoint: where the eye sits and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Pose {
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }
}

/// Home view the intro settles on and the orbit rig circles around.
pub const INITIAL: Pose = Pose::new(Vec3::new(30.0, 0.0, 27.0), Vec3::new(0.0, 7.0, 0.0));

/// Close-up of the projects monitor.
pub const PROJECT_FOCUS: Pose = Pose::new(Vec3::new(15.0, 7.0, -3.0), Vec3::new(0.0, 7.0, -3.0));

/// Waypoint the camera backs out to when leaving the projects monitor.
pub const PROJECT_PRE_EXIT: Pose = Pose::new(Vec3::new(25.0, 7.0, 0.0), Vec3::new(0.0, 7.0, 0.0));

/// Approach to the about monitor through the back of the RV (stage 1).
pub const ABOUT_FOCUS_1: Pose = Pose::new(Vec3::new(0.0, 4.0, -25.0), Vec3::new(0.0, 4.0, -3.0));

/// Reading distance in front of the about monitor (stage 2).
pub const ABOUT_FOCUS_2: Pose = Pose::new(Vec3::new(0.0, 4.0, -6.0), Vec3::new(0.0, 4.0, -3.0));

/// Ease `value` toward `target` by a fixed fraction of the remaining gap.
#[inline]
pub fn blend_toward(value: &mut Vec3, target: Vec3, factor: f32) {
    *value = value.lerp(target, factor);
}

/// Scalar version of [`blend_toward`].
#[inline]
pub fn blend_scalar(value: &mut f32, target: f32, factor: f32) {
    *value += (target - *value) * factor;
}
