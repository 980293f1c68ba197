use glam::Vec3;

// Scene layout and palette used by the web frontend for picking and drawing.
// Units are world units of the RV scene; the RV sits around the origin.

/// Pick volume for an interactive object, tagged with its mesh name.
#[derive(Clone, Copy, Debug)]
pub struct PickAnchor {
    pub name: &'static str,
    pub center: Vec3,
    pub radius: f32,
}

impl PickAnchor {
    const fn new(name: &'static str, center: Vec3, radius: f32) -> Self {
        Self { name, center, radius }
    }
}

pub const PICK_ANCHORS: [PickAnchor; 11] = [
    PickAnchor::new("projectsSign", Vec3::new(5.3, 11.0, 1.2), 1.3),
    PickAnchor::new("aboutSign", Vec3::new(5.3, 11.0, -2.4), 1.1),
    PickAnchor::new("emailSign", Vec3::new(5.3, 1.8, 2.8), 0.55),
    PickAnchor::new("linkedinSign", Vec3::new(5.3, 1.8, 4.0), 0.55),
    PickAnchor::new("githubSign", Vec3::new(5.3, 1.8, 5.2), 0.55),
    PickAnchor::new("project1", Vec3::new(4.8, 8.6, -2.95), 0.5),
    PickAnchor::new("project2", Vec3::new(4.8, 7.5, -2.95), 0.5),
    PickAnchor::new("project3", Vec3::new(4.8, 6.4, -2.95), 0.5),
    PickAnchor::new("project4", Vec3::new(4.8, 5.3, -2.95), 0.5),
    PickAnchor::new("aboutGoBack", Vec3::new(0.0, 3.6, 4.0), 0.4),
    PickAnchor::new("projectGoBack", Vec3::new(4.8, 4.72, -2.93), 0.4),
];

/// Half extents of each neon sign, in `Sign::ALL` order.
pub const SIGN_HALF_EXTENTS: [[f32; 3]; 5] = [
    [0.08, 0.45, 1.5],
    [0.08, 0.45, 1.1],
    [0.08, 0.35, 0.35],
    [0.08, 0.35, 0.35],
    [0.08, 0.35, 0.35],
];

// Project cards and go-back buttons
pub const CARD_HALF_EXTENTS: [f32; 3] = [0.1, 0.4, 1.4];
pub const CARD_COLOR: [f32; 3] = [1.0, 0.75, 0.8];
pub const GO_BACK_HALF_EXTENTS: [f32; 3] = [0.4, 0.125, 0.05];
pub const ABOUT_GO_BACK_COLOR: [f32; 3] = [1.0, 0.61, 0.59];
pub const PROJECT_GO_BACK_COLOR: [f32; 3] = [1.0, 0.75, 0.8];

/// Animated monitor surface: which clock drives it and which palette it uses.
#[derive(Clone, Copy, Debug)]
pub struct MonitorLayout {
    pub center: [f32; 3],
    pub half: [f32; 3],
    pub clock: usize,
    pub color_start: [f32; 3],
    pub color_end: [f32; 3],
}

const MAIN_START: [f32; 3] = [0.871, 0.871, 0.871]; // #dedede
const MAIN_END: [f32; 3] = [1.0, 0.612, 0.588]; // #ff9c96
const MOUSE_START: [f32; 3] = [0.259, 0.286, 1.0]; // #4249ff
const MOUSE_END: [f32; 3] = [1.0, 0.259, 0.286]; // #ff4249

pub const MONITORS: [MonitorLayout; 4] = [
    // about monitor
    MonitorLayout {
        center: [0.0, 4.6, 4.15],
        half: [2.4, 1.4, 0.05],
        clock: 0,
        color_start: MAIN_START,
        color_end: MAIN_END,
    },
    MonitorLayout {
        center: [-2.6, 8.0, 4.15],
        half: [1.2, 0.9, 0.05],
        clock: 1,
        color_start: MAIN_START,
        color_end: MAIN_END,
    },
    MonitorLayout {
        center: [4.75, 7.3, 1.4],
        half: [0.05, 1.0, 1.3],
        clock: 2,
        color_start: MOUSE_START,
        color_end: MOUSE_END,
    },
    // projects monitor, behind the cards
    MonitorLayout {
        center: [4.7, 7.2, -2.95],
        half: [0.05, 2.6, 1.9],
        clock: 3,
        color_start: MOUSE_START,
        color_end: MOUSE_END,
    },
];

/// Fun monitor surface; its stripes turn with the torus angle.
pub const FUN_MONITOR: ([f32; 3], [f32; 3]) = ([4.75, 4.2, 1.4], [0.05, 0.9, 1.1]);
pub const FUN_MONITOR_COLORS: ([f32; 3], [f32; 3]) = ([0.72, 0.45, 0.45], [0.35, 0.8, 0.9]);

// Battery gauge bars: x is animated, y stacks, z fixed
pub const BATTERY_CENTER: [f32; 3] = [5.09, 2.81, -6.19];
pub const BATTERY_HALF: [f32; 3] = [0.05, 0.8, 0.5];
pub const GAUGE_BAR_HALF: [f32; 3] = [0.06, 0.12, 0.35];
pub const GAUGE_BAR_Y: [f32; 4] = [2.3, 2.6, 2.9, 3.2];

/// Static, non-interactive pieces of the RV: (center, half extents, rgb).
pub const RV_PIECES: [([f32; 3], [f32; 3], [f32; 3]); 12] = [
    ([0.0, 6.0, -1.0], [4.6, 5.2, 7.5], [0.93, 0.86, 0.84]),  // body
    ([0.0, 11.6, -1.0], [4.8, 0.4, 7.7], [0.82, 0.56, 0.56]), // roof
    ([0.0, 1.2, 7.2], [4.4, 1.6, 1.6], [0.86, 0.72, 0.70]),   // cab
    ([4.7, 0.3, 4.8], [0.3, 1.0, 1.0], [0.15, 0.15, 0.18]),   // wheels
    ([-4.7, 0.3, 4.8], [0.3, 1.0, 1.0], [0.15, 0.15, 0.18]),
    ([4.7, 0.3, -5.6], [0.3, 1.0, 1.0], [0.15, 0.15, 0.18]),
    ([-4.7, 0.3, -5.6], [0.3, 1.0, 1.0], [0.15, 0.15, 0.18]),
    ([0.0, 1.4, 8.85], [3.2, 0.25, 0.05], [10.0, 9.4, 5.3]),  // headlight
    ([0.0, 2.0, -8.55], [3.0, 0.15, 0.05], [1.1, 0.0, 0.0]),  // backlight
    ([4.65, 0.9, -1.0], [0.03, 0.06, 7.4], [0.12, 1.2, 1.2]), // neon blue
    ([-4.65, 0.9, -1.0], [0.03, 0.06, 7.4], [1.1, 0.22, 0.55]), // neon pink
    ([0.0, 12.05, -1.0], [4.7, 0.04, 0.04], [1.05, 1.1, 0.11]), // neon yellow
];

/// Background planets: (center, radius, rgb).
pub const PLANETS: [([f32; 3], f32, [f32; 3]); 3] = [
    ([-28.29, 37.83, -79.44], 6.0, [0.78, 0.71, 0.74]),
    ([-110.15, 21.45, -5.38], 9.0, [0.87, 0.87, 0.79]),
    ([59.94, 31.99, 44.94], 5.0, [0.78, 0.71, 0.74]),
];

// Star field
pub const STAR_COUNT: usize = 1000;
pub const STAR_RADIUS_MIN: f32 = 100.0;
pub const STAR_RADIUS_MAX: f32 = 150.0;
pub const STAR_SEED: u64 = 42;

// Clear color (fog tint #E7C8C8, darkened for night sky)
pub const CLEAR_COLOR: [f64; 3] = [0.06, 0.05, 0.09];

// Fog (#E7C8C8) blended by distance from the eye
pub const FOG_COLOR: [f32; 3] = [0.906, 0.784, 0.784];
pub const FOG_DENSITY: f32 = 0.004;
