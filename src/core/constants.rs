// Focus, animation and interaction tuning constants.
//
// Blend factors are applied once per rendered frame (not time-normalized);
// delays are measured on the frame clock driven by `TaskQueue::advance`.

// Per-frame blend factors
pub const FOCUS_BLEND: f32 = 0.06;
pub const ABOUT_LOOK_AT_BLEND: f32 = 0.1;
pub const INTRO_BLEND: f32 = 0.05;

// Scheduled task delays (milliseconds)
pub const ABOUT_STAGE_ADVANCE_MS: u64 = 1000;
pub const ABOUT_EXIT_MS: u64 = 1500;
pub const PROJECT_EXIT_MS: u64 = 500;
pub const INTRO_MS: u64 = 3000;

// Sign emissive switch
pub const SIGN_INTENSITY_IDLE: f32 = 1.0;
pub const SIGN_INTENSITY_HOVER: f32 = 0.3;
pub const NEON_WHITE_INTENSITY: f32 = 1.1;

// Battery gauges: x = |amp * sin(t + phase)| + base
pub const GAUGE_AMPLITUDE: f32 = 0.15;
pub const GAUGE_BASE_X: f32 = 5.19 - 0.25;
pub const GAUGE_PHASES: [f32; 4] = [0.8, 0.6, 0.4, 0.2];

// Project card hover
pub const CARD_HOVER_SCALE: f32 = 1.2;
pub const CARD_SCALE_TAU_SEC: f32 = 0.12;

// Fun monitor torus spin (radians per second, negative z)
pub const TORUS_SPIN_PER_SEC: f32 = 0.5;

// Orbit rig
pub const ORBIT_MIN_DISTANCE: f32 = 18.0;
pub const ORBIT_MAX_DISTANCE: f32 = 120.0;
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = -0.3; // OrbitControls units: 1.0 = one turn per minute
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_PER_PX: f32 = 0.005;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance multiplier per wheel notch
pub const ORBIT_POLAR_EPS: f32 = 1e-3;

// Number of animated monitor materials and their gauges
pub const MONITOR_CLOCKS: usize = 4;
pub const GAUGE_COUNT: usize = 4;
pub const PROJECT_CARD_COUNT: usize = 4;
