use super::constants::{
    CARD_HOVER_SCALE, CARD_SCALE_TAU_SEC, GAUGE_AMPLITUDE, GAUGE_BASE_X, GAUGE_COUNT,
    GAUGE_PHASES, MONITOR_CLOCKS, PROJECT_CARD_COUNT, TORUS_SPIN_PER_SEC,
};
use super::pose::blend_scalar;

/// Battery gauge x offsets at `elapsed_sec`; each bar bounces with its own phase.
#[inline]
pub fn gauge_offsets(elapsed_sec: f32) -> [f32; GAUGE_COUNT] {
    GAUGE_PHASES.map(|phase| (GAUGE_AMPLITUDE * (elapsed_sec + phase).sin()).abs() + GAUGE_BASE_X)
}

/// Time uniforms for the animated monitor materials.
#[derive(Clone, Debug, Default)]
pub struct ShaderClocks {
    times: [f32; MONITOR_CLOCKS],
}

impl ShaderClocks {
    pub fn advance(&mut self, dt_sec: f32) {
        for t in &mut self.times {
            *t += dt_sec;
        }
    }

    pub fn all(&self) -> [f32; MONITOR_CLOCKS] {
        self.times
    }
}

/// Eased hover scale of the project cards.
#[derive(Clone, Debug)]
pub struct CardScales {
    scales: [f32; PROJECT_CARD_COUNT],
}

impl Default for CardScales {
    fn default() -> Self {
        Self {
            scales: [1.0; PROJECT_CARD_COUNT],
        }
    }
}

impl CardScales {
    pub fn update(&mut self, hovered: impl Fn(usize) -> bool, dt_sec: f32) {
        let alpha = 1.0 - (-dt_sec.max(0.0) / CARD_SCALE_TAU_SEC).exp();
        for (i, s) in self.scales.iter_mut().enumerate() {
            let target = if hovered(i) { CARD_HOVER_SCALE } else { 1.0 };
            blend_scalar(s, target, alpha);
        }
    }

    pub fn get(&self, i: usize) -> f32 {
        self.scales.get(i).copied().unwrap_or(1.0)
    }
}

/// Spinning torus on the fun monitor.
#[derive(Clone, Debug, Default)]
pub struct TorusSpin {
    pub angle_z: f32,
}

impl TorusSpin {
    pub fn advance(&mut self, dt_sec: f32) {
        self.angle_z -= dt_sec * TORUS_SPIN_PER_SEC;
    }
}
