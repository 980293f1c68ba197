// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn blend_factors_are_fractions() {
    for f in [FOCUS_BLEND, ABOUT_LOOK_AT_BLEND, INTRO_BLEND, ORBIT_DAMPING] {
        assert!(f > 0.0 && f < 1.0);
    }
    assert!(CARD_SCALE_TAU_SEC > 0.0);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_relationships() {
    // About exit outlasts the stage change so a full round trip is visible
    assert!(ABOUT_EXIT_MS > ABOUT_STAGE_ADVANCE_MS);
    assert!(PROJECT_EXIT_MS < ABOUT_EXIT_MS);
    assert!(INTRO_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_band_and_gauge_base() {
    assert!(ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);
    assert!((GAUGE_BASE_X - 4.94).abs() < 1e-5);
    assert!((GAUGE_BASE_X + GAUGE_AMPLITUDE - 5.09).abs() < 1e-5);
    assert!(SIGN_INTENSITY_HOVER < SIGN_INTENSITY_IDLE);
}

#[test]
fn pick_anchor_names_are_unique() {
    for (i, a) in PICK_ANCHORS.iter().enumerate() {
        assert!(a.radius > 0.0, "{}", a.name);
        for b in &PICK_ANCHORS[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
    assert_eq!(SIGN_HALF_EXTENTS.len(), 5);
}

#[test]
fn project_cards_stack_on_the_monitor() {
    let ys: Vec<f32> = ["project1", "project2", "project3", "project4"]
        .iter()
        .map(|n| {
            let a = PICK_ANCHORS.iter().find(|a| a.name == *n).unwrap();
            assert_eq!(a.center.x, 4.8);
            assert_eq!(a.center.z, -2.95);
            a.center.y
        })
        .collect();
    assert_eq!(ys, vec![8.6, 7.5, 6.4, 5.3]);
    // neighbouring pick spheres do not overlap
    for w in ys.windows(2) {
        assert!(w[0] - w[1] > 2.0 * 0.5 - 1e-6);
    }
}

#[test]
fn monitors_use_valid_clocks() {
    for m in MONITORS {
        assert!(m.clock < MONITOR_CLOCKS);
    }
    assert_eq!(BATTERY_CENTER, [5.09, 2.81, -6.19]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn star_shell() {
    assert_eq!(STAR_COUNT, 1000);
    assert!(STAR_RADIUS_MIN < STAR_RADIUS_MAX);
    assert!(STAR_RADIUS_MAX < 500.0, "stars must sit inside the far plane");
}
