// Host-side tests for the orbit rig.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod pose {
    include!("../src/core/pose.rs");
}
mod state {
    include!("../src/core/state.rs");
}
mod orbit {
    include!("../src/core/orbit.rs");
}

use constants::{ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE};
use glam::Vec3;
use orbit::OrbitRig;
use pose::INITIAL;
use state::CameraRig;

const DT: f32 = 1.0 / 60.0;

fn home_rig() -> CameraRig {
    CameraRig::new(INITIAL.position, INITIAL.look_at)
}

#[test]
fn disabled_rig_never_moves_camera() {
    let mut orbit = OrbitRig::default();
    let mut rig = home_rig();
    rig.orbit_enabled = false;
    let eye = Vec3::new(3.0, 4.0, 5.0);
    rig.eye = eye;
    orbit.drag(200.0, 50.0);
    orbit.zoom(5.0);
    for _ in 0..120 {
        orbit.update(&mut rig, DT);
    }
    assert_eq!(rig.eye, eye);

    // queued input was dropped, so re-enabling does not replay it
    rig.orbit_enabled = true;
    rig.eye = INITIAL.position;
    let before = rig.eye.distance(orbit.target);
    orbit.update(&mut rig, DT);
    assert!((rig.eye.distance(orbit.target) - before).abs() < 1e-3);
}

#[test]
fn auto_rotate_keeps_distance_and_height() {
    let mut orbit = OrbitRig::default();
    let mut rig = home_rig();
    let d0 = rig.eye.distance(orbit.target);
    let y0 = rig.eye.y;
    for _ in 0..600 {
        orbit.update(&mut rig, DT);
    }
    assert!((rig.eye.distance(orbit.target) - d0).abs() < 1e-2);
    assert!((rig.eye.y - y0).abs() < 1e-2);
    assert!(rig.eye.distance(INITIAL.position) > 1.0);
    assert_eq!(rig.target, INITIAL.look_at);
}

#[test]
fn zoom_clamps_to_distance_band() {
    let mut orbit = OrbitRig::default();
    let mut rig = home_rig();
    for _ in 0..200 {
        orbit.zoom(-3.0);
        orbit.update(&mut rig, DT);
        let d = rig.eye.distance(orbit.target);
        assert!(d >= ORBIT_MIN_DISTANCE - 1e-3 && d <= ORBIT_MAX_DISTANCE + 1e-3);
    }
    assert!((rig.eye.distance(orbit.target) - ORBIT_MIN_DISTANCE).abs() < 1e-2);

    for _ in 0..200 {
        orbit.zoom(3.0);
        orbit.update(&mut rig, DT);
    }
    assert!((rig.eye.distance(orbit.target) - ORBIT_MAX_DISTANCE).abs() < 1e-2);
}

#[test]
fn out_of_band_eye_is_pulled_into_range() {
    let mut orbit = OrbitRig::default();
    let mut rig = CameraRig::new(Vec3::new(0.0, 7.0, 80.0 * 3.0), INITIAL.look_at);
    orbit.update(&mut rig, DT);
    assert!(rig.eye.distance(orbit.target) <= ORBIT_MAX_DISTANCE + 1e-3);
}

#[test]
fn vertical_drag_never_flips_over_the_pole() {
    let mut orbit = OrbitRig::default();
    let mut rig = home_rig();
    for _ in 0..300 {
        orbit.drag(0.0, 500.0);
        orbit.update(&mut rig, DT);
        assert!(rig.eye.is_finite());
        let offset = rig.eye - orbit.target;
        assert!(offset.x.abs() + offset.z.abs() > 0.0);
    }
}

#[test]
fn horizontal_drag_changes_azimuth() {
    let mut a = OrbitRig::default();
    let mut b = OrbitRig::default();
    let mut rig_a = home_rig();
    let mut rig_b = home_rig();
    b.drag(300.0, 0.0);
    for _ in 0..30 {
        a.update(&mut rig_a, DT);
        b.update(&mut rig_b, DT);
    }
    assert!(rig_a.eye.distance(rig_b.eye) > 0.5);
}
