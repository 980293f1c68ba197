// Host-side tests for the portfolio scene: intro, pointer handling and
// per-frame ambient animation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod ambient {
    include!("../src/core/ambient.rs");
}
mod constants {
    include!("../src/core/constants.rs");
}
mod focus {
    include!("../src/core/focus.rs");
}
mod orbit {
    include!("../src/core/orbit.rs");
}
mod pose {
    include!("../src/core/pose.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod signs {
    include!("../src/core/signs.rs");
}
mod state {
    include!("../src/core/state.rs");
}
mod timers {
    include!("../src/core/timers.rs");
}

use ambient::{gauge_offsets, CardScales, TorusSpin};
use focus::{FocusState, FocusTarget};
use pose::INITIAL;
use scene::*;
use signs::{Cursor, SceneObject, Sign};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn settled_scene() -> PortfolioScene {
    PortfolioScene::new(SceneParams {
        start_eye: INITIAL.position,
        ..SceneParams::default()
    })
}

fn obj(scene: &PortfolioScene, name: &str) -> SceneObject {
    scene.object(name).unwrap()
}

fn run(scene: &mut PortfolioScene, d: Duration) -> SceneFrame {
    let mut frame = scene.frame();
    let mut t = Duration::ZERO;
    while t < d {
        frame = scene.tick(FRAME);
        t += FRAME;
    }
    frame
}

#[test]
fn camera_waits_at_loading_eye_until_intro() {
    let mut scene = PortfolioScene::default();
    assert_eq!(scene.camera().eye, LOADING_EYE);
    assert!(!scene.intro_active());
    scene.begin_intro();
    assert!(scene.intro_active());

    let d0 = scene.camera().eye.distance(INITIAL.position);
    scene.tick(FRAME);
    assert!(scene.camera().eye.distance(INITIAL.position) < d0);
}

#[test]
fn intro_ends_after_three_seconds_near_home() {
    let mut scene = PortfolioScene::default();
    scene.begin_intro();
    run(&mut scene, Duration::from_millis(2900));
    assert!(scene.intro_active());
    run(&mut scene, Duration::from_millis(200));
    assert!(!scene.intro_active());
    // auto-rotate drifts the eye slightly, but it has arrived near home
    assert!(scene.camera().eye.distance(INITIAL.position) < 3.0);
    assert_eq!(scene.camera().target, INITIAL.look_at);
}

#[test]
fn hovering_sets_cursor_and_dims_sign() {
    let mut scene = settled_scene();
    let mut fx = Effects::new();
    let sign = obj(&scene, "githubSign");
    scene.pointer_enter(sign, &mut fx);
    assert_eq!(fx.as_slice(), &[SceneEffect::SetCursor(Cursor::Pointer)]);
    assert_eq!(scene.hover().intensity(Sign::Github), 0.3);
    let frame = scene.tick(FRAME);
    assert_eq!(frame.sign_colors[Sign::Github.index()][1], 1.1 * 0.3);

    fx.clear();
    scene.pointer_leave(sign, &mut fx);
    assert_eq!(fx.as_slice(), &[SceneEffect::SetCursor(Cursor::Auto)]);
    assert_eq!(scene.hover().intensity(Sign::Github), 1.0);
}

#[test]
fn link_clicks_open_urls_without_focus() {
    let mut scene = settled_scene();
    let mut fx = Effects::new();
    scene.click(obj(&scene, "emailSign"), &mut fx);
    scene.click(obj(&scene, "project2"), &mut fx);
    assert_eq!(
        fx.as_slice(),
        &[
            SceneEffect::OpenUrl {
                url: signs::EMAIL_LINK,
                new_tab: false
            },
            SceneEffect::OpenUrl {
                url: signs::PROJECT_LINKS[1],
                new_tab: true
            },
        ]
    );
    assert_eq!(scene.focus().state(), FocusState::Idle);
    assert!(scene.camera().orbit_enabled);
}

#[test]
fn focus_click_disables_orbit_and_resets_cursor() {
    let mut scene = settled_scene();
    let mut fx = Effects::new();
    scene.click(obj(&scene, "projectsSign"), &mut fx);
    assert_eq!(scene.focus().state(), FocusState::Focusing(FocusTarget::Project));
    assert!(!scene.camera().orbit_enabled);
    assert_eq!(fx.as_slice(), &[SceneEffect::SetCursor(Cursor::Auto)]);

    // the orbit rig must not fight the focus blend
    let eye = scene.camera().eye;
    scene.drag(400.0, 0.0);
    scene.zoom(3.0);
    let frame = scene.tick(FRAME);
    let expected = eye.lerp(pose::PROJECT_FOCUS.position, constants::FOCUS_BLEND);
    assert!(frame.eye.distance(expected) < 1e-4);
}

#[test]
fn go_back_button_only_live_while_focused() {
    let mut scene = settled_scene();
    let button = obj(&scene, "projectGoBack");
    assert!(!scene.is_interactive(button));
    assert!(scene.frame().go_back.is_none());

    let mut fx = Effects::new();
    scene.click(button, &mut fx);
    assert_eq!(scene.focus().state(), FocusState::Idle);

    scene.click(obj(&scene, "projectsSign"), &mut fx);
    assert!(scene.is_interactive(button));
    assert!(!scene.is_interactive(obj(&scene, "aboutGoBack")));
    assert_eq!(scene.frame().go_back, Some(FocusTarget::Project));

    scene.pointer_enter(button, &mut fx);
    assert!(scene.hover().is_hovered(button));
    fx.clear();
    scene.click(button, &mut fx);
    assert_eq!(scene.focus().state(), FocusState::Exiting(FocusTarget::Project));
    assert!(!scene.hover().is_hovered(button));
    assert_eq!(fx.as_slice(), &[SceneEffect::SetCursor(Cursor::Auto)]);
    assert!(!scene.is_interactive(button));
}

#[test]
fn project_round_trip_restores_orbit() {
    let mut scene = settled_scene();
    let mut fx = Effects::new();
    scene.click(obj(&scene, "projectsSign"), &mut fx);
    let frame = run(&mut scene, Duration::from_millis(2000));
    assert!(frame.eye.distance(pose::PROJECT_FOCUS.position) < 0.1);

    scene.go_back(&mut fx);
    run(&mut scene, Duration::from_millis(500));
    assert_eq!(scene.focus().state(), FocusState::Idle);
    assert!(scene.camera().orbit_enabled);

    // orbit owns the camera again
    let eye = scene.camera().eye;
    scene.tick(FRAME);
    assert!(scene.camera().eye != eye);
}

#[test]
fn intro_does_not_fight_focus() {
    let mut scene = PortfolioScene::default();
    scene.begin_intro();
    scene.tick(FRAME);
    let mut fx = Effects::new();
    scene.click(obj(&scene, "aboutSign"), &mut fx);
    assert!(scene.intro_active());

    // only the focus blend moves the eye; the intro stays out until it ends
    let eye = scene.camera().eye;
    scene.tick(FRAME);
    let expected = eye.lerp(pose::ABOUT_FOCUS_1.position, constants::FOCUS_BLEND);
    assert!(scene.camera().eye.distance(expected) < 1e-4);
    assert_eq!(scene.camera().target, pose::ABOUT_FOCUS_1.look_at);
}

#[test]
fn about_click_between_frames_waits_a_full_second() {
    let mut scene = settled_scene();
    run(&mut scene, Duration::from_millis(500));
    let mut fx = Effects::new();
    scene.click(obj(&scene, "aboutSign"), &mut fx);

    scene.tick(FRAME);
    let first_about_frame = scene.elapsed_sec();
    let mut advanced_at = None;
    for _ in 0..100 {
        scene.tick(FRAME);
        if advanced_at.is_none() && scene.focus().about_stage() == focus::AboutStage::Close {
            advanced_at = Some(scene.elapsed_sec());
        }
    }
    let gap = advanced_at.expect("stage never advanced") - first_about_frame;
    assert!(gap >= 1.0 - 1e-4, "advanced after {}s", gap);
    assert!(gap <= 1.0 + FRAME.as_secs_f32() + 1e-4, "advanced after {}s", gap);
}

#[test]
fn drag_and_zoom_ignored_while_focused() {
    let mut scene = settled_scene();
    let mut fx = Effects::new();
    scene.click(obj(&scene, "aboutSign"), &mut fx);
    scene.drag(1000.0, 1000.0);
    scene.zoom(-10.0);
    run(&mut scene, Duration::from_millis(3000));
    assert!(scene.camera().eye.distance(pose::ABOUT_FOCUS_2.position) < 0.1);
}

#[test]
fn gauges_stay_in_band() {
    let mut t = 0.0f32;
    while t < 60.0 {
        for x in gauge_offsets(t) {
            assert!((4.94 - 1e-5..=5.09 + 1e-5).contains(&x), "x={} at t={}", x, t);
        }
        t += 0.013;
    }
}

#[test]
fn card_scale_eases_monotonically() {
    let mut cards = CardScales::default();
    let mut prev = cards.get(1);
    for _ in 0..60 {
        cards.update(|i| i == 1, 1.0 / 60.0);
        let s = cards.get(1);
        assert!(s >= prev && s <= 1.2 + 1e-6);
        prev = s;
        assert_eq!(cards.get(0), 1.0);
    }
    assert!((prev - 1.2).abs() < 1e-3);

    for _ in 0..60 {
        cards.update(|_| false, 1.0 / 60.0);
        let s = cards.get(1);
        assert!(s <= prev && s >= 1.0 - 1e-6);
        prev = s;
    }
    assert!((prev - 1.0).abs() < 1e-3);
}

#[test]
fn hovered_card_grows_in_frame() {
    let mut scene = settled_scene();
    let mut fx = Effects::new();
    scene.pointer_enter(obj(&scene, "project4"), &mut fx);
    let frame = run(&mut scene, Duration::from_millis(500));
    assert!(frame.card_scales[3] > 1.15);
    assert_eq!(frame.card_scales[0], 1.0);
}

#[test]
fn torus_spins_backwards_and_clocks_advance() {
    let mut spin = TorusSpin::default();
    spin.advance(2.0);
    assert!((spin.angle_z + 1.0).abs() < 1e-6);

    let mut scene = settled_scene();
    let frame = run(&mut scene, Duration::from_millis(1600));
    assert!(frame.torus_angle < 0.0);
    for t in frame.shader_times {
        assert!((t - 1.6).abs() < 1e-3);
    }
    assert!((scene.elapsed_sec() - 1.6).abs() < 1e-3);
}

#[test]
fn unknown_object_names_hit_nothing() {
    let scene = settled_scene();
    assert!(scene.object("headlight").is_none());
    assert!(scene.object("aboutSign").is_some());
}
