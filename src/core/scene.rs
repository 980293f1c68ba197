use super::ambient::{gauge_offsets, CardScales, ShaderClocks, TorusSpin};
use super::constants::{
    GAUGE_COUNT, INTRO_BLEND, INTRO_MS, MONITOR_CLOCKS, PROJECT_CARD_COUNT,
};
use super::focus::{CameraFocusController, FocusParams, FocusTarget};
use super::orbit::OrbitRig;
use super::pose::{blend_toward, INITIAL};
use super::signs::{Cursor, HoverState, ObjectAction, ObjectRegistry, SceneObject, Sign};
use super::state::CameraRig;
use super::timers::{TaskKind, TaskQueue};
use glam::Vec3;
use smallvec::SmallVec;
use std::time::Duration;

/// Where the camera waits while assets load; the intro pulls it home.
pub const LOADING_EYE: Vec3 = Vec3::new(0.0, 0.0, 80.0);

/// Side effect the page has to carry out on behalf of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEffect {
    OpenUrl { url: &'static str, new_tab: bool },
    SetCursor(Cursor),
}

pub type Effects = SmallVec<[SceneEffect; 4]>;

#[derive(Clone, Debug)]
pub struct SceneParams {
    pub focus: FocusParams,
    pub intro: Duration,
    pub intro_blend: f32,
    pub start_eye: Vec3,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            focus: FocusParams::default(),
            intro: Duration::from_millis(INTRO_MS),
            intro_blend: INTRO_BLEND,
            start_eye: LOADING_EYE,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub eye: Vec3,
    pub target: Vec3,
    pub sign_colors: [[f32; 3]; 5],
    pub gauge_x: [f32; GAUGE_COUNT],
    pub shader_times: [f32; MONITOR_CLOCKS],
    pub card_scales: [f32; PROJECT_CARD_COUNT],
    pub torus_angle: f32,
    pub go_back: Option<FocusTarget>,
}

/// The whole interactive portfolio scene. One `tick` per rendered frame;
/// pointer handlers call in between frames.
pub struct PortfolioScene {
    camera: CameraRig,
    orbit: OrbitRig,
    focus: CameraFocusController,
    tasks: TaskQueue,
    registry: ObjectRegistry,
    hover: HoverState,
    clocks: ShaderClocks,
    cards: CardScales,
    torus: TorusSpin,
    elapsed_sec: f32,
    intro_active: bool,
    params: SceneParams,
}

impl Default for PortfolioScene {
    fn default() -> Self {
        Self::new(SceneParams::default())
    }
}

impl PortfolioScene {
    pub fn new(params: SceneParams) -> Self {
        Self {
            camera: CameraRig::new(params.start_eye, INITIAL.look_at),
            orbit: OrbitRig::default(),
            focus: CameraFocusController::new(params.focus.clone()),
            tasks: TaskQueue::new(),
            registry: ObjectRegistry::default(),
            hover: HoverState::default(),
            clocks: ShaderClocks::default(),
            cards: CardScales::default(),
            torus: TorusSpin::default(),
            elapsed_sec: 0.0,
            intro_active: false,
            params,
        }
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn focus(&self) -> &CameraFocusController {
        &self.focus
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn elapsed_sec(&self) -> f32 {
        self.elapsed_sec
    }

    pub fn intro_active(&self) -> bool {
        self.intro_active
    }

    /// Resolve a mesh name from a pointer event. Unknown names are not an
    /// error for the caller; they simply hit nothing.
    pub fn object(&self, name: &str) -> Option<SceneObject> {
        match self.registry.lookup(name) {
            Ok(o) => Some(o),
            Err(e) => {
                log::debug!("[pick] {}", e);
                None
            }
        }
    }

    /// Go-back buttons only exist while their focus is active.
    pub fn is_interactive(&self, object: SceneObject) -> bool {
        match object {
            SceneObject::GoBack(t) => self.focus.focus_request() == Some(t),
            _ => true,
        }
    }

    /// Assets are ready: blend the camera home for the intro window.
    pub fn begin_intro(&mut self) {
        self.intro_active = true;
        self.tasks.schedule(TaskKind::IntroEnd, self.params.intro);
        log::info!("[intro] start");
    }

    pub fn pointer_enter(&mut self, object: SceneObject, effects: &mut Effects) {
        if !self.is_interactive(object) {
            return;
        }
        self.hover.set(object, true);
        effects.push(SceneEffect::SetCursor(Cursor::Pointer));
    }

    pub fn pointer_leave(&mut self, object: SceneObject, effects: &mut Effects) {
        self.hover.set(object, false);
        effects.push(SceneEffect::SetCursor(Cursor::Auto));
    }

    pub fn click(&mut self, object: SceneObject, effects: &mut Effects) {
        if !self.is_interactive(object) {
            return;
        }
        log::info!("[click] {}", object.name());
        match object.action() {
            ObjectAction::Focus(target) => {
                if self
                    .focus
                    .request_focus(target, &mut self.tasks, &mut self.camera)
                {
                    self.orbit.reset_input();
                    effects.push(SceneEffect::SetCursor(Cursor::Auto));
                }
            }
            ObjectAction::OpenLink { url, new_tab } => {
                effects.push(SceneEffect::OpenUrl { url, new_tab });
            }
            ObjectAction::GoBack => self.go_back(effects),
        }
    }

    pub fn go_back(&mut self, effects: &mut Effects) {
        if self.focus.go_back(&mut self.tasks) {
            self.hover.set(SceneObject::GoBack(FocusTarget::About), false);
            self.hover.set(SceneObject::GoBack(FocusTarget::Project), false);
            effects.push(SceneEffect::SetCursor(Cursor::Auto));
        }
    }

    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        if self.camera.orbit_enabled {
            self.orbit.drag(dx_px, dy_px);
        }
    }

    pub fn zoom(&mut self, notches: f32) {
        if self.camera.orbit_enabled {
            self.orbit.zoom(notches);
        }
    }

    pub fn tick(&mut self, dt: Duration) -> SceneFrame {
        let dt_sec = dt.as_secs_f32();
        self.elapsed_sec += dt_sec;

        let fired = self.focus.step(dt, &mut self.tasks, &mut self.camera);
        if fired.contains(&TaskKind::IntroEnd) {
            self.intro_active = false;
            log::info!("[intro] done");
        }

        self.orbit.update(&mut self.camera, dt_sec);
        if self.intro_active && self.camera.orbit_enabled {
            self.camera.target = INITIAL.look_at;
            blend_toward(&mut self.camera.eye, INITIAL.position, self.params.intro_blend);
        }

        self.clocks.advance(dt_sec);
        let hover = &self.hover;
        self.cards.update(|i| hover.card_hovered(i), dt_sec);
        self.torus.advance(dt_sec);

        self.frame()
    }

    pub fn frame(&self) -> SceneFrame {
        SceneFrame {
            eye: self.camera.eye,
            target: self.camera.target,
            sign_colors: Sign::ALL.map(|s| self.hover.sign_color(s)),
            gauge_x: gauge_offsets(self.elapsed_sec),
            shader_times: self.clocks.all(),
            card_scales: std::array::from_fn(|i| self.cards.get(i)),
            torus_angle: self.torus.angle_z,
            go_back: self.focus.focus_request(),
        }
    }
}
