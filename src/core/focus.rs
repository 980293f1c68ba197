use super::constants::{
    ABOUT_EXIT_MS, ABOUT_LOOK_AT_BLEND, ABOUT_STAGE_ADVANCE_MS, FOCUS_BLEND, PROJECT_EXIT_MS,
};
use super::pose::{
    blend_toward, Pose, ABOUT_FOCUS_1, ABOUT_FOCUS_2, INITIAL, PROJECT_FOCUS, PROJECT_PRE_EXIT,
};
use super::state::CameraRig;
use super::timers::{FiredTasks, TaskKind, TaskQueue};
use glam::Vec3;
use std::time::Duration;

/// Which monitor a scripted focus flies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Project,
    About,
}

impl FocusTarget {
    fn exit_task(self) -> TaskKind {
        match self {
            FocusTarget::Project => TaskKind::ProjectExit,
            FocusTarget::About => TaskKind::AboutExit,
        }
    }
}

/// Camera ownership: free orbit, flying to a monitor, or flying back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Idle,
    Focusing(FocusTarget),
    Exiting(FocusTarget),
}

/// Sub-phase of About focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AboutStage {
    /// Stage 1: swing behind the RV.
    #[default]
    Approach,
    /// Stage 2: move in to reading distance.
    Close,
}

impl AboutStage {
    pub fn number(self) -> u8 {
        match self {
            AboutStage::Approach => 1,
            AboutStage::Close => 2,
        }
    }

    fn pose(self) -> Pose {
        match self {
            AboutStage::Approach => ABOUT_FOCUS_1,
            AboutStage::Close => ABOUT_FOCUS_2,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FocusParams {
    pub position_blend: f32,
    pub look_at_blend: f32,
    pub about_look_at_blend: f32,
    pub stage_advance: Duration,
    pub about_exit: Duration,
    pub project_exit: Duration,
}

impl Default for FocusParams {
    fn default() -> Self {
        Self {
            position_blend: FOCUS_BLEND,
            look_at_blend: FOCUS_BLEND,
            about_look_at_blend: ABOUT_LOOK_AT_BLEND,
            stage_advance: Duration::from_millis(ABOUT_STAGE_ADVANCE_MS),
            about_exit: Duration::from_millis(ABOUT_EXIT_MS),
            project_exit: Duration::from_millis(PROJECT_EXIT_MS),
        }
    }
}

/// Per-frame camera takeover for the Project and About monitors.
///
/// The look-at accumulator is never reset: every transition continues
/// blending from wherever the previous one left it.
#[derive(Clone, Debug)]
pub struct CameraFocusController {
    state: FocusState,
    about_stage: AboutStage,
    look_at: Vec3,
    /// Set once the stage-advance delay has started for the current About focus.
    stage_armed: bool,
    params: FocusParams,
}

impl Default for CameraFocusController {
    fn default() -> Self {
        Self::new(FocusParams::default())
    }
}

impl CameraFocusController {
    pub fn new(params: FocusParams) -> Self {
        Self {
            state: FocusState::Idle,
            about_stage: AboutStage::Approach,
            look_at: INITIAL.look_at,
            stage_armed: false,
            params,
        }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    /// The focus currently requested by the user, if any.
    pub fn focus_request(&self) -> Option<FocusTarget> {
        match self.state {
            FocusState::Focusing(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_exiting(&self, target: FocusTarget) -> bool {
        self.state == FocusState::Exiting(target)
    }

    pub fn about_stage(&self) -> AboutStage {
        self.about_stage
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Start flying to `target`. Only accepted while the orbit rig owns the
    /// camera; returns whether the request took effect.
    pub fn request_focus(
        &mut self,
        target: FocusTarget,
        tasks: &mut TaskQueue,
        rig: &mut CameraRig,
    ) -> bool {
        if self.state != FocusState::Idle {
            log::debug!("[focus] ignore {:?} request in {:?}", target, self.state);
            return false;
        }
        self.state = FocusState::Focusing(target);
        rig.orbit_enabled = false;
        if target == FocusTarget::About {
            // the advance delay starts on the first About frame, see `step`
            self.about_stage = AboutStage::Approach;
            self.stage_armed = false;
            tasks.cancel(TaskKind::StageAdvance);
        }
        log::info!("[focus] enter {:?}", target);
        true
    }

    /// Leave the current focus and start the scripted return.
    pub fn go_back(&mut self, tasks: &mut TaskQueue) -> bool {
        let FocusState::Focusing(target) = self.state else {
            log::debug!("[focus] ignore go back in {:?}", self.state);
            return false;
        };
        tasks.cancel(TaskKind::StageAdvance);
        tasks.cancel(TaskKind::AboutExit);
        tasks.cancel(TaskKind::ProjectExit);
        let delay = match target {
            FocusTarget::Project => self.params.project_exit,
            FocusTarget::About => self.params.about_exit,
        };
        tasks.schedule(target.exit_task(), delay);
        self.state = FocusState::Exiting(target);
        log::info!("[focus] exit {:?}", target);
        true
    }

    /// React to a fired task. Tasks that no longer match the state are no-ops.
    pub fn on_task(&mut self, kind: TaskKind, rig: &mut CameraRig) {
        match (kind, self.state) {
            (TaskKind::StageAdvance, FocusState::Focusing(FocusTarget::About)) => {
                self.about_stage = AboutStage::Close;
                log::info!("[focus] about stage 2");
            }
            (TaskKind::AboutExit, FocusState::Exiting(FocusTarget::About)) => {
                self.about_stage = AboutStage::Approach;
                self.finish_exit(rig);
            }
            (TaskKind::ProjectExit, FocusState::Exiting(FocusTarget::Project)) => {
                self.finish_exit(rig);
            }
            _ => {}
        }
    }

    fn finish_exit(&mut self, rig: &mut CameraRig) {
        rig.orbit_enabled = true;
        self.state = FocusState::Idle;
        log::info!("[focus] orbit control restored");
    }

    /// Blend the camera for this frame. Does nothing while idle.
    pub fn update(&mut self, rig: &mut CameraRig) {
        let p = &self.params;
        match self.state {
            FocusState::Idle => {}
            FocusState::Focusing(FocusTarget::Project) => {
                rig.orbit_enabled = false;
                blend_toward(&mut rig.eye, PROJECT_FOCUS.position, p.position_blend);
                blend_toward(&mut self.look_at, PROJECT_FOCUS.look_at, p.look_at_blend);
                rig.target = PROJECT_FOCUS.look_at;
            }
            FocusState::Focusing(FocusTarget::About) => {
                rig.orbit_enabled = false;
                let pose = self.about_stage.pose();
                blend_toward(&mut rig.eye, pose.position, p.position_blend);
                blend_toward(&mut self.look_at, ABOUT_FOCUS_1.look_at, p.about_look_at_blend);
                rig.target = ABOUT_FOCUS_1.look_at;
            }
            FocusState::Exiting(FocusTarget::About) => {
                blend_toward(&mut rig.eye, ABOUT_FOCUS_1.position, p.position_blend);
                blend_toward(&mut self.look_at, INITIAL.look_at, p.look_at_blend);
                rig.target = self.look_at;
            }
            FocusState::Exiting(FocusTarget::Project) => {
                blend_toward(&mut rig.eye, PROJECT_PRE_EXIT.position, p.position_blend);
                blend_toward(&mut self.look_at, INITIAL.look_at, p.look_at_blend);
                rig.target = self.look_at;
            }
        }
    }

    /// Advance the task clock by one frame, apply fired tasks, then blend.
    /// The About stage delay starts here, on the first About frame.
    /// Returns every task that fired so the caller can handle its own kinds.
    pub fn step(&mut self, dt: Duration, tasks: &mut TaskQueue, rig: &mut CameraRig) -> FiredTasks {
        let mut fired = FiredTasks::new();
        tasks.advance(dt, &mut fired);
        for &kind in fired.iter() {
            self.on_task(kind, rig);
        }
        if self.state == FocusState::Focusing(FocusTarget::About) && !self.stage_armed {
            tasks.schedule(TaskKind::StageAdvance, self.params.stage_advance);
            self.stage_armed = true;
        }
        self.update(rig);
        fired
    }
}
