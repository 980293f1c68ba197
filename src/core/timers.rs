use smallvec::SmallVec;
use std::time::Duration;

/// Purpose of a scheduled one-shot task. At most one task per kind is pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Move About focus from stage 1 to stage 2.
    StageAdvance,
    /// Finish the About exit blend and hand the camera back to the orbit rig.
    AboutExit,
    /// Finish the Project exit blend and hand the camera back to the orbit rig.
    ProjectExit,
    /// End of the post-load intro blend.
    IntroEnd,
}

#[derive(Clone, Copy, Debug)]
struct ScheduledTask {
    kind: TaskKind,
    due: Duration,
}

pub type FiredTasks = SmallVec<[TaskKind; 4]>;

/// Cancellable one-shot tasks clocked by rendered frames.
///
/// The clock only moves in [`TaskQueue::advance`], so a task due at `t` fires
/// on the first frame whose clock reaches `t`.
#[derive(Clone, Debug, Default)]
pub struct TaskQueue {
    now: Duration,
    pending: SmallVec<[ScheduledTask; 4]>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current frame clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `kind` to fire `delay` from now, replacing any pending task of
    /// the same kind.
    pub fn schedule(&mut self, kind: TaskKind, delay: Duration) {
        self.cancel(kind);
        self.pending.push(ScheduledTask {
            kind,
            due: self.now + delay,
        });
    }

    /// Drop the pending task of this kind. Returns whether one was pending.
    pub fn cancel(&mut self, kind: TaskKind) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.kind != kind);
        self.pending.len() != before
    }

    pub fn is_pending(&self, kind: TaskKind) -> bool {
        self.pending.iter().any(|t| t.kind == kind)
    }

    /// Time left before `kind` fires, if pending.
    pub fn remaining(&self, kind: TaskKind) -> Option<Duration> {
        self.pending
            .iter()
            .find(|t| t.kind == kind)
            .map(|t| t.due.saturating_sub(self.now))
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward by `dt` and collect every task that came due,
    /// earliest deadline first.
    pub fn advance(&mut self, dt: Duration, fired: &mut FiredTasks) {
        self.now += dt;
        let now = self.now;
        let mut due: SmallVec<[ScheduledTask; 4]> =
            self.pending.iter().copied().filter(|t| t.due <= now).collect();
        if due.is_empty() {
            return;
        }
        due.sort_by_key(|t| t.due);
        self.pending.retain(|t| t.due > now);
        fired.extend(due.into_iter().map(|t| t.kind));
    }
}
