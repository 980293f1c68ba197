// Host-side tests for the frame-clocked task queue.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod timers {
    include!("../src/core/timers.rs");
}

use std::time::Duration;
use timers::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn task_fires_on_first_frame_reaching_deadline() {
    let mut q = TaskQueue::new();
    q.schedule(TaskKind::ProjectExit, ms(500));
    let mut fired = FiredTasks::new();

    q.advance(ms(499), &mut fired);
    assert!(fired.is_empty());
    assert_eq!(q.remaining(TaskKind::ProjectExit), Some(ms(1)));

    q.advance(ms(1), &mut fired);
    assert_eq!(fired.as_slice(), &[TaskKind::ProjectExit]);
    assert!(!q.is_pending(TaskKind::ProjectExit));
    assert_eq!(q.pending_len(), 0);
}

#[test]
fn scheduling_same_kind_replaces_pending_task() {
    let mut q = TaskQueue::new();
    q.schedule(TaskKind::StageAdvance, ms(100));
    q.schedule(TaskKind::StageAdvance, ms(300));
    assert_eq!(q.pending_len(), 1);

    let mut fired = FiredTasks::new();
    q.advance(ms(200), &mut fired);
    assert!(fired.is_empty());
    q.advance(ms(100), &mut fired);
    assert_eq!(fired.len(), 1);
}

#[test]
fn cancel_reports_whether_task_was_pending() {
    let mut q = TaskQueue::new();
    assert!(!q.cancel(TaskKind::AboutExit));
    q.schedule(TaskKind::AboutExit, ms(1500));
    assert!(q.cancel(TaskKind::AboutExit));
    assert!(q.remaining(TaskKind::AboutExit).is_none());

    let mut fired = FiredTasks::new();
    q.advance(ms(2000), &mut fired);
    assert!(fired.is_empty());
}

#[test]
fn due_tasks_fire_earliest_first() {
    let mut q = TaskQueue::new();
    q.schedule(TaskKind::IntroEnd, ms(300));
    q.schedule(TaskKind::StageAdvance, ms(100));
    q.schedule(TaskKind::ProjectExit, ms(200));

    let mut fired = FiredTasks::new();
    q.advance(ms(1000), &mut fired);
    assert_eq!(
        fired.as_slice(),
        &[TaskKind::StageAdvance, TaskKind::ProjectExit, TaskKind::IntroEnd]
    );
}

#[test]
fn delays_are_measured_from_schedule_time() {
    let mut q = TaskQueue::new();
    let mut fired = FiredTasks::new();
    q.advance(ms(1000), &mut fired);
    q.schedule(TaskKind::AboutExit, ms(1500));
    assert_eq!(q.now(), ms(1000));

    q.advance(ms(1499), &mut fired);
    assert!(fired.is_empty());
    q.advance(ms(1), &mut fired);
    assert_eq!(fired.as_slice(), &[TaskKind::AboutExit]);
}

#[test]
fn remaining_saturates_once_due() {
    let mut q = TaskQueue::new();
    q.schedule(TaskKind::IntroEnd, ms(0));
    assert_eq!(q.remaining(TaskKind::IntroEnd), Some(Duration::ZERO));
    let mut fired = FiredTasks::new();
    q.advance(Duration::ZERO, &mut fired);
    assert_eq!(fired.as_slice(), &[TaskKind::IntroEnd]);
}
