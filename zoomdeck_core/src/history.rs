// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation-fragment sync.
//!
//! After each selection the fragment is rewritten to `#/<step-id>`, but only
//! once the camera animation has finished. Rewriting it earlier would let the
//! host react (e.g. by scrolling) mid-flight. [`HistorySync`] debounces the
//! rewrite through a [`DeferredQueue`]: each new selection cancels the
//! pending rewrite and schedules a fresh one.
//!
//! Reading accepts both the canonical `#/<id>` form and the bare `#<id>` form.
//! Hosts report fragments percent-encoded, so identifiers are decoded before
//! lookup.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use percent_encoding::percent_decode_str;

/// A fragment rewrite waiting to happen.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FragmentUpdate {
    /// The full fragment to set, including the leading `#`.
    pub fragment: String,
}

impl FragmentUpdate {
    /// Creates the canonical update for a step identifier.
    #[must_use]
    pub fn for_step(id: &str) -> Self {
        Self {
            fragment: fragment_for(id),
        }
    }
}

/// Returns the canonical fragment for a step: `#/<id>`.
#[must_use]
pub fn fragment_for(id: &str) -> String {
    format!("#/{id}")
}

/// Extracts the step identifier from a fragment.
///
/// Strips one leading `#` and then one leading `/`, so `#/intro`, `#intro`,
/// `/intro` and `intro` all yield `intro`. Percent escapes are decoded
/// (`#/caf%C3%A9` yields `café`); invalid UTF-8 is replaced lossily.
#[must_use]
pub fn step_id_from_fragment(fragment: &str) -> Cow<'_, str> {
    let rest = fragment.strip_prefix('#').unwrap_or(fragment);
    let raw = rest.strip_prefix('/').unwrap_or(rest);
    percent_decode_str(raw).decode_utf8_lossy()
}

/// A cancellable source of delayed callbacks.
///
/// Implemented by the host: a browser backend wraps `setTimeout`, tests use
/// [`ManualQueue`].
pub trait DeferredQueue {
    /// Identifies one scheduled task.
    type Handle: Copy + Eq + fmt::Debug;

    /// Runs `update` after `delay` unless cancelled first.
    fn schedule(&mut self, delay: Duration, update: FragmentUpdate) -> Self::Handle;

    /// Cancels a scheduled task. Cancelling a task that already ran, or was
    /// already cancelled, does nothing.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Debounces fragment rewrites: at most one is outstanding at a time.
#[derive(Debug)]
pub struct HistorySync<H> {
    delay: Duration,
    pending: Option<H>,
}

impl<H: Copy + Eq + fmt::Debug> HistorySync<H> {
    /// Creates a sync that waits `delay` before rewriting.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The most recently scheduled task, if any.
    ///
    /// The handle stays set after the task runs; cancelling it then is a
    /// no-op.
    #[must_use]
    pub fn pending(&self) -> Option<H> {
        self.pending
    }

    /// Cancels any outstanding rewrite and schedules one for `step_id`.
    ///
    /// Returns `true` if a previous rewrite was replaced.
    pub fn schedule<Q>(&mut self, queue: &mut Q, step_id: &str) -> bool
    where
        Q: DeferredQueue<Handle = H>,
    {
        let replaced = match self.pending.take() {
            Some(h) => {
                queue.cancel(h);
                true
            }
            None => false,
        };
        self.pending = Some(queue.schedule(self.delay, FragmentUpdate::for_step(step_id)));
        replaced
    }
}

/// Handle returned by [`ManualQueue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

/// A task held by [`ManualQueue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    /// The task's handle.
    pub id: TaskId,
    /// Virtual time at which it runs.
    pub due: Duration,
    /// What it will do.
    pub update: FragmentUpdate,
}

/// A [`DeferredQueue`] driven by a virtual clock.
///
/// Nothing runs until [`advance`](Self::advance) moves the clock past a
/// task's due time; the due updates are then returned to the caller, which
/// applies them. Useful in tests and in native hosts without an event loop.
#[derive(Debug, Default)]
pub struct ManualQueue {
    now: Duration,
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

impl ManualQueue {
    /// Creates an empty queue at virtual time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Tasks that have not run or been cancelled, in scheduling order.
    #[must_use]
    pub fn pending(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    /// Moves the clock forward by `by` and returns every update that became
    /// due, earliest first (ties in scheduling order).
    pub fn advance(&mut self, by: Duration) -> Vec<FragmentUpdate> {
        self.now += by;
        let now = self.now;
        let (mut due, keep): (Vec<_>, Vec<_>) = self.tasks.drain(..).partition(|t| t.due <= now);
        self.tasks = keep;
        due.sort_by_key(|t| (t.due, t.id));
        due.into_iter().map(|t| t.update).collect()
    }
}

impl DeferredQueue for ManualQueue {
    type Handle = TaskId;

    fn schedule(&mut self, delay: Duration, update: FragmentUpdate) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due: self.now + delay,
            update,
        });
        id
    }

    fn cancel(&mut self, handle: TaskId) {
        self.tasks.retain(|t| t.id != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_millis(1000);

    #[test]
    fn fragment_forms() {
        assert_eq!(fragment_for("intro"), "#/intro");
        assert_eq!(step_id_from_fragment("#/intro"), "intro");
        assert_eq!(step_id_from_fragment("#intro"), "intro");
        assert_eq!(step_id_from_fragment("intro"), "intro");
        assert_eq!(step_id_from_fragment("#"), "");
        assert_eq!(step_id_from_fragment(""), "");
        assert_eq!(step_id_from_fragment("#//x"), "/x", "only one slash is stripped");
    }

    #[test]
    fn fragments_are_percent_decoded() {
        assert_eq!(step_id_from_fragment("#/caf%C3%A9"), "café");
        assert_eq!(step_id_from_fragment("#caf%C3%A9"), "café");
        assert_eq!(step_id_from_fragment("#/two%20words"), "two words");
        assert_eq!(step_id_from_fragment("#/café"), "café", "already decoded");
        assert!(
            matches!(step_id_from_fragment("#/plain"), Cow::Borrowed("plain")),
            "plain ids are not copied"
        );
    }

    #[test]
    fn manual_queue_runs_due_tasks_in_order() {
        let mut q = ManualQueue::new();
        q.schedule(Duration::from_millis(300), FragmentUpdate::for_step("late"));
        q.schedule(Duration::from_millis(100), FragmentUpdate::for_step("early"));
        assert!(q.advance(Duration::from_millis(50)).is_empty());
        let fired = q.advance(Duration::from_millis(300));
        assert_eq!(
            fired,
            [FragmentUpdate::for_step("early"), FragmentUpdate::for_step("late")]
        );
        assert!(q.pending().is_empty());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut q = ManualQueue::new();
        let h = q.schedule(SECOND, FragmentUpdate::for_step("a"));
        q.cancel(h);
        q.cancel(h);
        assert!(q.advance(SECOND).is_empty());
    }

    #[test]
    fn sync_keeps_only_latest() {
        let mut q = ManualQueue::new();
        let mut sync = HistorySync::new(SECOND);

        assert!(!sync.schedule(&mut q, "a"), "nothing to replace yet");
        q.advance(Duration::from_millis(400));
        assert!(sync.schedule(&mut q, "b"));

        assert_eq!(q.pending().len(), 1);
        assert!(q.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(
            q.advance(Duration::from_millis(1)),
            [FragmentUpdate::for_step("b")]
        );
    }

    #[test]
    fn sync_after_fire_schedules_again() {
        let mut q = ManualQueue::new();
        let mut sync = HistorySync::new(SECOND);
        sync.schedule(&mut q, "a");
        assert_eq!(q.advance(SECOND).len(), 1);
        // The fired handle is still remembered; replacing it is harmless.
        assert!(sync.schedule(&mut q, "b"));
        assert_eq!(q.advance(SECOND), [FragmentUpdate::for_step("b")]);
    }
}
