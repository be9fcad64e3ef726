// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for layout and navigation.
//!
//! [`TraceSink`] has one method per event, each defaulting to a no-op, so a
//! sink only implements what it cares about. A [`Deck`](crate::deck::Deck)
//! owns at most one boxed sink and reaches it through [`Tracer`].
//!
//! When the `trace` feature is **off**, every `Tracer` method compiles to
//! nothing. When **on**, each method performs a single `Option` branch before
//! dispatching.

use crate::step::StepId;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once the layout traversal has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutEvent {
    /// Number of registered steps.
    pub steps: u32,
    /// Height of the outline root.
    pub root_height: u32,
}

/// Emitted for each step after layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepPlacedEvent {
    /// The step.
    pub step: StepId,
    /// Grid column.
    pub grid_x: i32,
    /// Grid row.
    pub grid_y: i32,
    /// Resolved scale.
    pub scale: f64,
}

/// Emitted for each successful selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectEvent {
    /// Previously active step.
    pub from: Option<StepId>,
    /// Newly active step.
    pub to: StepId,
    /// Whether the camera is zooming in (target scale ≥ current scale).
    pub zooming_in: bool,
    /// The new camera scale.
    pub scale: f64,
}

/// Why a selection did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The target is missing or has no layout record.
    Unknown,
    /// The target is already active.
    AlreadyActive,
}

/// Emitted for each selection that was a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RejectEvent {
    /// The requested target, if there was one.
    pub target: Option<StepId>,
    /// Why nothing happened.
    pub reason: RejectReason,
}

/// Emitted when a fragment rewrite is scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEvent {
    /// The step the fragment will point at.
    pub step: StepId,
    /// Whether an outstanding rewrite was cancelled.
    pub replaced_pending: bool,
}

/// Emitted when a navigation fragment is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FragmentEvent {
    /// The step it resolved to (after fallback).
    pub resolved: Option<StepId>,
    /// Whether the fragment did not name a step and the first step was used.
    pub fell_back: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a deck.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called once the layout is complete.
    fn on_layout(&mut self, e: &LayoutEvent) {
        _ = e;
    }

    /// Called for each laid-out step.
    fn on_step_placed(&mut self, e: &StepPlacedEvent) {
        _ = e;
    }

    /// Called after a successful selection.
    fn on_select(&mut self, e: &SelectEvent) {
        _ = e;
    }

    /// Called when a selection was a no-op.
    fn on_select_rejected(&mut self, e: &RejectEvent) {
        _ = e;
    }

    /// Called when a fragment rewrite is scheduled.
    fn on_history_scheduled(&mut self, e: &HistoryEvent) {
        _ = e;
    }

    /// Called when a fragment is resolved.
    fn on_fragment_resolved(&mut self, e: &FragmentEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`LayoutEvent`].
    #[inline]
    pub fn layout(&mut self, e: &LayoutEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StepPlacedEvent`].
    #[inline]
    pub fn step_placed(&mut self, e: &StepPlacedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_step_placed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SelectEvent`].
    #[inline]
    pub fn select(&mut self, e: &SelectEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_select(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RejectEvent`].
    #[inline]
    pub fn select_rejected(&mut self, e: &RejectEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_select_rejected(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`HistoryEvent`].
    #[inline]
    pub fn history_scheduled(&mut self, e: &HistoryEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_history_scheduled(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FragmentEvent`].
    #[inline]
    pub fn fragment_resolved(&mut self, e: &FragmentEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_fragment_resolved(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
