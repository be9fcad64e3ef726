// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Steps are
//! shown by document-order index.

use std::io::Write;

use zoomdeck_core::step::StepId;
use zoomdeck_core::trace::{
    FragmentEvent, HistoryEvent, LayoutEvent, RejectEvent, RejectReason, SelectEvent,
    StepPlacedEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its destination.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn step(s: Option<StepId>) -> String {
    s.map_or_else(|| "-".into(), |s| s.index().to_string())
}

fn reason_name(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::Unknown => "unknown",
        RejectReason::AlreadyActive => "already-active",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_layout(&mut self, e: &LayoutEvent) {
        let _ = writeln!(
            self.writer,
            "[layout] steps={} root_height={}",
            e.steps, e.root_height,
        );
    }

    fn on_step_placed(&mut self, e: &StepPlacedEvent) {
        let _ = writeln!(
            self.writer,
            "[place] step={} grid=({}, {}) scale={}",
            e.step.index(),
            e.grid_x,
            e.grid_y,
            e.scale,
        );
    }

    fn on_select(&mut self, e: &SelectEvent) {
        let zoom = if e.zooming_in { "in" } else { "out" };
        let _ = writeln!(
            self.writer,
            "[select] {} -> {} zoom={zoom} camera_scale={:.3}",
            step(e.from),
            e.to.index(),
            e.scale,
        );
    }

    fn on_select_rejected(&mut self, e: &RejectEvent) {
        let _ = writeln!(
            self.writer,
            "[reject] target={} reason={}",
            step(e.target),
            reason_name(e.reason),
        );
    }

    fn on_history_scheduled(&mut self, e: &HistoryEvent) {
        let _ = writeln!(
            self.writer,
            "[history] step={} replaced={}",
            e.step.index(),
            e.replaced_pending,
        );
    }

    fn on_fragment_resolved(&mut self, e: &FragmentEvent) {
        let how = if e.fell_back { "fallback" } else { "named" };
        let _ = writeln!(
            self.writer,
            "[fragment] resolved={} ({how})",
            step(e.resolved),
        );
    }
}
