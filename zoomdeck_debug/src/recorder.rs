// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps a copy of every event,
//! in arrival order, as a [`RecordedEvent`].

use zoomdeck_core::trace::{
    FragmentEvent, HistoryEvent, LayoutEvent, RejectEvent, SelectEvent, StepPlacedEvent,
    TraceSink,
};

/// One recorded event.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_layout`].
    Layout(LayoutEvent),
    /// See [`TraceSink::on_step_placed`].
    StepPlaced(StepPlacedEvent),
    /// See [`TraceSink::on_select`].
    Select(SelectEvent),
    /// See [`TraceSink::on_select_rejected`].
    Reject(RejectEvent),
    /// See [`TraceSink::on_history_scheduled`].
    History(HistoryEvent),
    /// See [`TraceSink::on_fragment_resolved`].
    Fragment(FragmentEvent),
}

impl RecordedEvent {
    /// Short lowercase name of the event kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Layout(_) => "layout",
            Self::StepPlaced(_) => "place",
            Self::Select(_) => "select",
            Self::Reject(_) => "reject",
            Self::History(_) => "history",
            Self::Fragment(_) => "fragment",
        }
    }
}

/// A [`TraceSink`] that stores events in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_layout(&mut self, e: &LayoutEvent) {
        self.events.push(RecordedEvent::Layout(*e));
    }

    fn on_step_placed(&mut self, e: &StepPlacedEvent) {
        self.events.push(RecordedEvent::StepPlaced(*e));
    }

    fn on_select(&mut self, e: &SelectEvent) {
        self.events.push(RecordedEvent::Select(*e));
    }

    fn on_select_rejected(&mut self, e: &RejectEvent) {
        self.events.push(RecordedEvent::Reject(*e));
    }

    fn on_history_scheduled(&mut self, e: &HistoryEvent) {
        self.events.push(RecordedEvent::History(*e));
    }

    fn on_fragment_resolved(&mut self, e: &FragmentEvent) {
        self.events.push(RecordedEvent::Fragment(*e));
    }
}
