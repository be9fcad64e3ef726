// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes the events of a [`RecorderSink`](super::recorder::RecorderSink)
//! as a JSON array. Each element has a `seq` number, the event `name` (as in
//! [`RecordedEvent::name`]) and the event's fields. Steps appear as their
//! document-order index, or `null` when absent.

use std::io::{self, Write};

use serde_json::{Value, json};

use zoomdeck_core::step::StepId;
use zoomdeck_core::trace::RejectReason;

use crate::recorder::RecordedEvent;

/// Converts one event to a JSON object.
#[must_use]
pub fn to_value(seq: usize, event: &RecordedEvent) -> Value {
    let name = event.name();
    match event {
        RecordedEvent::Layout(e) => json!({
            "seq": seq,
            "name": name,
            "steps": e.steps,
            "root_height": e.root_height,
        }),
        RecordedEvent::StepPlaced(e) => json!({
            "seq": seq,
            "name": name,
            "step": e.step.index(),
            "grid": [e.grid_x, e.grid_y],
            "scale": e.scale,
        }),
        RecordedEvent::Select(e) => json!({
            "seq": seq,
            "name": name,
            "from": step(e.from),
            "to": e.to.index(),
            "zooming_in": e.zooming_in,
            "scale": e.scale,
        }),
        RecordedEvent::Reject(e) => json!({
            "seq": seq,
            "name": name,
            "target": step(e.target),
            "reason": match e.reason {
                RejectReason::Unknown => "unknown",
                RejectReason::AlreadyActive => "already_active",
            },
        }),
        RecordedEvent::History(e) => json!({
            "seq": seq,
            "name": name,
            "step": e.step.index(),
            "replaced_pending": e.replaced_pending,
        }),
        RecordedEvent::Fragment(e) => json!({
            "seq": seq,
            "name": name,
            "resolved": step(e.resolved),
            "fell_back": e.fell_back,
        }),
    }
}

fn step(s: Option<StepId>) -> Value {
    s.map_or(Value::Null, |s| s.index().into())
}

/// Writes `events` as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events
        .iter()
        .enumerate()
        .map(|(seq, e)| to_value(seq, e))
        .collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}
