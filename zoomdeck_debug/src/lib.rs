// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, recording, and JSON export for zoomdeck diagnostics.
//!
//! This crate provides [`TraceSink`](zoomdeck_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory recording of every event.
//! - [`json::export`]: writes a recording as a JSON array.
//! - [`combine::Tee`] and [`combine::Shared`]: fan events out to two sinks,
//!   and keep a handle on a sink after handing it to a
//!   [`Deck`](zoomdeck_core::deck::Deck).

pub mod combine;
pub mod json;
pub mod pretty;
pub mod recorder;
