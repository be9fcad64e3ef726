// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout and navigation core for zooming outline presentations.
//!
//! `zoomdeck_core` turns a nested outline of *steps* grouped into *sections*
//! into positions in a 3D scene, and drives a two-element camera between
//! them. It is `no_std` compatible (with `alloc`) and knows nothing about the
//! host document; backends read the outline in and apply the results.
//!
//! # Architecture
//!
//! ```text
//!   outline::Section (from the host)
//!       │
//!       ▼
//!   StepRegistry::build ──► layout::assign ──► LayoutRecord per step
//!                                                   │
//!                                                   ▼
//!                                        Presenter::place (once)
//!
//!   input (key / link / fragment)
//!       │
//!       ▼
//!   Deck::select ──► CameraUpdate ──► Transition ──► Presenter::apply
//!       │
//!       ▼
//!   HistorySync ──► DeferredQueue (fragment rewrite, debounced)
//! ```
//!
//! **[`outline`]**: The input tree: sections, steps and their optional
//! placement overrides.
//!
//! **[`step`]**: Document-order traversal, the layout assignment that maps
//! nesting to grid cells and scale, and the [`StepRegistry`](step::StepRegistry).
//!
//! **[`transform`]** and **[`compose`]**: A column-major 4×4 transform and
//! the descriptors that build forward (step) and inverse (camera) transforms,
//! rendered as matrices or CSS text.
//!
//! **[`camera`]**: Splits a camera move into a scale phase and a
//! rotate/translate phase with staggered delays.
//!
//! **[`deck`]**: The navigation state machine.
//!
//! **[`history`]**: Debounced navigation-fragment sync over a cancellable
//! [`DeferredQueue`](history::DeferredQueue).
//!
//! **[`input`]**: Key mapping.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait that host
//! backends implement.
//!
//! **[`config`]**: [`DeckConfig`](config::DeckConfig).
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod backend;
pub mod camera;
pub mod compose;
pub mod config;
pub mod deck;
pub mod history;
pub mod input;
pub mod outline;
pub mod step;
pub mod trace;
pub mod transform;
