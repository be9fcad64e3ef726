// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step registry and layout.
//!
//! Building a [`StepRegistry`] from an outline does two things, once:
//!
//! - **Registration**: every step, in document order, gets a [`StepId`]
//!   handle and a non-empty string identifier (authored or `step-N`).
//! - **Layout**: the traversal in [`layout`] assigns each step a
//!   [`LayoutRecord`]: grid position, resolved placement and default scale
//!   derived from nesting depth.
//!
//! Records are immutable afterwards. The registry is the single owner of step
//! data; everything else refers to steps by [`StepId`].

mod id;
pub mod layout;
mod registry;
mod traverse;

pub use id::StepId;
pub use layout::{GridPos, LayoutRecord};
pub use registry::StepRegistry;
pub use traverse::Steps;
