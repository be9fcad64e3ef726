// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-phase camera moves.
//!
//! The camera is two nested elements. The outer *wrapper* carries the scale,
//! the inner *canvas* carries rotation and translation. Their transitions are
//! staggered so the scene never passes through frames that are rotated but
//! not yet scaled:
//!
//! ```text
//!   zooming in  (target scale ≥ current):  canvas ──► then wrapper
//!   zooming out (target scale <  current):  wrapper ──► then canvas
//! ```
//!
//! This module only computes the delays. Animating them is up to the
//! [`Presenter`](crate::backend::Presenter).

use core::time::Duration;

use crate::compose::{Placement, TransformDescriptor, compose_camera};
use crate::config::DeckConfig;

/// A transform plus the delay before its transition starts.
#[derive(Clone, Debug, PartialEq)]
pub struct PhasedTransform {
    /// The transform to transition to.
    pub transform: TransformDescriptor,
    /// How long to wait before starting the transition.
    pub delay: Duration,
}

/// Everything a presenter needs to move the camera to a new target.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraUpdate {
    /// The camera placement being moved to: the inverse of the step's.
    pub target: Placement,
    /// `true` when the target scale is at least the current scale.
    pub zooming_in: bool,
    /// Scale phase, applied to the wrapper.
    pub wrapper: PhasedTransform,
    /// Perspective for the wrapper, in px, proportional to the step's scale.
    pub wrapper_perspective: f64,
    /// Rotation and translation phase, applied to the canvas.
    pub canvas: PhasedTransform,
    /// Length of each transition.
    pub duration: Duration,
}

impl CameraUpdate {
    /// Plans the move from the camera placement `current` to `target`.
    #[must_use]
    pub fn plan(current: &Placement, target: &Placement, config: &DeckConfig) -> Self {
        let zooming_in = target.scale >= current.scale;
        let (wrapper_delay, canvas_delay) = if zooming_in {
            (config.phase_delay, Duration::ZERO)
        } else {
            (Duration::ZERO, config.phase_delay)
        };
        let rig = compose_camera(target);
        Self {
            target: *target,
            zooming_in,
            wrapper: PhasedTransform {
                transform: rig.wrapper,
                delay: wrapper_delay,
            },
            wrapper_perspective: config.perspective / target.scale,
            canvas: PhasedTransform {
                transform: rig.canvas,
                delay: canvas_delay,
            },
            duration: config.transition_duration,
        }
    }
}
