// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout assignment.
//!
//! The traversal walks the outline once and turns nesting into space:
//!
//! - Steps that are direct children of the same section stack downwards from
//!   that section's base cell, one grid row each.
//! - A child section at index `i` gets its base cell at
//!   `(x + i − steps_before, y + steps_before)`, where `steps_before` counts
//!   step siblings that precede it. A nested branch therefore sits beside the
//!   steps that came before it.
//! - The default scale of a section's direct steps is the section's *height*:
//!   `1` without nested sections, otherwise one more than the tallest child
//!   section. Outer levels get larger numbers, so entering a branch reads as
//!   zooming in.
//!
//! Per-step [`Overrides`](crate::outline::Overrides) win field by field.

use alloc::vec::Vec;

use crate::compose::{Placement, RotationOrder, TransformDescriptor, Vec3, compose};
use crate::config::DeckConfig;
use crate::outline::{OutlineNode, Section, Step};

/// A cell in the layout grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl GridPos {
    /// Creates a grid position.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The resolved layout of one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutRecord {
    /// Grid cell computed by the traversal (before overrides).
    pub grid: GridPos,
    /// Height of the level the step sits on; its default scale.
    pub level_height: u32,
    /// Final placement: overrides where given, computed defaults elsewhere.
    pub placement: Placement,
}

impl LayoutRecord {
    /// Resolves a record from a step's overrides and its computed defaults.
    #[must_use]
    pub fn resolve(step: &Step, grid: GridPos, level_height: u32, config: &DeckConfig) -> Self {
        let o = &step.overrides;
        let translation = Vec3::new(
            o.x.unwrap_or(f64::from(grid.x) * config.cell.width),
            o.y.unwrap_or(f64::from(grid.y) * config.cell.height),
            o.z.unwrap_or(0.0),
        );
        let rotation = Vec3::new(
            o.rotate_x.unwrap_or(0.0),
            o.rotate_y.unwrap_or(0.0),
            o.effective_rotate_z().unwrap_or(0.0),
        );
        Self {
            grid,
            level_height,
            placement: Placement {
                translation,
                rotation,
                scale: o.scale.unwrap_or(f64::from(level_height)),
            },
        }
    }

    /// Returns the forward transform that places the step's element.
    #[must_use]
    pub fn transform(&self) -> TransformDescriptor {
        compose(&self.placement, RotationOrder::Forward)
    }
}

/// Lays out every step below `root`.
///
/// Returns one record per step, indexed by document order (the same order
/// as [`Steps`](super::Steps)), together with the root's height.
#[must_use]
pub fn assign(root: &Section, config: &DeckConfig) -> (Vec<LayoutRecord>, u32) {
    let mut out = Vec::new();
    out.resize_with(root.step_count(), || None);
    let height = visit(root, GridPos::default(), 0, config, &mut out);
    // Every slot is written exactly once: `first` advances by each child's
    // step count, and steps write their own slot.
    let records = out.into_iter().flatten().collect();
    (records, height)
}

/// Lays out `section` from base cell `base`. `first` is the document-order
/// index of the section's first step. Returns the section's height.
fn visit(
    section: &Section,
    base: GridPos,
    first: usize,
    config: &DeckConfig,
    out: &mut [Option<LayoutRecord>],
) -> u32 {
    let mut next_index = first;
    let mut steps_before: i32 = 0;
    let mut tallest: Option<u32> = None;
    let mut direct_steps = Vec::new();

    for (i, child) in section.children.iter().enumerate() {
        match child {
            OutlineNode::Section(nested) => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "outlines are author-sized; child counts fit in i32"
                )]
                let cell = GridPos::new(base.x + i as i32 - steps_before, base.y + steps_before);
                let h = visit(nested, cell, next_index, config, out);
                tallest = Some(tallest.map_or(h, |t| t.max(h)));
                next_index += nested.step_count();
            }
            OutlineNode::Step(step) => {
                direct_steps.push((next_index, step));
                steps_before += 1;
                next_index += 1;
            }
        }
    }

    let height = tallest.map_or(1, |t| t + 1);
    let mut cursor = base;
    for (index, step) in direct_steps {
        out[index] = Some(LayoutRecord::resolve(step, cursor, height, config));
        cursor.y += 1;
    }
    height
}
