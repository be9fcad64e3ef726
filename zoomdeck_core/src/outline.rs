// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The author-facing outline.
//!
//! An outline is a tree of [`OutlineNode`]s. [`Section`]s only group; [`Step`]s
//! are the navigable panes. Child order is document order. Each step may carry
//! [`Overrides`] that pin parts of its placement; anything left unset is
//! computed by the layout traversal.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A node in the outline tree.
#[derive(Clone, Debug, PartialEq)]
pub enum OutlineNode {
    /// A grouping node. Never navigable itself.
    Section(Section),
    /// A navigable pane.
    Step(Step),
}

impl From<Section> for OutlineNode {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}

impl From<Step> for OutlineNode {
    fn from(step: Step) -> Self {
        Self::Step(step)
    }
}

/// A grouping node; also used as the outline root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Section {
    /// Children in document order.
    pub children: Vec<OutlineNode>,
}

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child and returns `self`.
    #[must_use]
    pub fn with(mut self, child: impl Into<OutlineNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a child.
    pub fn push(&mut self, child: impl Into<OutlineNode>) {
        self.children.push(child.into());
    }

    /// Counts the steps in this subtree.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| match c {
                OutlineNode::Section(s) => s.step_count(),
                OutlineNode::Step(_) => 1,
            })
            .sum()
    }
}

/// A navigable pane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Step {
    /// Author-given identifier. Empty or missing ids are assigned when the
    /// registry is built.
    pub id: Option<String>,
    /// Explicit placement overrides.
    pub overrides: Overrides,
}

impl Step {
    /// Creates a step with no id and no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a step with the given id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            overrides: Overrides::default(),
        }
    }

    /// Replaces the overrides and returns `self`.
    #[must_use]
    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Explicit per-step placement values. `None` means "use the computed
/// default".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Overrides {
    /// Absolute X translation.
    pub x: Option<f64>,
    /// Absolute Y translation.
    pub y: Option<f64>,
    /// Absolute Z translation.
    pub z: Option<f64>,
    /// Rotation about X, in degrees.
    pub rotate_x: Option<f64>,
    /// Rotation about Y, in degrees.
    pub rotate_y: Option<f64>,
    /// Rotation about Z, in degrees.
    pub rotate_z: Option<f64>,
    /// Shorthand for [`rotate_z`](Self::rotate_z); used only when that is
    /// unset.
    pub rotate: Option<f64>,
    /// Uniform scale. Positive when set.
    pub scale: Option<f64>,
}

impl Overrides {
    /// Sets one override from its textual attribute form.
    ///
    /// Accepted names are `x`, `y`, `z`, `rotate-x`/`rotateX`,
    /// `rotate-y`/`rotateY`, `rotate-z`/`rotateZ`, `rotate` and `scale`.
    /// Unknown names are ignored. A value that does not parse as a finite
    /// number, or a scale that is not positive, leaves the field untouched and
    /// returns [`MalformedOverride`].
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), MalformedOverride> {
        let slot = match name {
            "x" => &mut self.x,
            "y" => &mut self.y,
            "z" => &mut self.z,
            "rotate-x" | "rotateX" => &mut self.rotate_x,
            "rotate-y" | "rotateY" => &mut self.rotate_y,
            "rotate-z" | "rotateZ" => &mut self.rotate_z,
            "rotate" => &mut self.rotate,
            "scale" => &mut self.scale,
            _ => return Ok(()),
        };
        let parsed = value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .filter(|v| name != "scale" || *v > 0.0);
        match parsed {
            Some(v) => {
                *slot = Some(v);
                Ok(())
            }
            None => Err(MalformedOverride {
                name: name.into(),
                value: value.into(),
            }),
        }
    }

    /// Builds overrides from `(name, value)` pairs, skipping malformed ones.
    #[must_use]
    pub fn from_attributes<'a>(attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut out = Self::default();
        for (name, value) in attrs {
            // Malformed values fall back to layout defaults.
            let _ = out.set_attribute(name, value);
        }
        out
    }

    /// Returns the effective Z rotation: `rotate_z`, else `rotate`.
    #[must_use]
    pub fn effective_rotate_z(&self) -> Option<f64> {
        self.rotate_z.or(self.rotate)
    }
}

/// An override value that could not be used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedOverride {
    /// Attribute name.
    pub name: String,
    /// The rejected text.
    pub value: String,
}

impl fmt::Display for MalformedOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed `{}` override: {:?}", self.name, self.value)
    }
}

impl core::error::Error for MalformedOverride {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_count_is_recursive() {
        let root = Section::new()
            .with(Step::new())
            .with(Section::new().with(Step::new()).with(Section::new().with(Step::new())))
            .with(Step::new());
        assert_eq!(root.step_count(), 4);
        assert_eq!(Section::new().step_count(), 0);
    }

    #[test]
    fn attributes_parse() {
        let o = Overrides::from_attributes([
            ("x", "-1200"),
            ("rotateY", " 45.5 "),
            ("rotate", "10"),
            ("scale", "3"),
            ("data-unrelated", "whatever"),
        ]);
        assert_eq!(o.x, Some(-1200.0));
        assert_eq!(o.rotate_y, Some(45.5));
        assert_eq!(o.effective_rotate_z(), Some(10.0));
        assert_eq!(o.scale, Some(3.0));
        assert_eq!(o.y, None);
    }

    #[test]
    fn explicit_rotate_z_beats_shorthand() {
        let o = Overrides::from_attributes([("rotate", "10"), ("rotate-z", "20")]);
        assert_eq!(o.effective_rotate_z(), Some(20.0));
    }

    #[test]
    fn malformed_values_are_rejected() {
        let mut o = Overrides::default();
        let err = o.set_attribute("x", "12px").unwrap_err();
        assert_eq!(err.name, "x");
        assert_eq!(o.x, None, "field stays at its default");

        assert!(o.set_attribute("y", "NaN").is_err());
        assert!(o.set_attribute("z", "inf").is_err());
        assert!(o.set_attribute("scale", "0").is_err());
        assert!(o.set_attribute("scale", "-2").is_err());
        assert_eq!(o, Overrides::default());
    }

    #[test]
    fn unknown_names_are_ignored() {
        let mut o = Overrides::default();
        assert!(o.set_attribute("colour", "teal").is_ok());
        assert_eq!(o, Overrides::default());
    }
}
