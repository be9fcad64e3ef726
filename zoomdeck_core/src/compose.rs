// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform composition.
//!
//! A [`Placement`] (translation, rotation in degrees, uniform scale) is turned
//! into an ordered [`TransformDescriptor`]. Descriptors are plain data: they
//! render to CSS transform text through [`Display`](core::fmt::Display) and to
//! a [`Transform3d`] through [`TransformDescriptor::to_matrix`].
//!
//! Two pipelines exist:
//!
//! - **Forward** ([`compose`]): places a step's own element. Centre anchor,
//!   translate, rotate, scale.
//! - **Camera** ([`compose_camera`]): splits the inverse of a placement across
//!   the wrapper (scale only) and the canvas (reversed rotation, then
//!   translation). With a zero-size anchor, the camera matrix times the
//!   forward matrix is the identity. A non-empty anchor sits inside the
//!   rotation, so the product is only the identity when rotation is zero.

use alloc::vec::Vec;
use core::f64::consts::PI;
use core::fmt;

use kurbo::Size;

use crate::transform::Transform3d;

/// A 3-component vector in length units (translation) or degrees (rotation).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Where something sits in the scene: translation, rotation (degrees) and
/// uniform scale.
///
/// Used both for a step's resolved layout and for the camera's current
/// target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Translation in length units.
    pub translation: Vec3,
    /// Rotation about X, Y and Z in degrees.
    pub rotation: Vec3,
    /// Uniform scale. Always positive.
    pub scale: f64,
}

impl Placement {
    /// The neutral placement: no translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
    };

    /// Returns the camera target that brings `self` to the origin at unit
    /// scale: every translation and rotation axis negated, scale inverted.
    #[inline]
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            translation: -self.translation,
            rotation: -self.rotation,
            scale: 1.0 / self.scale,
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Order in which the three axis rotations are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RotationOrder {
    /// X, then Y, then Z.
    #[default]
    Forward,
    /// Z, then Y, then X. Undoes a [`Forward`](Self::Forward) rotation.
    Reversed,
}

/// A principal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

/// One primitive in a transform pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Shift by half the element's own size so its centre sits on the origin.
    AnchorCenter,
    /// Translate by the given vector.
    Translate(Vec3),
    /// Rotate about an axis by the given number of degrees.
    Rotate(Axis, f64),
    /// Uniform scale.
    Scale(f64),
}

impl TransformOp {
    /// Returns the matrix for this op. `anchor` is the element size that
    /// [`AnchorCenter`](Self::AnchorCenter) resolves against.
    #[must_use]
    pub fn to_matrix(self, anchor: Size) -> Transform3d {
        match self {
            Self::AnchorCenter => {
                Transform3d::from_translation(-anchor.width / 2.0, -anchor.height / 2.0, 0.0)
            }
            Self::Translate(t) => Transform3d::from_translation(t.x, t.y, t.z),
            Self::Rotate(axis, degrees) => {
                let radians = degrees * PI / 180.0;
                match axis {
                    Axis::X => Transform3d::from_rotation_x(radians),
                    Axis::Y => Transform3d::from_rotation_y(radians),
                    Axis::Z => Transform3d::from_rotation_z(radians),
                }
            }
            Self::Scale(s) => Transform3d::from_scale(s),
        }
    }
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnchorCenter => f.write_str("translate(-50%, -50%)"),
            Self::Translate(t) => write!(f, "translate3d({}px, {}px, {}px)", t.x, t.y, t.z),
            Self::Rotate(Axis::X, d) => write!(f, "rotateX({d}deg)"),
            Self::Rotate(Axis::Y, d) => write!(f, "rotateY({d}deg)"),
            Self::Rotate(Axis::Z, d) => write!(f, "rotateZ({d}deg)"),
            Self::Scale(s) => write!(f, "scale({s})"),
        }
    }
}

/// An ordered list of [`TransformOp`]s, applied left to right in the CSS
/// sense (the rightmost op acts on the element first).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformDescriptor {
    ops: Vec<TransformOp>,
}

impl TransformDescriptor {
    /// Creates an empty (identity) descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the centre-anchor correction.
    #[must_use]
    pub fn anchor_center(mut self) -> Self {
        self.ops.push(TransformOp::AnchorCenter);
        self
    }

    /// Appends a translation.
    #[must_use]
    pub fn translate(mut self, t: Vec3) -> Self {
        self.ops.push(TransformOp::Translate(t));
        self
    }

    /// Appends the three axis rotations in the given order.
    #[must_use]
    pub fn rotate(mut self, r: Vec3, order: RotationOrder) -> Self {
        let x = TransformOp::Rotate(Axis::X, r.x);
        let y = TransformOp::Rotate(Axis::Y, r.y);
        let z = TransformOp::Rotate(Axis::Z, r.z);
        match order {
            RotationOrder::Forward => self.ops.extend([x, y, z]),
            RotationOrder::Reversed => self.ops.extend([z, y, x]),
        }
        self
    }

    /// Appends a uniform scale.
    #[must_use]
    pub fn scale(mut self, s: f64) -> Self {
        self.ops.push(TransformOp::Scale(s));
        self
    }

    /// Returns the ops in application order.
    #[must_use]
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Multiplies the ops into a single matrix, resolving the centre anchor
    /// against `anchor`.
    #[must_use]
    pub fn to_matrix(&self, anchor: Size) -> Transform3d {
        self.ops
            .iter()
            .fold(Transform3d::IDENTITY, |m, op| m * op.to_matrix(anchor))
    }
}

impl fmt::Display for TransformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Builds the forward transform that places an element at `placement`:
/// centre anchor, translate, rotate in `order`, then scale.
#[must_use]
pub fn compose(placement: &Placement, order: RotationOrder) -> TransformDescriptor {
    TransformDescriptor::new()
        .anchor_center()
        .translate(placement.translation)
        .rotate(placement.rotation, order)
        .scale(placement.scale)
}

/// The two transforms that together move the camera to a target.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    /// Applied to the outer wrapper: the scale component.
    pub wrapper: TransformDescriptor,
    /// Applied to the inner canvas: rotation (reversed order) then
    /// translation.
    pub canvas: TransformDescriptor,
}

impl CameraRig {
    /// Returns `wrapper × canvas` as one matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Transform3d {
        self.wrapper.to_matrix(Size::ZERO) * self.canvas.to_matrix(Size::ZERO)
    }
}

/// Splits a camera `target` (usually [`Placement::inverse`] of a step) into
/// wrapper and canvas transforms.
#[must_use]
pub fn compose_camera(target: &Placement) -> CameraRig {
    CameraRig {
        wrapper: TransformDescriptor::new().scale(target.scale),
        canvas: TransformDescriptor::new()
            .rotate(target.rotation, RotationOrder::Reversed)
            .translate(target.translation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn sample() -> Placement {
        Placement {
            translation: Vec3::new(2000.0, -1000.0, 350.0),
            rotation: Vec3::new(30.0, -45.0, 90.0),
            scale: 4.0,
        }
    }

    #[test]
    fn forward_pipeline_order() {
        let d = compose(&sample(), RotationOrder::Forward);
        assert_eq!(
            d.ops(),
            &[
                TransformOp::AnchorCenter,
                TransformOp::Translate(Vec3::new(2000.0, -1000.0, 350.0)),
                TransformOp::Rotate(Axis::X, 30.0),
                TransformOp::Rotate(Axis::Y, -45.0),
                TransformOp::Rotate(Axis::Z, 90.0),
                TransformOp::Scale(4.0),
            ]
        );
    }

    #[test]
    fn reversed_order_flips_rotations_only() {
        let d = compose(&sample(), RotationOrder::Reversed);
        assert_eq!(d.ops()[2], TransformOp::Rotate(Axis::Z, 90.0));
        assert_eq!(d.ops()[4], TransformOp::Rotate(Axis::X, 30.0));
        assert_eq!(d.ops()[5], TransformOp::Scale(4.0));
    }

    #[test]
    fn css_text() {
        let p = Placement {
            translation: Vec3::new(0.0, 1000.0, 0.0),
            rotation: Vec3::new(0.0, 0.0, 15.5),
            scale: 2.0,
        };
        assert_eq!(
            compose(&p, RotationOrder::Forward).to_string(),
            "translate(-50%, -50%) translate3d(0px, 1000px, 0px) \
             rotateX(0deg) rotateY(0deg) rotateZ(15.5deg) scale(2)"
        );
    }

    #[test]
    fn inverse_negates_and_inverts() {
        let inv = sample().inverse();
        assert_eq!(inv.translation, Vec3::new(-2000.0, 1000.0, -350.0));
        assert_eq!(inv.rotation, Vec3::new(-30.0, 45.0, -90.0));
        assert_eq!(inv.scale, 0.25);
    }

    #[test]
    fn camera_undoes_forward_placement() {
        let p = sample();
        let forward = compose(&p, RotationOrder::Forward);
        let rig = compose_camera(&p.inverse());

        // With a zero-size anchor the centre shift vanishes and only the
        // placement remains, which the camera cancels exactly.
        let combined = rig.to_matrix() * forward.to_matrix(Size::ZERO);
        assert!(
            combined.approx_eq(&Transform3d::IDENTITY),
            "camera × forward should be the identity, got {combined:?}"
        );
    }

    #[test]
    fn camera_rig_split() {
        let rig = compose_camera(&sample().inverse());
        assert_eq!(rig.wrapper.to_string(), "scale(0.25)");
        assert_eq!(
            rig.canvas.to_string(),
            "rotateZ(-90deg) rotateY(45deg) rotateX(-30deg) translate3d(-2000px, 1000px, -350px)"
        );
    }

    #[test]
    fn empty_descriptor_is_identity() {
        let d = TransformDescriptor::new();
        assert_eq!(d.to_string(), "");
        assert_eq!(d.to_matrix(Size::new(10.0, 10.0)), Transform3d::IDENTITY);
    }
}
