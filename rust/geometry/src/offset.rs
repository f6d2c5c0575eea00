// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Horizontal (XY-plane) displacements.
//!
//! Transferring a placement from one room to another deliberately carries
//! only the horizontal part of the displacement: the vertical coordinate is
//! always taken from the room the placement lands in, never from the room it
//! came from. [`Offset2D`] encodes that by construction: it has no z.

use nalgebra::Point3;

/// A displacement in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset2D {
    /// Displacement along X.
    pub dx: f64,
    /// Displacement along Y.
    pub dy: f64,
}

impl Offset2D {
    /// The zero displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Creates an offset from its components.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Applies the offset to a base point, keeping the base's z unchanged.
    #[inline]
    pub fn apply_at(&self, base: &Point3<f64>) -> Point3<f64> {
        Point3::new(base.x + self.dx, base.y + self.dy, base.z)
    }
}

/// Horizontal displacement from `b` to `a`: `(a.x - b.x, a.y - b.y)`.
///
/// The z components of both points are ignored.
#[inline]
pub fn horizontal_offset(a: &Point3<f64>, b: &Point3<f64>) -> Offset2D {
    Offset2D::new(a.x - b.x, a.y - b.y)
}
