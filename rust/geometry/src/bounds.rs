// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding volumes in f64 precision.
//!
//! A [`BoundingVolume`] is the spatial footprint of a building element or a
//! room as reported by the host document. Containment uses closed intervals
//! on every axis, so a point lying exactly on a face, edge, or corner of the
//! box counts as inside.

use nalgebra::Point3;

/// An axis-aligned box, `min` componentwise <= `max`.
///
/// Well-formedness is the caller's responsibility: constructing a volume
/// with `min > max` on some axis is not detected here and makes the results
/// of [`center`](Self::center) and [`contains`](Self::contains) meaningless.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingVolume {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl BoundingVolume {
    /// Creates a volume from its two extreme corners.
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Builds the smallest volume enclosing all given points.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3<f64>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut volume = Self::new(first, first);
        for p in iter {
            volume.expand(&p);
        }
        Some(volume)
    }

    /// Expands the volume to include a point.
    #[inline]
    pub fn expand(&mut self, p: &Point3<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Componentwise midpoint of `min` and `max`.
    #[inline]
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Whether `p` lies within the box, boundary included on every axis.
    #[inline]
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn center_is_componentwise_midpoint() {
        let volume = BoundingVolume::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 4.0));
        let c = volume.center();
        assert_relative_eq!(c.x, 5.0);
        assert_relative_eq!(c.y, 5.0);
        assert_relative_eq!(c.z, 2.0);
    }

    #[test]
    fn contains_interior_point() {
        let volume = BoundingVolume::new(Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 3.0));
        assert!(volume.contains(&Point3::new(0.0, 0.5, 1.5)));
        assert!(!volume.contains(&Point3::new(0.0, 0.5, 3.5)));
        assert!(!volume.contains(&Point3::new(2.0, 0.0, 1.0)));
    }

    #[test]
    fn contains_is_inclusive_on_the_boundary() {
        let volume = BoundingVolume::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 4.0));
        // faces
        assert!(volume.contains(&Point3::new(0.0, 5.0, 2.0)));
        assert!(volume.contains(&Point3::new(10.0, 5.0, 2.0)));
        assert!(volume.contains(&Point3::new(5.0, 5.0, 4.0)));
        // corners
        assert!(volume.contains(&Point3::new(0.0, 0.0, 0.0)));
        assert!(volume.contains(&Point3::new(10.0, 10.0, 4.0)));
    }

    #[test]
    fn from_points_encloses_all_inputs() {
        let points = [
            Point3::new(3.0, -2.0, 1.0),
            Point3::new(-1.0, 4.0, 0.5),
            Point3::new(2.0, 2.0, 2.0),
        ];
        let volume = BoundingVolume::from_points(points).unwrap();
        assert_eq!(volume.min, Point3::new(-1.0, -2.0, 0.5));
        assert_eq!(volume.max, Point3::new(3.0, 4.0, 2.0));
        for p in &points {
            assert!(volume.contains(p));
        }
    }

    #[test]
    fn from_points_empty_is_none() {
        assert!(BoundingVolume::from_points(std::iter::empty()).is_none());
    }
}
