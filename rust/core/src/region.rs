// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Regions and opaque host handles.
//!
//! A [`Region`] is a read-only snapshot of a room as reported by the host
//! document at query time. The core never mutates or caches one; every
//! operation works on regions enumerated fresh by the
//! [`RegionProvider`](crate::providers::RegionProvider).
//!
//! Handles are minted by the host and carry no meaning here beyond identity.
//! Which handle refers to a room, a group instance, or a reusable group
//! definition is fixed at the provider boundary by the handle's type; the
//! core performs no category checks of its own.

use nalgebra::Point3;
use roomdup_geometry::BoundingVolume;

/// Opaque handle to a placed element in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub u64);

/// Opaque handle to a reusable group definition ("what to place").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateId(pub u64);

/// Opaque handle to a region (room) in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(pub u64);

/// Read-only snapshot of a room.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Host identity of the room.
    pub id: RegionId,
    /// Axis-aligned spatial footprint of the room.
    pub bounds: BoundingVolume,
    /// Elevation of the room's insertion point: the floor level, which is
    /// generally not the vertical midpoint of `bounds`.
    pub reference_elevation: f64,
    /// Display name, used only in log and error messages.
    pub name: Option<String>,
}

impl Region {
    /// Creates a region snapshot.
    pub fn new(id: RegionId, bounds: BoundingVolume, reference_elevation: f64) -> Self {
        Self {
            id,
            bounds,
            reference_elevation,
            name: None,
        }
    }

    /// Attaches a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The room's nominal center: horizontal midpoint of the bounding
    /// volume, at the room's own reference elevation.
    ///
    /// Offsets within a room are measured from this point rather than from
    /// the geometric midpoint, so that they are anchored to the floor level.
    #[inline]
    pub fn nominal_center(&self) -> Point3<f64> {
        let c = self.bounds.center();
        Point3::new(c.x, c.y, self.reference_elevation)
    }

    /// Whether the room's bounding volume contains `p` (boundary included).
    #[inline]
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        self.bounds.contains(p)
    }
}
