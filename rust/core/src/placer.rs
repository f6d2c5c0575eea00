// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Offset transfer between regions.
//!
//! A placement's position within its room is captured as the horizontal
//! offset of its anchor from the room's nominal center. Reapplying the same
//! offset at another room's nominal center reproduces the placement there.
//! The vertical coordinate never transfers: each placement sits at its own
//! room's reference elevation.

use nalgebra::Point3;
use roomdup_geometry::{horizontal_offset, Offset2D};

use crate::region::{Region, TemplateId};

/// An intent to create one instance of a template at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementRequest {
    /// What to place.
    pub template: TemplateId,
    /// Where to place it.
    pub target_point: Point3<f64>,
}

/// Horizontal offset of `anchor` from the source region's nominal center.
#[inline]
pub fn anchor_offset(anchor: &Point3<f64>, source: &Region) -> Offset2D {
    horizontal_offset(anchor, &source.nominal_center())
}

/// The point at which a placement with the given offset lands in `target`.
///
/// The z coordinate is exactly `target.reference_elevation`; nothing of the
/// source's elevation survives the transfer.
#[inline]
pub fn resolve_target_point(offset: &Offset2D, target: &Region) -> Point3<f64> {
    offset.apply_at(&target.nominal_center())
}

/// Builds one [`PlacementRequest`] per target region, in input order.
///
/// Targets are taken as given: duplicates are not collapsed, and a target
/// equal to the source region is not filtered out: duplicating a group
/// onto its own room is permitted.
pub fn build_requests(
    template: TemplateId,
    offset: &Offset2D,
    targets: &[Region],
) -> Vec<PlacementRequest> {
    targets
        .iter()
        .map(|target| PlacementRequest {
            template,
            target_point: resolve_target_point(offset, target),
        })
        .collect()
}
