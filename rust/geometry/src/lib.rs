// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Roomdup Geometry
//!
//! Pure geometric building blocks for room-relative placement: axis-aligned
//! bounding volumes, point containment, and horizontal (XY-plane) offsets.
//!
//! This crate is stateless and host-agnostic. How bounding volumes are
//! obtained for real building elements is the embedding application's
//! concern; everything here is a pure function of its inputs.

pub mod bounds;
pub mod offset;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector2, Vector3};

pub use bounds::BoundingVolume;
pub use offset::{horizontal_offset, Offset2D};
