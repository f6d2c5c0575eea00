// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Collaborator contracts at the host boundary.
//!
//! These traits are the core's entire view of the host application. They are
//! synchronous and blocking: prompting the user or querying the document
//! takes as long as it takes, and any timeout policy lives on the host side,
//! surfacing here as [`SelectionError::Cancelled`](crate::error::SelectionError::Cancelled) or a failed query.
//!
//! The capability split matters: a [`TemplateId`] can only come out of
//! [`SelectionProvider::pick_source`] and a [`Region`] only out of region
//! queries, so the core never has to check what kind of element an opaque
//! handle refers to.

use nalgebra::Point3;
use roomdup_geometry::BoundingVolume;

use crate::error::{Result, SelectionResult};
use crate::region::{ElementId, Region, TemplateId};

/// What the user picked as the thing to duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSelection {
    /// The reusable definition instances will be created from.
    pub template: TemplateId,
    /// The placed instance the user picked; its bounding-volume center
    /// serves as the anchor point.
    pub element: ElementId,
}

/// Prompts driven by the host's interactive selection facility.
///
/// Either prompt may return [`SelectionError::Cancelled`](crate::error::SelectionError::Cancelled) when the user
/// backs out; the session treats that as a normal end, not a failure.
pub trait SelectionProvider {
    /// Asks the user to pick the group to duplicate.
    fn pick_source(&mut self) -> SelectionResult<SourceSelection>;

    /// Asks the user to pick the rooms to duplicate into.
    ///
    /// An empty pick is legal and results in nothing being placed.
    fn pick_targets(&mut self) -> SelectionResult<Vec<Region>>;
}

/// Read-only queries against the host document.
pub trait RegionProvider {
    /// All candidate regions, in whatever order the host enumerates them.
    ///
    /// The order is significant: containment lookup returns the first match.
    fn regions(&self) -> Result<Vec<Region>>;

    /// Bounding volume of an arbitrary placed element.
    fn element_bounds(&self, element: ElementId) -> Result<BoundingVolume>;
}

/// Creates element instances inside scoped transactions.
///
/// The provider serializes transactions against the document; the core
/// assumes exclusive access for as long as a handle it holds is alive.
pub trait InstantiationProvider {
    /// The scoped transaction handle type.
    type Txn: PlacementTransaction;

    /// Opens a transaction. `label` names the unit of work in the host's
    /// own undo/journal facility.
    fn begin(&mut self, label: &str) -> Result<Self::Txn>;
}

/// A scoped, all-or-nothing unit of document mutation.
///
/// Placements made through the handle become visible only on
/// [`commit`](Self::commit). Dropping the handle without committing rolls
/// every one of them back. That is the only rollback mechanism, so every
/// early-exit path (error or cancellation) is covered by simply letting the
/// handle go out of scope.
pub trait PlacementTransaction {
    /// Requests one instance of `template` at `point`.
    fn place(&mut self, template: TemplateId, point: &Point3<f64>) -> Result<()>;

    /// Makes all placements in this transaction permanent.
    fn commit(self) -> Result<()>;
}
