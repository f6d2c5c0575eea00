// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The placement session: one end-to-end duplication run.
//!
//! A session walks one duplication from start to finish: pick the source
//! group, locate the room it sits in, express its position as an offset from
//! that room's center, pick the target rooms, commit the whole batch. Every
//! way that can end collapses into a three-way [`Outcome`]. User
//! cancellation at any prompt ends the
//! session as [`Outcome::Cancelled`] with the document untouched; any
//! collaborator fault ends it as [`Outcome::Failed`] with the batch rolled
//! back. The session is synchronous, runs on the thread owning the document,
//! and keeps no state between runs.

use nalgebra::Point3;

use crate::error::{Error, SelectionError};
use crate::locate::find_containing;
use crate::placer::{anchor_offset, build_requests};
use crate::providers::{
    InstantiationProvider, PlacementTransaction, RegionProvider, SelectionProvider,
};
use crate::region::TemplateId;

/// Terminal result of a session run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every placement in the batch was committed.
    Succeeded,
    /// The user backed out before the commit; nothing was changed.
    Cancelled,
    /// The run failed; the batch was rolled back. Carries the cause.
    Failed(String),
}

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    SourceSelected,
    OffsetComputed,
    TargetsSelected,
    Committing,
    Succeeded,
    Cancelled,
    Failed,
}

/// How a run ended short of success, before mapping to [`Outcome`].
enum Abort {
    Cancelled,
    Failed(String),
}

impl From<Error> for Abort {
    fn from(err: Error) -> Self {
        Abort::Failed(err.to_string())
    }
}

impl From<SelectionError> for Abort {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::Cancelled => Abort::Cancelled,
            SelectionError::Host(message) => Abort::Failed(message),
        }
    }
}

/// One duplication run over a host's selection, region, and instantiation
/// collaborators.
pub struct PlacementSession<'a, S, R, D>
where
    S: SelectionProvider,
    R: RegionProvider,
    D: InstantiationProvider,
{
    selection: &'a mut S,
    regions: &'a R,
    document: &'a mut D,
    state: SessionState,
}

impl<'a, S, R, D> PlacementSession<'a, S, R, D>
where
    S: SelectionProvider,
    R: RegionProvider,
    D: InstantiationProvider,
{
    /// Creates an idle session over the given collaborators.
    pub fn new(selection: &'a mut S, regions: &'a R, document: &'a mut D) -> Self {
        Self {
            selection,
            regions,
            document,
            state: SessionState::Idle,
        }
    }

    /// The session's current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Runs the session to completion. `label` names the transaction in the
    /// host's journal.
    pub fn run(&mut self, label: &str) -> Outcome {
        match self.run_inner(label) {
            Ok(placed) => {
                self.state = SessionState::Succeeded;
                tracing::info!(placed, label, "placement batch committed");
                Outcome::Succeeded
            }
            Err(Abort::Cancelled) => {
                self.state = SessionState::Cancelled;
                tracing::debug!(label, "session cancelled by user");
                Outcome::Cancelled
            }
            Err(Abort::Failed(reason)) => {
                self.state = SessionState::Failed;
                tracing::warn!(label, %reason, "session failed");
                Outcome::Failed(reason)
            }
        }
    }

    fn run_inner(&mut self, label: &str) -> Result<usize, Abort> {
        let source = self.selection.pick_source()?;
        self.state = SessionState::SourceSelected;

        // The anchor is the center of the picked instance's bounding volume.
        let anchor = self.regions.element_bounds(source.element)?.center();
        tracing::debug!(?source, x = anchor.x, y = anchor.y, z = anchor.z, "source selected");

        let known = self.regions.regions()?;
        let source_region = find_containing(&known, &anchor)?;
        let offset = anchor_offset(&anchor, source_region);
        tracing::debug!(
            region = ?source_region.id,
            name = source_region.name.as_deref().unwrap_or(""),
            dx = offset.dx,
            dy = offset.dy,
            "anchor offset computed"
        );
        self.state = SessionState::OffsetComputed;

        let targets = self.selection.pick_targets()?;
        self.state = SessionState::TargetsSelected;

        self.state = SessionState::Committing;
        let requests = build_requests(source.template, &offset, &targets);
        let mut txn = self.document.begin(label)?;
        for request in &requests {
            // Any failure drops `txn` uncommitted, rolling the batch back.
            txn.place(request.template, &request.target_point)?;
        }
        txn.commit()?;
        Ok(requests.len())
    }
}

/// Places one instance of `template` at an explicitly given point, inside
/// its own single-request transaction.
///
/// This is the non-room-relative companion to [`PlacementSession`]: no
/// region lookup and no offset transfer, just an atomic placement at the
/// point the caller already has.
pub fn place_at_point<D>(
    document: &mut D,
    template: TemplateId,
    point: &Point3<f64>,
    label: &str,
) -> crate::error::Result<()>
where
    D: InstantiationProvider,
{
    let mut txn = document.begin(label)?;
    txn.place(template, point)?;
    txn.commit()?;
    tracing::debug!(?template, x = point.x, y = point.y, z = point.z, "placed at point");
    Ok(())
}
