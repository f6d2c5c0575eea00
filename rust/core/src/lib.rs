// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Roomdup Core
//!
//! Duplicates a placed group of building elements from the room it sits in
//! into any number of other rooms, preserving its position relative to the
//! room center.
//!
//! The core is a pure algorithm over snapshots the host hands it:
//!
//! - **Region lookup**: find which room an anchor point belongs to
//!   ([`locate::find_containing`]).
//! - **Offset transfer**: express the anchor as a horizontal offset from the
//!   source room's nominal center, then reapply that offset at each target
//!   room's center ([`placer`]).
//! - **Atomic batch placement**: submit all resulting placements inside one
//!   scoped transaction, so all of them land or none do ([`session`]).
//!
//! The host document (selection, room enumeration, element instantiation,
//! transactions) is reached exclusively through the traits in [`providers`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roomdup_core::session::PlacementSession;
//!
//! let outcome = PlacementSession::new(&mut selection, &regions, &mut document)
//!     .run("Duplicate group into rooms");
//! match outcome {
//!     Outcome::Succeeded => {}
//!     Outcome::Cancelled => {}          // user backed out, nothing changed
//!     Outcome::Failed(reason) => eprintln!("{reason}"),
//! }
//! ```

pub mod error;
pub mod locate;
pub mod placer;
pub mod providers;
pub mod region;
pub mod session;

pub use error::{Error, Result, SelectionError, SelectionResult};
pub use locate::find_containing;
pub use placer::{anchor_offset, build_requests, resolve_target_point, PlacementRequest};
pub use providers::{
    InstantiationProvider, PlacementTransaction, RegionProvider, SelectionProvider,
    SourceSelection,
};
pub use region::{ElementId, Region, RegionId, TemplateId};
pub use session::{place_at_point, Outcome, PlacementSession, SessionState};
