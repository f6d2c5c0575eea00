// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for placement operations.
//!
//! User cancellation is deliberately not part of [`Error`]: backing out of a
//! selection is a normal outcome, not a failure, and is carried separately
//! by [`SelectionError::Cancelled`] so it can never be conflated with a
//! collaborator fault.

/// Result type alias for placement operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for selection prompts.
pub type SelectionResult<T> = std::result::Result<T, SelectionError>;

/// Errors that can occur during placement operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The anchor point lies outside every known region.
    #[error("no region contains the anchor point ({x:.3}, {y:.3}, {z:.3})")]
    RegionNotFound { x: f64, y: f64, z: f64 },

    /// A host collaborator (query, instantiation, or transaction) failed.
    #[error("host operation failed: {0}")]
    External(String),
}

/// Outcomes of a selection prompt other than a successful pick.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// The user aborted the prompt.
    #[error("selection cancelled by user")]
    Cancelled,

    /// The host failed to carry out the prompt.
    #[error("selection failed: {0}")]
    Host(String),
}
