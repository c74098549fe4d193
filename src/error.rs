// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the search driver.
//!
//! The enumeration and evaluation code has no failure modes of its own; its
//! preconditions are asserted. These errors come from user input and from the
//! optional cross-check against the reference evaluator.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Lengths below 2 have no rule-conforming profiles.
    #[error("START must be >= 2, got {start}")]
    StartTooSmall { start: usize },

    /// The fast evaluator disagreed with direct digit multiplication.
    #[error(
        "Persistence mismatch for {length} digits ({number}): evaluator {fast}, reference {reference}"
    )]
    VerificationFailed {
        length: usize,
        number: String,
        fast: u32,
        reference: u32,
    },
}
