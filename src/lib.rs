// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for the smallest numbers with the highest multiplicative persistence.
//!
//! The multiplicative persistence of a number is how many times its digits
//! must be multiplied together before a single digit remains
//! (277777788888899 → 4996238671872 → ... → 0 takes 11 steps). See
//! OEIS A003001 for the smallest numbers of each persistence.
//!
//! For each decimal length in a range, this crate finds the smallest number of
//! that length with the highest persistence among the numbers that can hold a
//! record.
//!
//! # Architecture
//!
//! ## MEMO Data (Immutable)
//!
//! - [`PowerCache`]: `d^e` for digits 2..=9 up to the longest length searched
//! - [`rules::RULES`]: the structural forms a record holder can take
//!
//! ## Per-length State (Mutable)
//!
//! - [`DigitBag`]: the current [`DigitProfile`] and rule cursor, advanced in
//!   place through every rule-conforming profile in ascending numeric order
//! - [`PersistenceEvaluator`]: reusable rendering buffer for digit products
//!
//! Numbers are only ever handled as digit counts; decimal strings are produced
//! for digit products, never for the candidates themselves.
//!
//! # Parallelization
//!
//! Lengths are independent: each worker owns a bag and shares the power cache
//! read-only. See [`search`].

pub mod bag;
pub mod digits;
pub mod error;
pub mod memo;
pub mod persistence;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use bag::DigitBag;
pub use digits::DigitProfile;
pub use error::SearchError;
pub use memo::PowerCache;
pub use persistence::PersistenceEvaluator;
pub use rules::{Rule, RuleTable};
pub use search::{Search, SearchConfig};
