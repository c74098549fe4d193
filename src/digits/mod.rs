// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Digit profiles: numbers represented as per-digit occurrence counts.
//!
//! Multiplying the digits of a number does not depend on their order, so the
//! ten counts of a [`DigitProfile`] fully determine its multiplicative
//! persistence. The search never materializes the candidate numbers
//! themselves, only these counts.

pub mod profile;

pub use profile::{DigitProfile, NDIGITS};
