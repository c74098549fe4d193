// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Slow reference evaluators.
//!
//! Used to cross-check [`PersistenceEvaluator`](super::PersistenceEvaluator)
//! and by the `--verify` mode of the binary.

use crate::digits::DigitProfile;
use crate::memo::PowerCache;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Persistence by full step-by-step simulation on profiles, no shortcuts.
///
/// Uses the cache for products but follows every step down to a single digit.
pub fn persistence_without_shortcuts(cache: &PowerCache, profile: &DigitProfile) -> u32 {
    let mut current = *profile;
    let mut steps = 0;
    while current.len() > 1 {
        let product = if current[0] != 0 {
            BigUint::zero()
        } else {
            cache.digit_product(&current)
        };
        current = match DigitProfile::from_number(&product.to_str_radix(10)) {
            Some(next) => next,
            None => unreachable!("decimal rendering contains only digits"),
        };
        steps += 1;
    }
    steps
}

/// Persistence of a literal integer by multiplying its digits directly.
///
/// Single-digit numbers have persistence 0.
pub fn persistence_of_number(number: &BigUint) -> u32 {
    let ten = BigUint::from(10u32);
    let mut current = number.clone();
    let mut steps = 0;
    while current >= ten {
        let mut product = BigUint::one();
        for digit in current.to_radix_le(10) {
            product *= digit;
        }
        current = product;
        steps += 1;
    }
    steps
}
