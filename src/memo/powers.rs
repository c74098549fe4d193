// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lookup table of digit powers.
//!
//! The digit product of a profile is `2^c2 * 3^c3 * ... * 9^c9`. Caching every
//! `d^e` up to the longest length searched turns each product into at most
//! eight lookups and seven big-integer multiplications.

use crate::digits::{DigitProfile, NDIGITS};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::info;

/// Smallest digit with a cached power table. 0 and 1 never contribute a factor.
pub const FIRST_CACHED_DIGIT: usize = 2;

/// Exact powers `d^0 ..= d^max_exponent` for each digit `d` in 2..=9.
#[derive(Debug, Clone)]
pub struct PowerCache {
    /// `powers[d][e] == d^e`; the tables for 0 and 1 stay empty.
    powers: [Vec<BigUint>; NDIGITS],
    max_exponent: usize,
}

impl PowerCache {
    /// Compute all powers up to and including `max_exponent`.
    pub fn build(max_exponent: usize) -> Self {
        let mut powers: [Vec<BigUint>; NDIGITS] = Default::default();
        for (digit, table) in powers.iter_mut().enumerate().skip(FIRST_CACHED_DIGIT) {
            let base = BigUint::from(digit);
            table.reserve_exact(max_exponent + 1);
            let mut power = BigUint::one();
            for _ in 0..max_exponent {
                let next = &power * &base;
                table.push(power);
                power = next;
            }
            table.push(power);
        }

        info!(
            max_exponent,
            "Power cache built for digits {}..={}",
            FIRST_CACHED_DIGIT,
            NDIGITS - 1
        );

        Self {
            powers,
            max_exponent,
        }
    }

    pub fn max_exponent(&self) -> usize {
        self.max_exponent
    }

    /// True if every profile of `length` digits can be evaluated with this cache.
    pub fn covers(&self, length: usize) -> bool {
        length <= self.max_exponent
    }

    /// `digit^exponent`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in 2..=9 or `exponent` exceeds `max_exponent`.
    pub fn power(&self, digit: usize, exponent: usize) -> &BigUint {
        debug_assert!(
            (FIRST_CACHED_DIGIT..NDIGITS).contains(&digit),
            "No cached powers for digit {}",
            digit
        );
        match self.powers[digit].get(exponent) {
            Some(power) => power,
            None => panic!(
                "Power {}^{} requested but cache only covers exponents up to {}",
                digit, exponent, self.max_exponent
            ),
        }
    }

    /// Product of all digits in the profile, ignoring 0 and 1.
    ///
    /// Callers deal with a 0 digit themselves: its true product is zero.
    pub fn digit_product(&self, profile: &DigitProfile) -> BigUint {
        let mut product = BigUint::one();
        for digit in FIRST_CACHED_DIGIT..NDIGITS {
            let count = profile[digit] as usize;
            if count != 0 {
                product *= self.power(digit, count);
            }
        }
        debug_assert!(!product.is_zero());
        product
    }
}
