// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Multiplicative persistence of digit profiles.
//!
//! [`PersistenceEvaluator`] is the hot path of the search. Each step takes the
//! digit product from the [`PowerCache`], renders it in decimal and counts its
//! digits into a new profile. Two shortcuts stop early:
//!
//! - a 0 digit in the product means the next product is 0: one more step;
//! - a 5 together with an even digit means the next product is a multiple of
//!   10, so it contains a 0: two more steps.
//!
//! The zero check must see the whole rendering before the 5/even check is
//! applied, otherwise a product containing both a 0 and a 5 would be counted
//! one step too long.
//!
//! The [`reference`] module holds slow evaluators used to verify the shortcuts.

pub mod reference;

use crate::digits::DigitProfile;
use crate::memo::PowerCache;
use num_bigint::BigUint;
use std::fmt::Write;

/// How an evaluation terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitKind {
    /// The product reached a single digit.
    SingleDigit,
    /// The product contained a 0 digit.
    ZeroDigit,
    /// The product contained a 5 and an even digit.
    FiveAndEven,
}

/// Result of evaluating one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub steps: u32,
    pub exit: ExitKind,
}

/// Computes persistence using cached digit powers.
///
/// Owns a reusable buffer for decimal rendering, so one evaluator should be
/// kept per thread and reused for every profile.
#[derive(Debug)]
pub struct PersistenceEvaluator<'a> {
    cache: &'a PowerCache,
    rendered: String,
}

impl<'a> PersistenceEvaluator<'a> {
    pub fn new(cache: &'a PowerCache) -> Self {
        Self {
            cache,
            rendered: String::with_capacity(cache.max_exponent() + 1),
        }
    }

    pub fn cache(&self) -> &'a PowerCache {
        self.cache
    }

    /// Multiplicative persistence of a profile of at least two digits.
    pub fn persistence(&mut self, profile: &DigitProfile) -> u32 {
        self.evaluate(profile).steps
    }

    /// Persistence together with the shortcut that ended the evaluation.
    pub fn evaluate(&mut self, profile: &DigitProfile) -> Evaluation {
        debug_assert!(
            profile.len() >= 2,
            "Persistence needs at least two digits, got {}",
            profile
        );
        debug_assert!(self.cache.covers(profile.len()));

        if profile[0] != 0 {
            // The first product is 0, already a single digit.
            return Evaluation {
                steps: 1,
                exit: ExitKind::SingleDigit,
            };
        }

        let mut product = self.cache.digit_product(profile);
        let mut steps = 1;
        loop {
            let next = match self.count_digits(&product) {
                Ok(next) => next,
                Err(exit) => {
                    let extra = match exit {
                        ExitKind::SingleDigit => 0,
                        ExitKind::ZeroDigit => 1,
                        ExitKind::FiveAndEven => 2,
                    };
                    return Evaluation {
                        steps: steps + extra,
                        exit,
                    };
                }
            };
            product = self.cache.digit_product(&next);
            steps += 1;
        }
    }

    /// Render `product` and count its digits.
    ///
    /// Returns `Err` with the exit kind when the chain can be finished without
    /// computing another product.
    fn count_digits(&mut self, product: &BigUint) -> Result<DigitProfile, ExitKind> {
        self.rendered.clear();
        // Writing into a String cannot fail.
        let _ = write!(self.rendered, "{}", product);

        let bytes = self.rendered.as_bytes();
        if bytes.len() == 1 {
            return Err(ExitKind::SingleDigit);
        }

        let mut next = DigitProfile::new();
        for &ch in bytes {
            let digit = (ch - b'0') as usize;
            if digit == 0 {
                return Err(ExitKind::ZeroDigit);
            }
            next[digit] += 1;
        }

        if next[5] != 0 && next.has_even_digit() {
            return Err(ExitKind::FiveAndEven);
        }
        Ok(next)
    }

    /// Every product from the profile down to a single digit, without shortcuts.
    ///
    /// The chain length equals the persistence.
    pub fn product_chain(&self, profile: &DigitProfile) -> Vec<BigUint> {
        let mut chain = Vec::new();
        let mut current = *profile;
        while current.len() > 1 {
            let product = if current[0] != 0 {
                BigUint::default()
            } else {
                self.cache.digit_product(&current)
            };
            current = DigitProfile::from_number(&product.to_str_radix(10))
                .unwrap_or_default();
            chain.push(product);
        }
        chain
    }
}
