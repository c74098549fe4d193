// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use multper::DigitProfile;
use num_bigint::BigUint;
use std::str::FromStr;

/// Every digit profile of exactly `length` digits (all multisets over 0..=9).
pub fn all_profiles(length: usize) -> Vec<DigitProfile> {
    fn fill(digit: usize, left: u32, counts: &mut [u32; 10], out: &mut Vec<DigitProfile>) {
        if digit == 9 {
            counts[9] = left;
            out.push(DigitProfile::from_counts(*counts));
            return;
        }
        for count in 0..=left {
            counts[digit] = count;
            fill(digit + 1, left - count, counts, out);
        }
        counts[digit] = 0;
    }

    let mut out = Vec::new();
    fill(0, length as u32, &mut [0; 10], &mut out);
    out
}

/// The smallest number with the profile's digits, as a big integer.
pub fn smallest_value(profile: &DigitProfile) -> BigUint {
    BigUint::from_str(&profile.smallest_number()).expect("profile renders as decimal")
}

/// A genuine `len()`-digit number with the profile's digits: digits in
/// descending order, so any zeros trail instead of leading.
///
/// Returns `None` for a profile of zeros only, which is no such number.
pub fn literal_value(profile: &DigitProfile) -> Option<BigUint> {
    if profile.count(0) as usize == profile.len() {
        return None;
    }
    let descending: String = profile.smallest_number().chars().rev().collect();
    Some(BigUint::from_str(&descending).expect("profile renders as decimal"))
}

/// Walk a bag to exhaustion, collecting (rule index, profile) for every visited profile.
pub fn drain(bag: &mut multper::DigitBag) -> Vec<(usize, DigitProfile)> {
    let mut visited = vec![(bag.rule_index(), *bag.get_digits())];
    while bag.next() {
        visited.push((bag.rule_index(), *bag.get_digits()));
    }
    visited
}
