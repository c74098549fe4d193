// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DigitProfile type: a multiset of decimal digits.
//!
//! # Examples
//!
//! ```
//! use multper::digits::DigitProfile;
//!
//! let profile = DigitProfile::from_number("277777788888899").unwrap();
//! assert_eq!(profile.len(), 15);
//! assert_eq!(profile.count(7), 6);
//! assert_eq!(format!("{}", profile), "{ 0, 0, 1, 0, 0, 0, 0, 6, 6, 2 }");
//! assert_eq!(profile.smallest_number(), "277777788888899");
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of decimal digit values (0..=9).
pub const NDIGITS: usize = 10;

/// Per-digit occurrence counts, indexed by digit value.
///
/// The sum of all counts is the decimal length of the number the profile
/// stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitProfile([u32; NDIGITS]);

impl DigitProfile {
    /// The empty profile (length 0).
    pub const fn new() -> Self {
        Self([0; NDIGITS])
    }

    pub const fn from_counts(counts: [u32; NDIGITS]) -> Self {
        Self(counts)
    }

    /// Count the digits of a decimal literal.
    ///
    /// Returns `None` if the string contains anything other than ASCII digits.
    pub fn from_number(number: &str) -> Option<Self> {
        let mut profile = Self::new();
        for ch in number.bytes() {
            if !ch.is_ascii_digit() {
                return None;
            }
            profile.0[(ch - b'0') as usize] += 1;
        }
        Some(profile)
    }

    /// Number of occurrences of `digit`.
    pub fn count(&self, digit: usize) -> u32 {
        self.0[digit]
    }

    /// Decimal length of the number (sum of all counts).
    pub fn len(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    pub fn counts(&self) -> &[u32; NDIGITS] {
        &self.0
    }

    /// Reset every count to zero.
    pub fn clear(&mut self) {
        self.0 = [0; NDIGITS];
    }

    /// True if any of the even digits 2, 4, 6, 8 is present.
    pub fn has_even_digit(&self) -> bool {
        self.0[2] != 0 || self.0[4] != 0 || self.0[6] != 0 || self.0[8] != 0
    }

    /// Render the smallest number with these digits: all digits in ascending order.
    ///
    /// Only used to report results; the search itself works on counts.
    pub fn smallest_number(&self) -> String {
        let mut number = String::with_capacity(self.len());
        for (digit, &count) in self.0.iter().enumerate() {
            let ch = char::from(b'0' + digit as u8);
            number.extend(std::iter::repeat(ch).take(count as usize));
        }
        number
    }
}

impl Index<usize> for DigitProfile {
    type Output = u32;

    fn index(&self, digit: usize) -> &u32 {
        &self.0[digit]
    }
}

impl IndexMut<usize> for DigitProfile {
    fn index_mut(&mut self, digit: usize) -> &mut u32 {
        &mut self.0[digit]
    }
}

impl fmt::Display for DigitProfile {
    /// Format as "{ c0, c1, ..., c9 }".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}", self.0[0])?;
        for count in &self.0[1..] {
            write!(f, ", {}", count)?;
        }
        write!(f, " }}")
    }
}
