// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural rules for persistence record holders.
//!
//! From OEIS A003001: for n > 2, every term consists of 7's, 8's and 9's with
//! a prefix drawn from `{}`, `{2}`, `{3}`, `{4}`, `{6}`, `{2,6}`, `{3,5}` or
//! `{5,5,...}` (the last one expressed here as prefix `{5}` with 5 allowed in
//! the tail).
//!
//! The table is ordered so that enumerating every rule in turn, each in its own
//! ascending order, visits the candidate numbers of a fixed length in strictly
//! ascending numeric order.

use std::fmt;

/// A structural template: fixed prefix digits, remaining positions filled from
/// the tail alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Digits that always appear, possibly repeated.
    pub prefix: &'static [usize],
    /// Digits allowed in the remaining positions, strictly ascending, non-empty.
    pub tail: &'static [usize],
}

impl Rule {
    pub const fn new(prefix: &'static [usize], tail: &'static [usize]) -> Self {
        Self { prefix, tail }
    }

    /// Smallest tail digit; the whole tail starts out on it.
    pub fn first_tail_digit(&self) -> usize {
        self.tail[0]
    }

    /// Largest tail digit; the rule is exhausted once the whole tail sits on it.
    pub fn last_tail_digit(&self) -> usize {
        self.tail[self.tail.len() - 1]
    }

    /// Number of positions left for the tail in a number of `length` digits.
    pub fn tail_len(&self, length: usize) -> usize {
        debug_assert!(
            length >= self.prefix.len(),
            "Length {} is shorter than prefix {:?}",
            length,
            self.prefix
        );
        length - self.prefix.len()
    }

    /// Number of profiles the rule yields for `length` digits: C(m+k-1, k-1).
    pub fn profile_count(&self, length: usize) -> u64 {
        let m = self.tail_len(length) as u64;
        let k = self.tail.len() as u64;
        binomial(m + k - 1, k - 1)
    }
}

impl fmt::Display for Rule {
    /// Format as "{2,6}->{7,8,9}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_set(f: &mut fmt::Formatter<'_>, digits: &[usize]) -> fmt::Result {
            write!(f, "{{")?;
            for (i, d) in digits.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", d)?;
            }
            write!(f, "}}")
        }
        write_set(f, self.prefix)?;
        write!(f, "->")?;
        write_set(f, self.tail)
    }
}

/// Number of rules in [`RULES`].
pub const NRULES: usize = 8;

/// All rules, smallest generated numbers first.
pub static RULES: [Rule; NRULES] = [
    Rule::new(&[2, 6], &[7, 8, 9]),
    Rule::new(&[2], &[7, 8, 9]),
    Rule::new(&[3, 5], &[7, 8, 9]),
    Rule::new(&[3], &[7, 8, 9]),
    Rule::new(&[4], &[7, 8, 9]),
    Rule::new(&[5], &[5, 7, 9]),
    Rule::new(&[6], &[7, 8, 9]),
    Rule::new(&[], &[7, 8, 9]),
];

/// Read-only view over an ordered rule sequence.
///
/// [`RuleTable::standard`] is the process-wide table; other tables exist only
/// so enumeration can be exercised on smaller rule sets.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    rules: &'static [Rule],
}

impl RuleTable {
    pub fn standard() -> Self {
        Self { rules: &RULES }
    }

    /// A custom table. Each rule needs a non-empty, strictly ascending tail.
    pub fn new(rules: &'static [Rule]) -> Self {
        debug_assert!(!rules.is_empty(), "Rule table must not be empty");
        debug_assert!(
            rules
                .iter()
                .all(|r| !r.tail.is_empty() && r.tail.windows(2).all(|w| w[0] < w[1])),
            "Every rule needs a non-empty ascending tail"
        );
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Rule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Rule> {
        self.rules.iter()
    }

    /// Longest prefix among the rules; shorter lengths cannot be enumerated.
    pub fn max_prefix_len(&self) -> usize {
        self.rules.iter().map(|r| r.prefix.len()).max().unwrap_or(0)
    }

    /// Total number of profiles enumerated for `length` digits across all rules.
    pub fn profile_count(&self, length: usize) -> u64 {
        self.rules.iter().map(|r| r.profile_count(length)).sum()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Binomial coefficient C(n, k).
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
