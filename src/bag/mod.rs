// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DigitBag - rule-constrained enumeration of digit profiles.
//!
//! A bag is built for one length and walks every profile allowed by the rule
//! table, rule by rule. Within a rule the tail counts advance like an
//! odometer: for tail digits `t0 < t1 < t2` the order is
//!
//! ```text
//! (m,0,0) (m-1,1,0) (m-1,0,1) (m-2,2,0) (m-2,1,1) (m-2,0,2) ... (0,0,m)
//! ```
//!
//! which is ascending order of the smallest arrangement of each profile.
//!
//! # Example
//!
//! ```
//! use multper::bag::DigitBag;
//! use multper::memo::PowerCache;
//!
//! let cache = PowerCache::build(3);
//! let mut bag = DigitBag::new(3, &cache);
//! let (best, persistence) = bag.check_all();
//! assert_eq!(best.smallest_number(), "679");
//! assert_eq!(persistence, 5);
//! ```

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::digits::DigitProfile;
use crate::memo::PowerCache;
use crate::persistence::PersistenceEvaluator;
use crate::rules::{Rule, RuleTable};
use tracing::trace;

/// Enumerator over all rule-conforming profiles of one length.
///
/// Not restartable: once [`DigitBag::next`] has returned `false` the bag is
/// spent and a new one must be built to enumerate again.
#[derive(Debug)]
pub struct DigitBag<'a> {
    length: usize,
    rules: RuleTable,
    rule_index: usize,
    digits: DigitProfile,
    evaluator: PersistenceEvaluator<'a>,
    statistics: Statistics,
}

impl<'a> DigitBag<'a> {
    /// Create a bag positioned on the first profile of the standard rule table.
    ///
    /// # Panics
    ///
    /// Panics if `length < 2` or the cache does not cover `length`.
    pub fn new(length: usize, cache: &'a PowerCache) -> Self {
        Self::with_rules(length, cache, RuleTable::standard())
    }

    /// Create a bag over a custom rule table.
    pub fn with_rules(length: usize, cache: &'a PowerCache, rules: RuleTable) -> Self {
        assert!(length >= 2, "DigitBag needs length >= 2, got {}", length);
        assert!(
            length >= rules.max_prefix_len(),
            "Length {} is shorter than the longest rule prefix",
            length
        );
        assert!(
            cache.covers(length),
            "Power cache built for {} digits cannot evaluate length {}",
            cache.max_exponent(),
            length
        );

        let mut bag = Self {
            length,
            rules,
            rule_index: 0,
            digits: DigitProfile::new(),
            evaluator: PersistenceEvaluator::new(cache),
            statistics: Statistics::new(),
        };
        bag.init_rule();
        bag
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Index of the active rule in the table.
    pub fn rule_index(&self) -> usize {
        self.rule_index
    }

    fn rule(&self) -> &'static Rule {
        match self.rules.get(self.rule_index) {
            Some(rule) => rule,
            None => panic!("Rule cursor {} past end of table", self.rule_index),
        }
    }

    /// Reset to the smallest profile of the active rule: prefix digits plus
    /// every remaining position on the first tail digit.
    fn init_rule(&mut self) {
        let rule = self.rule();
        self.digits.clear();
        for &digit in rule.prefix {
            self.digits[digit] += 1;
        }
        self.digits[rule.first_tail_digit()] += rule.tail_len(self.length) as u32;
        trace!(length = self.length, rule = %rule, "Starting rule");
    }

    /// Move to the next rule, returning `false` if there is none.
    fn advance_rule(&mut self) -> bool {
        self.rule_index += 1;
        if self.rule_index >= self.rules.len() {
            return false;
        }
        self.statistics.increment_counter(Counters::RuleTransitions);
        self.init_rule();
        true
    }

    /// Advance to the next profile in ascending order.
    ///
    /// Returns `false` once every rule is exhausted.
    pub fn next(&mut self) -> bool {
        if self.rule_index >= self.rules.len() {
            return false;
        }
        let rule = self.rule();
        let tail = rule.tail;
        let remaining = rule.tail_len(self.length) as u32;

        // Counts of prefix digits that also appear in the tail are not movable.
        let fixed = |digit: usize| rule.prefix.iter().filter(|&&d| d == digit).count() as u32;
        let last = rule.last_tail_digit();
        if self.digits[last] - fixed(last) == remaining {
            return self.advance_rule();
        }

        // Find the highest tail position below the top with movable mass.
        let Some(position) = (0..tail.len() - 1)
            .rev()
            .find(|&i| self.digits[tail[i]] > fixed(tail[i]))
        else {
            unreachable!("tail mass not on the last digit must sit below it");
        };

        let from = tail[position];
        let to = tail[position + 1];
        self.digits[from] -= 1;
        self.digits[to] += 1;
        for &above in &tail[position + 2..] {
            let moved = self.digits[above] - fixed(above);
            self.digits[to] += moved;
            self.digits[above] -= moved;
        }
        true
    }

    /// The current profile.
    pub fn get_digits(&self) -> &DigitProfile {
        &self.digits
    }

    /// Evaluate the current profile.
    pub fn persistence(&mut self) -> u32 {
        let evaluation = self.evaluator.evaluate(&self.digits);
        self.statistics.record(evaluation.exit);
        evaluation.steps
    }

    /// Evaluate every remaining profile and return the first one with the
    /// highest persistence.
    ///
    /// Since profiles are visited in ascending numeric order, the returned
    /// profile is the smallest number reaching that persistence.
    pub fn check_all(&mut self) -> (DigitProfile, u32) {
        let mut best = self.digits;
        let mut best_count = 0;
        loop {
            let count = self.persistence();
            if count > best_count {
                best_count = count;
                best = self.digits;
            }
            if !self.next() {
                break;
            }
        }
        (best, best_count)
    }

    /// Counters gathered so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}
