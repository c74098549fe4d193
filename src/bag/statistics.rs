// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are kept per bag and merged by the driver after each length.

use crate::persistence::ExitKind;
use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    ProfilesChecked,
    RuleTransitions,
    SingleDigitExits,
    ZeroDigitExits,
    FiveAndEvenExits,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one evaluated profile and the way its evaluation ended.
    pub(crate) fn record(&mut self, exit: ExitKind) {
        self.increment_counter(Counters::ProfilesChecked);
        self.increment_counter(match exit {
            ExitKind::SingleDigit => Counters::SingleDigitExits,
            ExitKind::ZeroDigit => Counters::ZeroDigitExits,
            ExitKind::FiveAndEven => Counters::FiveAndEvenExits,
        });
    }

    /// Add all counters of `other` into this one.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_record_counts_exit_kind() {
        let mut stats = Statistics::new();
        stats.record(ExitKind::ZeroDigit);
        stats.record(ExitKind::ZeroDigit);
        stats.record(ExitKind::FiveAndEven);
        assert_eq!(stats.get(Counters::ProfilesChecked), 3);
        assert_eq!(stats.get(Counters::ZeroDigitExits), 2);
        assert_eq!(stats.get(Counters::FiveAndEvenExits), 1);
        assert_eq!(stats.get(Counters::SingleDigitExits), 0);
    }

    #[test]
    fn test_merge() {
        let mut a = Statistics::new();
        let mut b = Statistics::new();
        a.record(ExitKind::SingleDigit);
        b.record(ExitKind::SingleDigit);
        b.increment_counter(Counters::RuleTransitions);
        a.merge(&b);
        for counter in Counters::iter() {
            let expected = match counter {
                Counters::ProfilesChecked | Counters::SingleDigitExits => 2,
                Counters::RuleTransitions => 1,
                _ => 0,
            };
            assert_eq!(a.get(counter), expected, "{:?}", counter);
        }
    }
}
