// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use crate::error::SearchError;
use std::ops::Range;
use tracing::warn;

/// Which lengths to search and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// First length searched (inclusive, at least 2).
    pub start: usize,
    /// Length bound (exclusive).
    pub end: usize,
    /// A length is a new record only if it beats this persistence and every
    /// earlier length.
    pub threshold: u32,
    /// Shard lengths across the rayon thread pool.
    pub parallel: bool,
    /// Recheck each winner by multiplying the digits of the literal number.
    pub verify: bool,
}

impl SearchConfig {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            threshold: 0,
            parallel: false,
            verify: false,
        }
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Check the configuration. An empty range is allowed and searches nothing.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.start < 2 {
            return Err(SearchError::StartTooSmall { start: self.start });
        }
        if self.end <= self.start {
            warn!(
                start = self.start,
                end = self.end,
                "Empty length range, nothing to search"
            );
        }
        Ok(())
    }

    pub fn lengths(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Largest exponent the power cache needs.
    ///
    /// Sized to END, which covers every length below it.
    pub fn max_exponent(&self) -> usize {
        self.end.max(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_below_two_rejected() {
        let config = SearchConfig::new(1, 5);
        assert_eq!(
            config.validate(),
            Err(SearchError::StartTooSmall { start: 1 })
        );
    }

    #[test]
    fn test_empty_range_accepted() {
        let config = SearchConfig::new(10, 10);
        assert!(config.validate().is_ok());
        assert_eq!(config.lengths().count(), 0);
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::new(2, 8)
            .with_threshold(5)
            .with_parallel(true)
            .with_verify(true);
        assert_eq!(config.threshold, 5);
        assert!(config.parallel);
        assert!(config.verify);
        assert_eq!(config.max_exponent(), 8);
    }
}
