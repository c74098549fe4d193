// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search driver.
//!
//! Builds the power cache once, then runs one [`DigitBag`] per length and keeps
//! track of record persistences.
//!
//! # Parallelization
//!
//! Lengths are independent given the shared, immutable [`PowerCache`]. With
//! `parallel` set each length is evaluated on the rayon pool with its own bag;
//! results are then folded in ascending length order, so records and output
//! are the same as in a sequential run.

pub mod config;
pub mod report;

pub use config::SearchConfig;
pub use report::{render_outcome, ReportOptions};

use crate::bag::{Counters, DigitBag, Statistics};
use crate::digits::DigitProfile;
use crate::error::SearchError;
use crate::memo::PowerCache;
use crate::persistence::reference::persistence_of_number;
use num_bigint::BigUint;
use rayon::prelude::*;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info};

/// Best result for one length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthOutcome {
    pub length: usize,
    /// First (hence smallest) profile reaching the best persistence.
    pub profile: DigitProfile,
    pub persistence: u32,
    /// True if `persistence` beats the threshold and every earlier length.
    pub new_record: bool,
    pub statistics: Statistics,
}

/// Running maximum across lengths.
#[derive(Debug, Clone, Copy)]
pub struct RecordTracker {
    best: u32,
}

impl RecordTracker {
    pub fn new(threshold: u32) -> Self {
        Self { best: threshold }
    }

    /// Returns true and raises the maximum if `persistence` strictly exceeds it.
    pub fn observe(&mut self, persistence: u32) -> bool {
        if persistence > self.best {
            self.best = persistence;
            true
        } else {
            false
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }
}

/// Exhaustively search one length.
///
/// `new_record` is left false; record tracking needs the preceding lengths.
pub fn search_length(length: usize, cache: &PowerCache) -> LengthOutcome {
    let started = Instant::now();
    let mut bag = DigitBag::new(length, cache);
    let (profile, persistence) = bag.check_all();
    let statistics = bag.statistics().clone();
    debug!(
        length,
        persistence,
        profiles = statistics.get(Counters::ProfilesChecked),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Length searched"
    );
    LengthOutcome {
        length,
        profile,
        persistence,
        new_record: false,
        statistics,
    }
}

/// A configured search with its power cache.
#[derive(Debug)]
pub struct Search {
    config: SearchConfig,
    cache: PowerCache,
}

impl Search {
    /// Validate the configuration and build the power cache.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let cache = PowerCache::build(config.max_exponent());
        Ok(Self { config, cache })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn cache(&self) -> &PowerCache {
        &self.cache
    }

    /// Run the search and collect every outcome.
    pub fn run(&self) -> Result<Vec<LengthOutcome>, SearchError> {
        let mut outcomes = Vec::with_capacity(self.config.lengths().len());
        self.run_with(|outcome| outcomes.push(outcome.clone()))?;
        Ok(outcomes)
    }

    /// Run the search, handing each outcome to `on_outcome` in ascending length order.
    ///
    /// Sequential runs report each length as soon as it is done.
    pub fn run_with<F>(&self, mut on_outcome: F) -> Result<Statistics, SearchError>
    where
        F: FnMut(&LengthOutcome),
    {
        let started = Instant::now();
        let mut records = RecordTracker::new(self.config.threshold);
        let mut totals = Statistics::new();

        let mut finish = |mut outcome: LengthOutcome| -> Result<(), SearchError> {
            if self.config.verify {
                verify_outcome(&outcome)?;
            }
            outcome.new_record = records.observe(outcome.persistence);
            totals.merge(&outcome.statistics);
            on_outcome(&outcome);
            Ok(())
        };

        if self.config.parallel {
            let outcomes: Vec<LengthOutcome> = self
                .config
                .lengths()
                .into_par_iter()
                .map(|length| search_length(length, &self.cache))
                .collect();
            for outcome in outcomes {
                finish(outcome)?;
            }
        } else {
            for length in self.config.lengths() {
                finish(search_length(length, &self.cache))?;
            }
        }

        info!(
            lengths = self.config.lengths().len(),
            best = records.best(),
            profiles = totals.get(Counters::ProfilesChecked),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Search complete"
        );
        Ok(totals)
    }
}

/// Recompute the winner's persistence by multiplying the digits of the literal number.
pub fn verify_outcome(outcome: &LengthOutcome) -> Result<(), SearchError> {
    let number = outcome.profile.smallest_number();
    let reference = match BigUint::from_str(&number) {
        Ok(value) => persistence_of_number(&value),
        Err(_) => unreachable!("smallest_number renders only decimal digits"),
    };
    if reference != outcome.persistence {
        return Err(SearchError::VerificationFailed {
            length: outcome.length,
            number,
            fast: outcome.persistence,
            reference,
        });
    }
    Ok(())
}
