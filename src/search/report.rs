// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Console rendering of per-length outcomes.

use super::LengthOutcome;
use crate::memo::PowerCache;
use crate::persistence::PersistenceEvaluator;
use std::fmt::Write;

/// Optional extras appended to each outcome line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Append the smallest number with the winning digits.
    pub show_number: bool,
    /// Print the chain of digit products on a second line.
    pub show_chain: bool,
}

/// Render one outcome for stdout, without the final newline.
///
/// Records are surrounded by blank lines so they stand out in long runs.
pub fn render_outcome(outcome: &LengthOutcome, cache: &PowerCache, options: ReportOptions) -> String {
    let mut text = String::new();
    if outcome.new_record {
        let _ = write!(
            text,
            "\nNEW MAX {} persistence for {} digits: {}",
            outcome.persistence, outcome.length, outcome.profile
        );
    } else {
        let _ = write!(
            text,
            "{} best persistence for {} digits: {}",
            outcome.persistence, outcome.length, outcome.profile
        );
    }

    if options.show_number {
        let _ = write!(text, " = {}", outcome.profile.smallest_number());
    }

    if options.show_chain {
        let chain: Vec<String> = PersistenceEvaluator::new(cache)
            .product_chain(&outcome.profile)
            .iter()
            .map(|product| product.to_string())
            .collect();
        let _ = write!(text, "\n    {}", chain.join(" -> "));
    }

    if outcome.new_record {
        text.push('\n');
    }
    text
}
