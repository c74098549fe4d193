// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cross-checks the shortcut evaluator against the slow reference evaluators
//! on every digit profile of 2 to 8 digits, zeros included.

mod common;

use multper::persistence::reference::{persistence_of_number, persistence_without_shortcuts};
use multper::persistence::ExitKind;
use multper::{DigitProfile, PersistenceEvaluator, PowerCache};

#[test]
fn test_all_short_profiles_match_references() {
    let cache = PowerCache::build(8);
    let mut evaluator = PersistenceEvaluator::new(&cache);

    for length in 2..=8 {
        let profiles = common::all_profiles(length);
        for profile in &profiles {
            let fast = evaluator.persistence(profile);
            let simulated = persistence_without_shortcuts(&cache, profile);
            assert_eq!(fast, simulated, "shortcut vs simulation for {}", profile);
            assert!(fast >= 1);
            if let Some(number) = common::literal_value(profile) {
                let literal = persistence_of_number(&number);
                assert_eq!(fast, literal, "shortcut vs literal {}", number);
            }
        }
    }
}

#[test]
fn test_profile_counts_per_length() {
    // C(length + 9, 9) multisets of decimal digits
    assert_eq!(common::all_profiles(2).len(), 55);
    assert_eq!(common::all_profiles(8).len(), 24310);
}

#[test]
fn test_famous_record_has_persistence_eleven() {
    let cache = PowerCache::build(15);
    let mut evaluator = PersistenceEvaluator::new(&cache);
    let profile = DigitProfile::from_number("277777788888899").unwrap();
    assert_eq!(profile.counts(), &[0, 0, 1, 0, 0, 0, 0, 6, 6, 2]);

    let evaluation = evaluator.evaluate(&profile);
    assert_eq!(evaluation.steps, 11);
    // ... 336 -> 54, and 5*4 = 20
    assert_eq!(evaluation.exit, ExitKind::FiveAndEven);

    let chain: Vec<String> = evaluator
        .product_chain(&profile)
        .iter()
        .map(|p| p.to_string())
        .collect();
    assert_eq!(
        chain,
        vec![
            "4996238671872",
            "438939648",
            "4478976",
            "338688",
            "27648",
            "2688",
            "768",
            "336",
            "54",
            "20",
            "0"
        ]
    );
}

#[test]
fn test_eight_nine_boundary() {
    let cache = PowerCache::build(2);
    let mut evaluator = PersistenceEvaluator::new(&cache);
    assert_eq!(evaluator.persistence(&DigitProfile::from_number("89").unwrap()), 3);
}

#[test]
fn test_evaluator_is_reusable() {
    let cache = PowerCache::build(10);
    let mut evaluator = PersistenceEvaluator::new(&cache);
    let long = DigitProfile::from_number("3778888999").unwrap();
    let short = DigitProfile::from_number("77").unwrap();
    assert_eq!(evaluator.persistence(&long), 10);
    assert_eq!(evaluator.persistence(&short), 4);
    assert_eq!(evaluator.persistence(&long), 10);
}
