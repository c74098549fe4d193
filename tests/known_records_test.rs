// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Best persistence per length, checked against published values.
//!
//! The record holders are the OEIS A003001 terms 77, 679, 6788, 68889,
//! 2677889, 26888999, 3778888999 and 277777788888899.

use multper::search::search_length;
use multper::{DigitBag, PowerCache, Search, SearchConfig};

/// (length, best persistence, smallest number reaching it)
const BEST_PER_LENGTH: &[(usize, u32, &str)] = &[
    (2, 4, "77"),
    (3, 5, "679"),
    (4, 6, "6788"),
    (5, 7, "68889"),
    (6, 7, "267799"),
    (7, 8, "2677889"),
    (8, 9, "26888999"),
    (9, 7, "888888888"),
    (10, 10, "3778888999"),
    (11, 7, "26777777899"),
    (12, 9, "377788888889"),
    (13, 10, "3888888888889"),
    (14, 9, "27777777777779"),
    (15, 11, "277777788888899"),
    (16, 6, "2677777777778888"),
];

#[test]
fn test_best_per_length() {
    let cache = PowerCache::build(16);
    for &(length, persistence, number) in BEST_PER_LENGTH {
        let mut bag = DigitBag::new(length, &cache);
        let (best, count) = bag.check_all();
        assert_eq!(count, persistence, "length {}", length);
        assert_eq!(best.smallest_number(), number, "length {}", length);
    }
}

#[test]
fn test_records_match_a003001() {
    let search = Search::new(SearchConfig::new(2, 17).with_verify(true)).unwrap();
    let records: Vec<String> = search
        .run()
        .unwrap()
        .iter()
        .filter(|outcome| outcome.new_record)
        .map(|outcome| outcome.profile.smallest_number())
        .collect();
    assert_eq!(
        records,
        vec![
            "77",
            "679",
            "6788",
            "68889",
            "2677889",
            "26888999",
            "3778888999",
            "277777788888899"
        ]
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = Search::new(SearchConfig::new(2, 14)).unwrap().run().unwrap();
    let parallel = Search::new(SearchConfig::new(2, 14).with_parallel(true))
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_search_length_uses_shared_cache() {
    let cache = PowerCache::build(30);
    let short = search_length(3, &cache);
    let long = search_length(30, &cache);
    assert_eq!(short.persistence, 5);
    assert_eq!(long.profile.len(), 30);
    assert!(long.persistence >= 2);
}
