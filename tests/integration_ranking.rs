//! End-to-end ranking over a small card-name dictionary.

use levenrank::prelude::*;
use std::sync::Arc;

const DICTIONARY: &[&str] = &[
    "Black Lotus",
    "Blacker Lotus",
    "Brainstorm",
    "Counterspell",
    "Dark Ritual",
    "Lightning Bolt",
    "Lotus Petal",
    "Swords to Plowshares",
];

fn ranker() -> Ranker {
    let costs = Arc::new(CostCache::new(KeyboardProximityCost::new()));
    Ranker::new(DistanceEngine::new(costs))
}

#[test]
fn test_exact_match_ranks_first() {
    let mut ranker = ranker();
    let ranked = ranker.rank("counterspell", DICTIONARY).unwrap();

    assert_eq!(ranked[0].term, "Counterspell");
    assert_eq!(ranked[0].distances.full, 0.0);
}

#[test]
fn test_typo_still_finds_intended_card() {
    let mut ranker = ranker();

    // Dropped character
    let ranked = ranker.rank("blak lotus", DICTIONARY).unwrap();
    assert_eq!(ranked[0].term, "Black Lotus");

    // Transposed characters
    let ranked = ranker.rank("brianstorm", DICTIONARY).unwrap();
    assert_eq!(ranked[0].term, "Brainstorm");
}

#[test]
fn test_partial_input_prefers_prefix_matches() {
    let mut ranker = ranker();
    let ranked = ranker.rank("black", DICTIONARY).unwrap();

    // Both "Black Lotus" and "Blacker Lotus" start with the typed prefix.
    assert_eq!(ranked[0].distances.prefix, 0.0);
    assert_eq!(ranked[1].distances.prefix, 0.0);
    assert!(ranked[0].term.to_lowercase().starts_with("black"));

    // The shorter candidate wins the full-distance tie break.
    assert_eq!(ranked[0].term, "Black Lotus");
}

#[test]
fn test_threshold_cut_drops_distant_cards() {
    let mut ranker = ranker();
    let ranked = ranker.rank("lotus", DICTIONARY).unwrap();
    let accepted = cut_at(&ranked, 2.0);

    assert!(!accepted.is_empty());
    assert!(accepted.len() < ranked.len());
    assert!(accepted.iter().all(|s| s.distances.prefix <= 2.0));
    assert!(accepted.iter().any(|s| s.term == "Lotus Petal"));
}

#[test]
fn test_case_folding_end_to_end() {
    let mut ranker = ranker();
    let ranked = ranker.rank("BLACK LOTUS", DICTIONARY).unwrap();

    assert_eq!(ranked[0].term, "Black Lotus");
    assert_eq!(ranked[0].distances.full, 0.0);
}
