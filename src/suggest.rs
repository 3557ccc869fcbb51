//! Ranking a dictionary of terms against a typed query.
//!
//! The flow matches incremental lookup: score every candidate with the
//! distance engine, sort ascending by prefix distance, then cut the list at
//! an acceptance threshold with the boundary search.

use crate::distance::{DistanceEngine, Distances, ValidationError};
use crate::search::first_index_satisfying;

/// One scored dictionary entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    /// The candidate term, as supplied by the dictionary.
    pub term: String,
    /// Its distances from the query.
    pub distances: Distances,
}

/// Scores candidates against a query and ranks them by distance.
///
/// Owns one [`DistanceEngine`] and therefore inherits its threading rule:
/// one ranker per worker thread, sharing a single
/// [`CostCache`](crate::cost::CostCache).
pub struct Ranker {
    engine: DistanceEngine,
}

impl Ranker {
    /// Create a ranker around the given engine.
    pub fn new(engine: DistanceEngine) -> Self {
        Self { engine }
    }

    /// Score `candidates` against `query`, sorted ascending by
    /// `(prefix, full)` distance.
    ///
    /// Candidates that fail candidate-side validation (empty or oversized
    /// dictionary entries) are skipped: they are data defects, not caller
    /// errors. Query-side validation failures abort the whole ranking.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the query is empty or exceeds
    /// [`MAX_QUERY_LEN`](crate::distance::MAX_QUERY_LEN).
    pub fn rank<I, S>(&mut self, query: &str, candidates: I) -> Result<Vec<Suggestion>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suggestions = Vec::new();

        for candidate in candidates {
            let term = candidate.as_ref();

            match self.engine.distances(query, term) {
                Ok(distances) => suggestions.push(Suggestion {
                    term: term.to_string(),
                    distances,
                }),
                Err(ValidationError::EmptyCandidate)
                | Err(ValidationError::CandidateTooLong { .. }) => continue,
                Err(err) => return Err(err),
            }
        }

        suggestions.sort_by(|a, b| {
            a.distances
                .prefix
                .total_cmp(&b.distances.prefix)
                .then(a.distances.full.total_cmp(&b.distances.full))
        });

        Ok(suggestions)
    }
}

/// Slice off the head of a ranked list whose prefix distance stays within
/// `threshold`.
///
/// `suggestions` must already be sorted ascending by prefix distance (as
/// produced by [`Ranker::rank`]); the cut predicate is then monotone and
/// [`first_index_satisfying`] applies.
pub fn cut_at(suggestions: &[Suggestion], threshold: f32) -> &[Suggestion] {
    match first_index_satisfying(suggestions, |s| s.distances.prefix > threshold) {
        Some(cut) => &suggestions[..cut],
        None => suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostCache;
    use crate::distance::{DistanceEngine, MAX_CANDIDATE_LEN};
    use std::sync::Arc;

    fn unit_ranker() -> Ranker {
        Ranker::new(DistanceEngine::new(Arc::new(CostCache::new(
            |a: char, b: char| if a == b { 0.0 } else { 1.0 },
        ))))
    }

    #[test]
    fn test_rank_orders_by_prefix_distance() {
        let mut ranker = unit_ranker();

        let ranked = ranker
            .rank("cat", ["dog", "category", "cart", "cat"])
            .unwrap();

        let terms: Vec<&str> = ranked.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(&terms[..2], &["cat", "category"]);
        assert_eq!(ranked[0].distances.full, 0.0);
    }

    #[test]
    fn test_full_distance_breaks_prefix_ties() {
        let mut ranker = unit_ranker();

        // Both have prefix distance 0; "cat" has the smaller full distance.
        let ranked = ranker.rank("cat", ["category", "cat"]).unwrap();
        assert_eq!(ranked[0].term, "cat");
    }

    #[test]
    fn test_rank_skips_bad_candidates() {
        let mut ranker = unit_ranker();
        let oversized = "x".repeat(MAX_CANDIDATE_LEN + 1);

        let ranked = ranker
            .rank("cat", ["cat", "", oversized.as_str()])
            .unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].term, "cat");
    }

    #[test]
    fn test_rank_propagates_query_error() {
        let mut ranker = unit_ranker();
        assert!(ranker.rank("", ["cat"]).is_err());
    }

    #[test]
    fn test_rank_empty_dictionary() {
        let mut ranker = unit_ranker();
        let ranked = ranker.rank("cat", [] as [&str; 0]).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_cut_at_threshold() {
        let mut ranker = unit_ranker();

        let ranked = ranker
            .rank("cat", ["cat", "category", "cart", "dog"])
            .unwrap();
        let accepted = cut_at(&ranked, 1.0);

        assert!(accepted.iter().all(|s| s.distances.prefix <= 1.0));
        assert!(accepted.len() >= 2); // "cat" and "category" at least
        assert!(accepted.len() < ranked.len()); // "dog" rejected
    }

    #[test]
    fn test_cut_at_keeps_everything_under_large_threshold() {
        let mut ranker = unit_ranker();

        let ranked = ranker.rank("cat", ["cat", "dog"]).unwrap();
        assert_eq!(cut_at(&ranked, 1000.0).len(), 2);
    }

    #[test]
    fn test_cut_at_empty() {
        assert!(cut_at(&[], 1.0).is_empty());
    }
}
