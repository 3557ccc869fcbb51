//! # levenrank
//!
//! Typo-tolerant ranking of dictionary terms against a user-typed query,
//! built for incremental ("search-as-you-type") lookup over short terms
//! such as card names.
//!
//! The crate is composed of three small pieces:
//!
//! - [`distance`]: a weighted Damerau-Levenshtein engine that computes both
//!   the full edit distance and a *prefix distance* (the cheapest alignment
//!   of the whole query against any prefix of the candidate) in a single
//!   dynamic-programming pass over a reusable scratch matrix.
//! - [`cost`]: a shared, thread-safe cache over an injected per-character
//!   substitution-cost provider, keyed on unordered character pairs.
//! - [`search`]: a leftmost-true search over a monotone predicate, used to
//!   cut a ranked candidate list at an acceptance threshold.
//!
//! ## Example
//!
//! ```rust
//! use levenrank::prelude::*;
//! use std::sync::Arc;
//!
//! let costs = Arc::new(CostCache::new(KeyboardProximityCost::new()));
//! let mut ranker = Ranker::new(DistanceEngine::new(Arc::clone(&costs)));
//!
//! let ranked = ranker.rank("cat", ["dog", "category", "cart"]).unwrap();
//! assert_eq!(ranked[0].term, "category"); // exact prefix, distance 0
//!
//! let accepted = cut_at(&ranked, 2.0);
//! assert!(accepted.len() < ranked.len()); // "dog" falls past the threshold
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cost;
pub mod distance;
pub mod search;
pub mod suggest;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::cost::{CostCache, KeyboardProximityCost, SubstitutionCost};
    pub use crate::distance::{
        DistanceEngine, Distances, ValidationError, MAX_CANDIDATE_LEN, MAX_QUERY_LEN,
    };
    pub use crate::search::first_index_satisfying;
    pub use crate::suggest::{cut_at, Ranker, Suggestion};
}
