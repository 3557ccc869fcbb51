//! Weighted edit distance between a typed query and dictionary candidates.
//!
//! The engine computes a Damerau-Levenshtein-style distance with a custom
//! cost model: insertions and deletions cost a flat 2.0 per character,
//! substitutions cost whatever the injected provider says (see
//! [`crate::cost`]), and swapping two adjacent characters costs 1.0.
//!
//! Alongside the full distance it reports a *prefix distance*: the cheapest
//! alignment of the entire query against any prefix of the candidate. A
//! user who has typed `"cat"` meaning `"category"` gets a prefix distance
//! of zero even though the full distance is large.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::cost::CostCache;

/// Maximum query length, in case-folded characters.
pub const MAX_QUERY_LEN: usize = 80;

/// Maximum candidate length, in case-folded characters.
pub const MAX_CANDIDATE_LEN: usize = 200;

/// Flat weight of inserting or deleting one character.
const INDEL_WEIGHT: f32 = 2.0;

/// Flat weight of swapping two adjacent characters.
const TRANSPOSE_WEIGHT: f32 = 1.0;

/// Row stride of the scratch matrix.
const STRIDE: usize = MAX_CANDIDATE_LEN + 1;

/// The two distances computed for a (query, candidate) pair.
///
/// `prefix <= full` always holds: the full candidate is itself one of the
/// prefixes the prefix distance minimizes over.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distances {
    /// Minimum cost of transforming the query into any prefix of the
    /// candidate (including the empty prefix, if that is cheapest).
    pub prefix: f32,
    /// Cost of transforming the query into the full candidate.
    pub full: f32,
}

/// Input rejected before any computation.
///
/// The length limits exist because the scratch matrix is preallocated to a
/// fixed bound for reuse; they are not intrinsic to the algorithm. Lengths
/// are measured in case-folded characters, since the folded text is what
/// the matrix holds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The query string is empty.
    #[error("query string is empty")]
    EmptyQuery,
    /// The candidate string is empty.
    #[error("candidate string is empty")]
    EmptyCandidate,
    /// The query exceeds [`MAX_QUERY_LEN`] characters.
    #[error("query length exceeds {MAX_QUERY_LEN}: {len}")]
    QueryTooLong {
        /// Folded length of the rejected query.
        len: usize,
    },
    /// The candidate exceeds [`MAX_CANDIDATE_LEN`] characters.
    #[error("candidate length exceeds {MAX_CANDIDATE_LEN}: {len}")]
    CandidateTooLong {
        /// Folded length of the rejected candidate.
        len: usize,
    },
}

/// Distance engine with a reusable scratch matrix.
///
/// The matrix is sized to the maximum bounds at construction and mutated in
/// place on every call, so one instance must not be used from two threads
/// at once; `distances` takes `&mut self` to make that a compile-time
/// guarantee. Spawn one engine per worker thread and share the
/// [`CostCache`] between them.
pub struct DistanceEngine {
    costs: Arc<CostCache>,
    matrix: Vec<f32>,
}

impl DistanceEngine {
    /// Create an engine sharing the given cost cache.
    pub fn new(costs: Arc<CostCache>) -> Self {
        Self {
            costs,
            matrix: vec![0.0; (MAX_QUERY_LEN + 1) * STRIDE],
        }
    }

    /// Compute the prefix and full distance for a (query, candidate) pair.
    ///
    /// Both strings are case-folded before comparison, so matching is
    /// case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when either string is empty or exceeds
    /// its length bound.
    ///
    /// # Example
    ///
    /// ```rust
    /// use levenrank::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let costs = Arc::new(CostCache::new(KeyboardProximityCost::new()));
    /// let mut engine = DistanceEngine::new(costs);
    ///
    /// let d = engine.distances("cat", "category").unwrap();
    /// assert_eq!(d.prefix, 0.0);
    /// assert!(d.full > 0.0);
    /// ```
    pub fn distances(&mut self, query: &str, candidate: &str) -> Result<Distances, ValidationError> {
        let query = fold(query);
        let candidate = fold(candidate);
        validate(&query, &candidate)?;

        self.fill(&query, &candidate);

        let last_row = &self.matrix[query.len() * STRIDE..query.len() * STRIDE + candidate.len() + 1];

        let mut prefix = last_row[0];
        for &cell in &last_row[1..] {
            if cell < prefix {
                prefix = cell;
            }
        }

        Ok(Distances {
            prefix,
            full: last_row[candidate.len()],
        })
    }

    /// Convenience accessor for the prefix distance alone.
    ///
    /// Equal to `self.distances(query, candidate)?.prefix`.
    pub fn prefix_distance(&mut self, query: &str, candidate: &str) -> Result<f32, ValidationError> {
        Ok(self.distances(query, candidate)?.prefix)
    }

    /// Fill the valid `(q.len()+1) x (c.len()+1)` region of the matrix.
    fn fill(&mut self, q: &[char], c: &[char]) {
        let m = q.len();
        let n = c.len();

        for i in 0..=m {
            self.matrix[i * STRIDE] = i as f32 * INDEL_WEIGHT;
        }
        for j in 0..=n {
            self.matrix[j] = j as f32 * INDEL_WEIGHT;
        }

        for i in 1..=m {
            for j in 1..=n {
                let substitution = self.costs.cost_of(q[i - 1], c[j - 1]);

                let mut best = (self.matrix[(i - 1) * STRIDE + j] + INDEL_WEIGHT)
                    .min(self.matrix[i * STRIDE + j - 1] + INDEL_WEIGHT)
                    .min(self.matrix[(i - 1) * STRIDE + j - 1] + substitution);

                // Adjacent transposition
                if i > 1 && j > 1 && q[i - 1] == c[j - 2] && q[i - 2] == c[j - 1] {
                    best = best.min(self.matrix[(i - 2) * STRIDE + j - 2] + TRANSPOSE_WEIGHT);
                }

                self.matrix[i * STRIDE + j] = best;
            }
        }
    }
}

/// Locale-invariant lowercase fold.
fn fold(s: &str) -> SmallVec<[char; 32]> {
    s.chars().flat_map(char::to_lowercase).collect()
}

fn validate(query: &[char], candidate: &[char]) -> Result<(), ValidationError> {
    if query.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }
    if candidate.is_empty() {
        return Err(ValidationError::EmptyCandidate);
    }
    if query.len() > MAX_QUERY_LEN {
        return Err(ValidationError::QueryTooLong { len: query.len() });
    }
    if candidate.len() > MAX_CANDIDATE_LEN {
        return Err(ValidationError::CandidateTooLong {
            len: candidate.len(),
        });
    }
    Ok(())
}
