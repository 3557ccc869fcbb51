//! Pairwise substitution costs and their shared memoization cache.
//!
//! The distance engine never computes substitution costs itself; it asks a
//! [`CostCache`], which lazily delegates to an injected [`SubstitutionCost`]
//! provider and memoizes the result per *unordered* character pair. The
//! cache is the one piece of shared mutable state in the matching core and
//! is safe to share across engine instances on different threads.

use rustc_hash::FxHashMap;

#[cfg(feature = "dashmap")]
use dashmap::DashMap;

#[cfg(not(feature = "dashmap"))]
use parking_lot::RwLock;

/// Per-character substitution cost, supplied by the embedding application.
///
/// Implementations are expected to be symmetric (`cost(a, b) == cost(b, a)`)
/// and to return `0.0` when `a == b`. The cache relies on symmetry to store
/// one value per unordered pair; an asymmetric provider will have one of its
/// two values silently win.
///
/// A blanket impl covers plain closures:
///
/// ```rust
/// use levenrank::cost::CostCache;
///
/// let cache = CostCache::new(|a: char, b: char| if a == b { 0.0 } else { 1.5 });
/// assert_eq!(cache.cost_of('x', 'y'), 1.5);
/// ```
pub trait SubstitutionCost: Send + Sync {
    /// Cost of replacing `a` with `b` (or vice versa).
    fn cost(&self, a: char, b: char) -> f32;
}

impl<F> SubstitutionCost for F
where
    F: Fn(char, char) -> f32 + Send + Sync,
{
    fn cost(&self, a: char, b: char) -> f32 {
        self(a, b)
    }
}

/// An unordered pair of characters for use as a cache key.
///
/// Ensures that `(a, b)` and `(b, a)` are treated as identical keys,
/// leveraging the symmetry of the cost function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct CharPair {
    first: char,
    second: char,
}

impl CharPair {
    /// Create a new CharPair, ordering the characters canonically.
    #[inline(always)]
    fn new(a: char, b: char) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }
}

/// Thread-safe memoization cache over a [`SubstitutionCost`] provider.
///
/// Uses either `DashMap` (lock-free, feature "dashmap") or
/// `RwLock<FxHashMap>` (fast hash) for concurrent access. Entries are
/// populated lazily and never evicted; the character-pair domain is small
/// and finite, so unbounded growth is acceptable.
///
/// Under a race two threads may both invoke the provider for the same pair;
/// both observe a complete value consistent with what the provider returns.
/// A panicking provider memoizes nothing for that pair.
pub struct CostCache {
    provider: Box<dyn SubstitutionCost>,

    #[cfg(feature = "dashmap")]
    cache: DashMap<CharPair, f32>,

    #[cfg(not(feature = "dashmap"))]
    cache: RwLock<FxHashMap<CharPair, f32>>,
}

impl CostCache {
    /// Create a cache around the given cost provider.
    pub fn new(provider: impl SubstitutionCost + 'static) -> Self {
        Self {
            provider: Box::new(provider),

            #[cfg(feature = "dashmap")]
            cache: DashMap::new(),

            #[cfg(not(feature = "dashmap"))]
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// Substitution cost for the unordered pair `(a, b)`.
    ///
    /// Delegates to the provider on the first lookup of a pair and returns
    /// the memoized value afterwards, for either argument order.
    pub fn cost_of(&self, a: char, b: char) -> f32 {
        let key = CharPair::new(a, b);

        if let Some(value) = self.get(&key) {
            return value;
        }

        let value = self.provider.cost(a, b);
        self.insert(key, value);
        value
    }

    fn get(&self, key: &CharPair) -> Option<f32> {
        #[cfg(feature = "dashmap")]
        {
            self.cache.get(key).map(|entry| *entry)
        }

        #[cfg(not(feature = "dashmap"))]
        {
            self.cache.read().get(key).copied()
        }
    }

    fn insert(&self, key: CharPair, value: f32) {
        #[cfg(feature = "dashmap")]
        {
            self.cache.insert(key, value);
        }

        #[cfg(not(feature = "dashmap"))]
        {
            self.cache.write().insert(key, value);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        #[cfg(feature = "dashmap")]
        {
            self.cache.len()
        }

        #[cfg(not(feature = "dashmap"))]
        {
            self.cache.read().len()
        }
    }
}

/// Keyboard-proximity substitution costs for QWERTY layouts.
///
/// A typo is most often a neighboring key: replacing a character with an
/// adjacent one costs 1.0, with any other character 2.0, and identical
/// characters cost 0.0. Adjacency is approximated on an unstaggered grid
/// of the four main key rows.
pub struct KeyboardProximityCost {
    positions: FxHashMap<char, (i8, i8)>,
}

const KEY_ROWS: [&str; 4] = ["1234567890", "qwertyuiop", "asdfghjkl", "zxcvbnm"];

impl KeyboardProximityCost {
    /// Build the key-position table.
    pub fn new() -> Self {
        let mut positions = FxHashMap::default();
        for (row, keys) in KEY_ROWS.iter().enumerate() {
            for (col, key) in keys.chars().enumerate() {
                positions.insert(key, (row as i8, col as i8));
            }
        }
        Self { positions }
    }

    fn adjacent(&self, a: char, b: char) -> bool {
        match (self.positions.get(&a), self.positions.get(&b)) {
            (Some(&(ra, ca)), Some(&(rb, cb))) => (ra - rb).abs() <= 1 && (ca - cb).abs() <= 1,
            _ => false,
        }
    }
}

impl Default for KeyboardProximityCost {
    fn default() -> Self {
        Self::new()
    }
}

impl SubstitutionCost for KeyboardProximityCost {
    fn cost(&self, a: char, b: char) -> f32 {
        if a == b {
            0.0
        } else if self.adjacent(a, b) {
            1.0
        } else {
            2.0
        }
    }
}
