//! Memoized results keyed by the multiset of input values

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use log::debug;

use crate::expression::format_number;

/// Order-independent identity of an input: the values sorted ascending and
/// joined with commas, e.g. `3,4,8,12`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn new(numbers: &[f64]) -> Self {
        let mut sorted = numbers.to_vec();
        sorted.sort_by(f64::total_cmp);

        let joined = sorted
            .into_iter()
            .map(format_number)
            .collect::<Vec<_>>()
            .join(",");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two write-once maps: whether a key is solvable, and the witness found for
/// it (`None` once a search came up empty).
///
/// Entries are never evicted. The first value recorded for a key wins, so
/// concurrent callers that both miss and both search still observe a single
/// answer.
#[derive(Debug, Default)]
pub struct SolutionCache {
    solvable: RwLock<HashMap<CanonicalKey, bool>>,
    solutions: RwLock<HashMap<CanonicalKey, Option<String>>>,
}

impl SolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solvable(&self, key: &CanonicalKey) -> Option<bool> {
        let map = self.solvable.read().unwrap_or_else(PoisonError::into_inner);
        map.get(key).copied()
    }

    /// Record a verdict and return the one now stored for `key`
    pub fn record_solvable(&self, key: CanonicalKey, solvable: bool) -> bool {
        let mut map = self.solvable.write().unwrap_or_else(PoisonError::into_inner);
        let stored = *map.entry(key).or_insert(solvable);
        if stored != solvable {
            debug!("Kept earlier verdict {} over {}", stored, solvable);
        }
        stored
    }

    /// Outer `None` means the key was never searched, inner `None` that it has
    /// no solution
    pub fn solution(&self, key: &CanonicalKey) -> Option<Option<String>> {
        let map = self.solutions.read().unwrap_or_else(PoisonError::into_inner);
        map.get(key).cloned()
    }

    /// Record a witness (or its absence) and return the one now stored for `key`
    pub fn record_solution(&self, key: CanonicalKey, solution: Option<String>) -> Option<String> {
        let mut map = self.solutions.write().unwrap_or_else(PoisonError::into_inner);
        map.entry(key).or_insert(solution).clone()
    }

    /// Number of keys with a recorded verdict
    pub fn solvable_len(&self) -> usize {
        self.solvable
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of keys with a recorded witness or recorded absence of one
    pub fn solution_len(&self) -> usize {
        self.solutions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvable_len() == 0 && self.solution_len() == 0
    }
}
