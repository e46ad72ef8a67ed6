use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info};

use crate::solver::cache::{CanonicalKey, SolutionCache};
use crate::solver::constants::INPUT_LEN;
use crate::solver::search::{self, Candidate};

/// Decides whether four numbers make 24, remembering every answer.
///
/// Answers depend only on the multiset of the input, so `[8, 4, 3, 12]` and
/// `[12, 3, 4, 8]` share a cache entry.
#[derive(Debug, Default)]
pub struct Solver24 {
    cache: SolutionCache,
    searches: AtomicUsize,
}

impl Solver24 {
    /// Create a solver with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether some ordering, operator triple and shape reaches 24.
    ///
    /// Anything other than exactly four numbers is `false` without a search.
    pub fn has_solution(&self, numbers: &[f64]) -> bool {
        let Ok(numbers) = <[f64; INPUT_LEN]>::try_from(numbers) else {
            debug!("Not a puzzle, {} numbers given", numbers.len());
            return false;
        };

        let key = CanonicalKey::new(&numbers);
        if let Some(cached) = self.cache.solvable(&key) {
            debug!("Verdict cache hit for {}", key);
            return cached;
        }

        debug!("Verdict cache miss for {}", key);
        let found = self.search(numbers).is_some();
        info!("{} solvable: {}", key, found);
        self.cache.record_solvable(key, found)
    }

    /// The first witness in search order, rendered like `((8 + 4) * 3) - 12`.
    ///
    /// Anything other than exactly four numbers is `None` without a search.
    pub fn get_solution(&self, numbers: &[f64]) -> Option<String> {
        let Ok(numbers) = <[f64; INPUT_LEN]>::try_from(numbers) else {
            debug!("Not a puzzle, {} numbers given", numbers.len());
            return None;
        };

        let key = CanonicalKey::new(&numbers);
        if let Some(cached) = self.cache.solution(&key) {
            debug!("Witness cache hit for {}", key);
            return cached;
        }

        debug!("Witness cache miss for {}", key);
        let solution = self
            .search(numbers)
            .map(|candidate| candidate.to_expression().to_string());
        match &solution {
            Some(expr) => info!("{} solved by {}", key, expr),
            None => info!("{} has no solution", key),
        }
        self.cache.record_solution(key, solution)
    }

    /// Number of full searches run so far; cache hits do not count
    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::Relaxed)
    }

    pub fn cache(&self) -> &SolutionCache {
        &self.cache
    }

    fn search(&self, numbers: [f64; INPUT_LEN]) -> Option<Candidate> {
        self.searches.fetch_add(1, Ordering::Relaxed);
        search::find_witness(numbers)
    }
}
