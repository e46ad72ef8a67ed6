use log::info;
use rayon::prelude::*;

use crate::solver::core::Solver24;
use crate::utils::card_hands;

/// Solvability of every hand over `1..=max_card`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyReport {
    pub max_card: u32,
    pub total: usize,
    pub solvable: usize,
    /// In the order [`card_hands`] lists them
    pub unsolvable: Vec<[u32; 4]>,
}

impl SurveyReport {
    pub fn solvable_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.solvable as f64 / self.total as f64
        }
    }
}

impl Solver24 {
    /// Check every hand of four cards from `1..=max_card` in parallel.
    ///
    /// Verdicts land in this solver's cache, so later queries for any of the
    /// hands, in any order, are cache hits.
    pub fn survey(&self, max_card: u32) -> SurveyReport {
        let hands = card_hands(max_card);
        info!("Surveying {} hands up to {}", hands.len(), max_card);

        let verdicts: Vec<([u32; 4], bool)> = hands
            .par_iter()
            .map(|hand| (*hand, self.has_solution(&hand.map(f64::from))))
            .collect();

        let unsolvable: Vec<[u32; 4]> = verdicts
            .iter()
            .filter(|(_, solvable)| !solvable)
            .map(|(hand, _)| *hand)
            .collect();

        let report = SurveyReport {
            max_card,
            total: verdicts.len(),
            solvable: verdicts.len() - unsolvable.len(),
            unsolvable,
        };
        info!("{} of {} hands solvable", report.solvable, report.total);
        report
    }
}
