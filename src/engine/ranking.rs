// ==========================================
// Waste Remediation Planner - ranking engine
// ==========================================
// Responsibility: the composite centre ordering and its
// single-key helper queries
// Input: candidate centres, already validated
// Output: Ordering / filtered lists, input order preserved
// ==========================================

use crate::domain::site::{Historic, Recycling};
use std::cmp::Ordering;

// ==========================================
// CentreRanker
// ==========================================
pub struct CentreRanker {
    // stateless engine, no injected dependencies
}

impl CentreRanker {
    pub fn new() -> Self {
        Self {}
    }

    /// Composite priority comparison of two centres relative to a
    /// historic site. `Ordering::Less` means `a` is preferred.
    ///
    /// Keys, in order:
    /// 1) travel time ascending (nearer wins)
    /// 2) generation descending (Gamma beats Beta beats Alpha)
    /// 3) years active ascending (newer-equivalent wins)
    ///
    /// Candidates equal under all three keys compare as `Equal`;
    /// callers resolve such ties by input position.
    pub fn compare(&self, historic: &Historic, a: &Recycling, b: &Recycling) -> Ordering {
        let travel_a = historic.location().travel_time(a.location());
        let travel_b = historic.location().travel_time(b.location());

        travel_a
            .total_cmp(&travel_b)
            .then_with(|| b.generation().cmp(&a.generation()))
            .then_with(|| a.years_active().cmp(&b.years_active()))
    }

    /// Ordering of two centres by generation alone, ascending
    /// (Alpha lowest, Gamma highest).
    pub fn compare_generations(&self, a: &Recycling, b: &Recycling) -> Ordering {
        a.generation().cmp(&b.generation())
    }

    /// All candidates carrying the highest generation present in
    /// the list, input order preserved. Empty for empty input.
    pub fn find_highest_generations(&self, candidates: &[Recycling]) -> Vec<Recycling> {
        let Some(highest) = candidates.iter().map(Recycling::generation).max() else {
            return Vec::new();
        };

        candidates
            .iter()
            .filter(|centre| centre.generation() == highest)
            .copied()
            .collect()
    }

    /// All candidates with the fewest years active, input order
    /// preserved. Empty for empty input.
    pub fn find_least_years_active(&self, candidates: &[Recycling]) -> Vec<Recycling> {
        let Some(least) = candidates.iter().map(Recycling::years_active).min() else {
            return Vec::new();
        };

        candidates
            .iter()
            .filter(|centre| centre.years_active() == least)
            .copied()
            .collect()
    }
}
