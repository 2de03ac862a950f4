// ==========================================
// Waste Remediation Planner - viability engine
// ==========================================
// Responsibility: travel-time admission and metallic eligibility
// Input: historic site + raw candidate list
// Output: filtered candidate lists, input order preserved
// Rule: every exclusion logs its reason
// ==========================================

use crate::domain::site::{Historic, Recycling};
use crate::domain::types::Generation;
use tracing::{debug, instrument};

// Maximum one-way travel time a shipment may take. A candidate
// at exactly this bound is admitted.
pub const MAX_TRAVEL_TIME_HOURS: f64 = 3.0;

// ==========================================
// ViabilityEngine
// ==========================================
pub struct ViabilityEngine {
    // stateless engine, no injected dependencies
}

impl ViabilityEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// Viability predicate for one candidate.
    ///
    /// A candidate is viable iff both hold:
    /// 1) one-way travel time from the historic site is <= 3h;
    /// 2) a Gamma-generation centre additionally requires the
    ///    site to hold metallic waste (> 0). Alpha and Beta are
    ///    exempt from the metallic condition.
    ///
    /// This is the single source of truth for eligibility; the
    /// optimal-centre selection reuses it rather than restating
    /// the rules.
    pub fn is_viable(&self, historic: &Historic, centre: &Recycling) -> bool {
        let travel = historic.location().travel_time(centre.location());
        if travel > MAX_TRAVEL_TIME_HOURS {
            debug!(
                centre = %centre.generation(),
                location = %centre.location(),
                travel,
                "excluded: travel time exceeds admission bound"
            );
            return false;
        }

        if centre.generation() == Generation::Gamma && historic.metallic() <= 0.0 {
            debug!(
                location = %centre.location(),
                "excluded: Gamma centre but site holds no metallic waste"
            );
            return false;
        }

        true
    }

    /// Filter `candidates` down to the viable subset.
    ///
    /// Returns an order-preserving subsequence; empty when
    /// nothing qualifies, never panics on an empty input.
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub fn find_viable_centres(
        &self,
        historic: &Historic,
        candidates: &[Recycling],
    ) -> Vec<Recycling> {
        candidates
            .iter()
            .filter(|centre| self.is_viable(historic, centre))
            .copied()
            .collect()
    }

    /// All candidates achieving the minimum travel time.
    ///
    /// Operates on the raw candidate list: neither the travel
    /// admission bound nor the metallic rule applies here. The
    /// asymmetry with `find_viable_centres` is intentional and
    /// observable behaviour. Ties are all included, input order
    /// preserved; empty input yields an empty result.
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub fn find_nearest_centres(
        &self,
        historic: &Historic,
        candidates: &[Recycling],
    ) -> Vec<Recycling> {
        let minimum = candidates
            .iter()
            .map(|centre| historic.location().travel_time(centre.location()))
            .fold(f64::INFINITY, f64::min);

        // travel times are exact table constants, equality is safe
        candidates
            .iter()
            .filter(|centre| historic.location().travel_time(centre.location()) == minimum)
            .copied()
            .collect()
    }
}
