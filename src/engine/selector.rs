// ==========================================
// Waste Remediation Planner - optimal-centre selection
// ==========================================
// Responsibility: compose viability filtering with the
// composite ranking to pick the single destination centre
// Rule: eligibility comes from ViabilityEngine only; this
// engine never restates the admission rules
// ==========================================

use crate::domain::site::{Historic, Recycling};
use crate::engine::ranking::CentreRanker;
use crate::engine::viability::ViabilityEngine;
use std::cmp::Ordering;
use tracing::{debug, instrument};

// ==========================================
// OptimalCentreSelector
// ==========================================
pub struct OptimalCentreSelector {
    viability: ViabilityEngine,
    ranker: CentreRanker,
}

impl OptimalCentreSelector {
    pub fn new() -> Self {
        Self {
            viability: ViabilityEngine::new(),
            ranker: CentreRanker::new(),
        }
    }

    /// Pick the best viable centre for the historic site.
    ///
    /// `None` when no candidate passes the viability rules.
    /// Otherwise the minimum of the viable subset under the
    /// (travel time, generation, years active) composite key;
    /// among candidates fully tied on all keys the one earliest
    /// in input order wins, so identical inputs always yield the
    /// identical choice.
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub fn find_optimal_centre(
        &self,
        historic: &Historic,
        candidates: &[Recycling],
    ) -> Option<Recycling> {
        let viable = self.viability.find_viable_centres(historic, candidates);

        let mut best: Option<Recycling> = None;
        for centre in viable {
            match best {
                None => best = Some(centre),
                // strict improvement only, so earlier candidates win ties
                Some(current) => {
                    if self.ranker.compare(historic, &centre, &current) == Ordering::Less {
                        best = Some(centre);
                    }
                }
            }
        }

        match &best {
            Some(centre) => debug!(
                generation = %centre.generation(),
                location = %centre.location(),
                years_active = centre.years_active(),
                "optimal centre selected"
            ),
            None => debug!("no viable centre among candidates"),
        }

        best
    }
}
