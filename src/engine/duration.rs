// ==========================================
// Waste Remediation Planner - duration estimation
// ==========================================
// Responsibility: rough planning estimates for hauling and
// processing a site's waste at a candidate centre
// Rule: estimates only, no admission or ranking logic
// ==========================================

use crate::domain::site::{Historic, Recycling};

// Volume one shipment can carry, m3 per trip.
pub const TRANSPORT_CAPACITY_M3: f64 = 20.0;

// ==========================================
// DurationEstimator
// ==========================================
pub struct DurationEstimator {
    // stateless engine, no injected dependencies
}

impl DurationEstimator {
    pub fn new() -> Self {
        Self {}
    }

    /// Hours of hauling needed to move the site's remaining
    /// waste to the centre: full shipments of 20 m3 (the last
    /// trip rounds up) at the one-way travel time. Zero when the
    /// centre is co-located with the site.
    pub fn estimate_travel_duration(&self, historic: &Historic, centre: &Recycling) -> f64 {
        let travel = historic.location().travel_time(centre.location());
        let trips = (historic.remaining_waste() / TRANSPORT_CAPACITY_M3).ceil();
        trips * travel
    }

    /// Hours the centre needs to process the site's current
    /// category volumes at its generation's rates, streams
    /// processed one after another.
    pub fn estimate_process_duration(&self, historic: &Historic, centre: &Recycling) -> f64 {
        let [plastic_glass_rate, paper_rate, metallic_rate] = centre.rates();

        historic.plastic_glass() / plastic_glass_rate
            + historic.paper() / paper_rate
            + historic.metallic() / metallic_rate
    }
}
