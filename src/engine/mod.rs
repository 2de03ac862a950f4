// ==========================================
// Waste Remediation Planner - engine layer
// ==========================================
// Responsibility: business-rule engines over caller-supplied
// domain entities
// Rule: engines are stateless and pure; they read current
// entity values at call time and never mutate them
// ==========================================

pub mod duration;
pub mod ranking;
pub mod selector;
pub mod viability;

// Re-export core engines
pub use duration::{DurationEstimator, TRANSPORT_CAPACITY_M3};
pub use ranking::CentreRanker;
pub use selector::OptimalCentreSelector;
pub use viability::{ViabilityEngine, MAX_TRAVEL_TIME_HOURS};
