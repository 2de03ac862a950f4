// ==========================================
// Waste Remediation Planner - core library
// ==========================================
// System role: decision support for routing a historic
// contaminated site's waste volumes to the single best
// recycling centre among a candidate list
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and closed value types
pub mod domain;

// Engine layer - business rules
pub mod engine;

// Configuration layer - scenario descriptions
pub mod config;

// Logging
pub mod logging;

// ==========================================
// Re-exports of core types
// ==========================================

// Domain types
pub use domain::types::{Generation, Location};

// Domain entities
pub use domain::{DomainError, Historic, Recycling, Transport};

// Engines
pub use engine::{CentreRanker, DurationEstimator, OptimalCentreSelector, ViabilityEngine};

// Configuration
pub use config::{ScenarioConfiguration, ScenarioSpec};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Waste Remediation Planner";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
