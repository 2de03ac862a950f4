// ==========================================
// Waste Remediation Planner - configuration layer
// ==========================================
// Responsibility: scenario descriptions and their validation
// into domain entities
// ==========================================

pub mod scenario;

// Re-export scenario configuration types
pub use scenario::{CentreSpec, HistoricSpec, ScenarioConfiguration, ScenarioSpec};
