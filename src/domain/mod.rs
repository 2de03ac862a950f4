// ==========================================
// Waste Remediation Planner - domain layer
// ==========================================
// Responsibility: entities, closed value types, construction rules
// Rule: no engine logic, no IO
// ==========================================

pub mod error;
pub mod site;
pub mod transport;
pub mod types;

// Re-export core types
pub use error::DomainError;
pub use site::{Historic, Recycling, MAX_YEARS_ACTIVE, METALLIC_SPLIT_THRESHOLD_M3};
pub use transport::Transport;
pub use types::{Generation, Location};
