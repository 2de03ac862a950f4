// ==========================================
// Waste Remediation Planner - domain errors
// ==========================================
// Responsibility: construction-time validation failures
// Rule: every message states the violated rule; engines
// assume valid entities and never re-validate
// ==========================================

use thiserror::Error;

/// Domain-level validation errors.
///
/// All validation is all-or-nothing at entity construction time.
/// Null-argument failures of the source contract do not exist here:
/// the closed enums and reference parameters make them unrepresentable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ==========================================
    // Closed-set literal errors
    // ==========================================
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid generation: {0}")]
    InvalidGeneration(String),

    // ==========================================
    // Range errors
    // ==========================================
    #[error("Waste cannot be negative.")]
    NegativeWaste,

    #[error("Years active cannot be negative.")]
    NegativeYearsActive,

    #[error("Years active cannot exceed 100.")]
    YearsActiveTooLarge,
}
