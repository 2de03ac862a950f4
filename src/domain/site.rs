// ==========================================
// Waste Remediation Planner - site entities
// ==========================================
// Responsibility: the historic contaminated site and the
// recycling centre candidates
// Rule: all range validation happens at construction;
// engines read current field values and never write them
// ==========================================

use crate::domain::error::DomainError;
use crate::domain::types::{Generation, Location};
use serde::Serialize;

// Waste volume above which the split produces a metallic share.
// At exactly the threshold the no-metallic branch applies.
pub const METALLIC_SPLIT_THRESHOLD_M3: f64 = 1250.0;

// Upper bound for a centre's years in operation.
pub const MAX_YEARS_ACTIVE: i32 = 100;

// ==========================================
// Historic - the contaminated site
// ==========================================
// The category volumes are derived once at construction and
// are independently mutable afterwards; they are never
// re-derived from `remaining_waste`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Historic {
    location: Location,
    remaining_waste: f64,
    plastic_glass: f64,
    paper: f64,
    metallic: f64,
}

impl Historic {
    /// Create a historic site and split `initial_waste` into
    /// category volumes.
    ///
    /// Split rule (hard cutoff at 1250 m3):
    /// - `initial_waste <= 1250`: 50% plastic/glass, 50% paper, no metallic
    /// - `initial_waste > 1250`: 30% plastic/glass, 50% paper, 20% metallic
    ///
    /// # Errors
    /// `DomainError::NegativeWaste` when `initial_waste < 0`.
    pub fn new(location: Location, initial_waste: f64) -> Result<Self, DomainError> {
        if initial_waste < 0.0 {
            return Err(DomainError::NegativeWaste);
        }

        let (plastic_glass, paper, metallic) = if initial_waste <= METALLIC_SPLIT_THRESHOLD_M3 {
            (initial_waste * 0.5, initial_waste * 0.5, 0.0)
        } else {
            (initial_waste * 0.30, initial_waste * 0.50, initial_waste * 0.20)
        };

        Ok(Self {
            location,
            remaining_waste: initial_waste,
            plastic_glass,
            paper,
            metallic,
        })
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn remaining_waste(&self) -> f64 {
        self.remaining_waste
    }

    pub fn plastic_glass(&self) -> f64 {
        self.plastic_glass
    }

    pub fn paper(&self) -> f64 {
        self.paper
    }

    pub fn metallic(&self) -> f64 {
        self.metallic
    }

    /// Overwrite the total remaining volume. Does not touch the
    /// category volumes.
    pub fn set_remaining_waste(&mut self, volume: f64) {
        self.remaining_waste = volume;
    }

    pub fn set_plastic_glass(&mut self, volume: f64) {
        self.plastic_glass = volume;
    }

    pub fn set_paper(&mut self, volume: f64) {
        self.paper = volume;
    }

    /// Overwrite the metallic volume. Callers use this to model
    /// depletion or to force Gamma eligibility.
    pub fn set_metallic(&mut self, volume: f64) {
        self.metallic = volume;
    }
}

// ==========================================
// Recycling - a candidate centre
// ==========================================
// A centre is a fixed (generation, rates) bundle attached to a
// (location, years_active) pair. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recycling {
    generation: Generation,
    location: Location,
    years_active: i32,
}

impl Recycling {
    /// Create a centre of the given generation.
    ///
    /// # Errors
    /// - `DomainError::NegativeYearsActive` when `years_active < 0`
    /// - `DomainError::YearsActiveTooLarge` when `years_active > 100`
    pub fn new(
        generation: Generation,
        location: Location,
        years_active: i32,
    ) -> Result<Self, DomainError> {
        if years_active < 0 {
            return Err(DomainError::NegativeYearsActive);
        }
        if years_active > MAX_YEARS_ACTIVE {
            return Err(DomainError::YearsActiveTooLarge);
        }

        Ok(Self {
            generation,
            location,
            years_active,
        })
    }

    /// Convenience constructor for an Alpha-generation centre.
    pub fn alpha(location: Location, years_active: i32) -> Result<Self, DomainError> {
        Self::new(Generation::Alpha, location, years_active)
    }

    /// Convenience constructor for a Beta-generation centre.
    pub fn beta(location: Location, years_active: i32) -> Result<Self, DomainError> {
        Self::new(Generation::Beta, location, years_active)
    }

    /// Convenience constructor for a Gamma-generation centre.
    pub fn gamma(location: Location, years_active: i32) -> Result<Self, DomainError> {
        Self::new(Generation::Gamma, location, years_active)
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn years_active(&self) -> i32 {
        self.years_active
    }

    /// Fixed processing-rate vector of this centre's generation,
    /// in stream order (plastic/glass, paper, metallic).
    pub fn rates(&self) -> [f64; 3] {
        self.generation.rates()
    }
}
