// ==========================================
// Waste Remediation Planner - domain type definitions
// ==========================================
// Closed value types: the location set and the centre
// generation ladder are fixed and never extended at runtime
// ==========================================

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// Location
// ==========================================
// Three named sites with a fixed symmetric travel-time matrix:
// A-B = 2h, B-C = 3h, A-C = 4h, same site = 0h
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    A,
    B,
    C,
}

impl Location {
    /// One-way travel time in hours to `other`.
    ///
    /// Symmetric in its arguments and zero exactly when both
    /// arguments are the same site.
    pub fn travel_time(self, other: Location) -> f64 {
        use Location::{A, B, C};
        match (self, other) {
            (A, A) | (B, B) | (C, C) => 0.0,
            (A, B) | (B, A) => 2.0,
            (B, C) | (C, B) => 3.0,
            (A, C) | (C, A) => 4.0,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::A => write!(f, "A"),
            Location::B => write!(f, "B"),
            Location::C => write!(f, "C"),
        }
    }
}

impl FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Location::A),
            "B" => Ok(Location::B),
            "C" => Ok(Location::C),
            other => Err(DomainError::InvalidLocation(other.to_string())),
        }
    }
}

// ==========================================
// Generation
// ==========================================
// Fixed centre capability ladder. The derived order
// Alpha < Beta < Gamma is the ranking order: a higher
// generation processes waste at higher rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Generation {
    Alpha,
    Beta,
    Gamma,
}

impl Generation {
    /// Fixed processing-rate vector for this generation, in
    /// stream order (plastic/glass, paper, metallic), m3/h.
    pub fn rates(self) -> [f64; 3] {
        match self {
            Generation::Alpha => [1.0, 1.0, 1.0],
            Generation::Beta => [1.5, 1.5, 1.5],
            Generation::Gamma => [1.5, 2.0, 3.0],
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generation::Alpha => write!(f, "Alpha"),
            Generation::Beta => write!(f, "Beta"),
            Generation::Gamma => write!(f, "Gamma"),
        }
    }
}

impl FromStr for Generation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Alpha" => Ok(Generation::Alpha),
            "Beta" => Ok(Generation::Beta),
            "Gamma" => Ok(Generation::Gamma),
            other => Err(DomainError::InvalidGeneration(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_time_same_location_is_zero() {
        assert_eq!(Location::A.travel_time(Location::A), 0.0);
        assert_eq!(Location::B.travel_time(Location::B), 0.0);
        assert_eq!(Location::C.travel_time(Location::C), 0.0);
    }

    #[test]
    fn test_travel_time_fixed_matrix() {
        assert_eq!(Location::A.travel_time(Location::B), 2.0);
        assert_eq!(Location::B.travel_time(Location::C), 3.0);
        assert_eq!(Location::A.travel_time(Location::C), 4.0);
    }

    #[test]
    fn test_travel_time_is_symmetric() {
        for a in [Location::A, Location::B, Location::C] {
            for b in [Location::A, Location::B, Location::C] {
                assert_eq!(a.travel_time(b), b.travel_time(a));
            }
        }
    }

    #[test]
    fn test_location_parse_rejects_unknown_literal() {
        let err = "D".parse::<Location>().unwrap_err();
        assert_eq!(err, DomainError::InvalidLocation("D".to_string()));
    }

    #[test]
    fn test_generation_order_matches_ranking() {
        assert!(Generation::Alpha < Generation::Beta);
        assert!(Generation::Beta < Generation::Gamma);
    }

    #[test]
    fn test_generation_rates_are_positive() {
        for gen in [Generation::Alpha, Generation::Beta, Generation::Gamma] {
            assert!(gen.rates().iter().all(|r| *r > 0.0));
        }
    }

    #[test]
    fn test_generation_parse_round_trip() {
        for gen in [Generation::Alpha, Generation::Beta, Generation::Gamma] {
            assert_eq!(gen.to_string().parse::<Generation>().unwrap(), gen);
        }
        assert!("Delta".parse::<Generation>().is_err());
    }
}
