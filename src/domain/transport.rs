// ==========================================
// Waste Remediation Planner - transport record
// ==========================================
// Responsibility: value object for one shipment between two
// sites; shares the Location travel-time lookup
// Rule: not consumed by the selection engines
// ==========================================

use crate::domain::error::DomainError;
use crate::domain::types::Location;
use serde::Serialize;

/// One shipment of waste between two sites.
///
/// Ephemeral per shipment; the waste quantities start at zero
/// and are set by the caller as the load is composed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transport {
    start: Location,
    end: Location,
    paper_waste: f64,
    plastic_glass_waste: f64,
    metallic_waste: f64,
}

impl Transport {
    /// Create an empty shipment between two sites.
    pub fn new(start: Location, end: Location) -> Self {
        Self {
            start,
            end,
            paper_waste: 0.0,
            plastic_glass_waste: 0.0,
            metallic_waste: 0.0,
        }
    }

    pub fn start(&self) -> Location {
        self.start
    }

    pub fn end(&self) -> Location {
        self.end
    }

    pub fn paper_waste(&self) -> f64 {
        self.paper_waste
    }

    pub fn plastic_glass_waste(&self) -> f64 {
        self.plastic_glass_waste
    }

    pub fn metallic_waste(&self) -> f64 {
        self.metallic_waste
    }

    /// Sum of the three waste quantities.
    pub fn total_waste(&self) -> f64 {
        self.paper_waste + self.plastic_glass_waste + self.metallic_waste
    }

    /// One-way travel time for this shipment, from the fixed
    /// location matrix.
    pub fn travel_time(&self) -> f64 {
        self.start.travel_time(self.end)
    }

    /// # Errors
    /// `DomainError::NegativeWaste` when `volume < 0`; the field
    /// is left unchanged.
    pub fn set_paper_waste(&mut self, volume: f64) -> Result<(), DomainError> {
        if volume < 0.0 {
            return Err(DomainError::NegativeWaste);
        }
        self.paper_waste = volume;
        Ok(())
    }

    /// # Errors
    /// `DomainError::NegativeWaste` when `volume < 0`.
    pub fn set_plastic_glass_waste(&mut self, volume: f64) -> Result<(), DomainError> {
        if volume < 0.0 {
            return Err(DomainError::NegativeWaste);
        }
        self.plastic_glass_waste = volume;
        Ok(())
    }

    /// # Errors
    /// `DomainError::NegativeWaste` when `volume < 0`.
    pub fn set_metallic_waste(&mut self, volume: f64) -> Result<(), DomainError> {
        if volume < 0.0 {
            return Err(DomainError::NegativeWaste);
        }
        self.metallic_waste = volume;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_travel_time_uses_location_matrix() {
        assert_eq!(Transport::new(Location::A, Location::B).travel_time(), 2.0);
        assert_eq!(Transport::new(Location::B, Location::C).travel_time(), 3.0);
        assert_eq!(Transport::new(Location::A, Location::C).travel_time(), 4.0);
        assert_eq!(Transport::new(Location::A, Location::A).travel_time(), 0.0);
    }

    #[test]
    fn test_transport_travel_time_is_symmetric() {
        let ab = Transport::new(Location::A, Location::B);
        let ba = Transport::new(Location::B, Location::A);
        assert_eq!(ab.travel_time(), ba.travel_time());
    }

    #[test]
    fn test_transport_total_waste_sums_streams() {
        let mut transport = Transport::new(Location::A, Location::B);
        transport.set_paper_waste(100.0).unwrap();
        transport.set_plastic_glass_waste(200.0).unwrap();
        transport.set_metallic_waste(50.0).unwrap();
        assert_eq!(transport.total_waste(), 350.0);
    }

    #[test]
    fn test_transport_empty_shipment_has_zero_waste() {
        let transport = Transport::new(Location::A, Location::B);
        assert_eq!(transport.total_waste(), 0.0);
    }

    #[test]
    fn test_transport_rejects_negative_waste() {
        let mut transport = Transport::new(Location::A, Location::B);
        let err = transport.set_metallic_waste(-10.0).unwrap_err();
        assert_eq!(err.to_string(), "Waste cannot be negative.");
        // rejected set leaves the field unchanged
        assert_eq!(transport.metallic_waste(), 0.0);
    }
}
