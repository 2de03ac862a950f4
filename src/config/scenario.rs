// ==========================================
// Waste Remediation Planner - scenario configuration
// ==========================================
// Responsibility: raw scenario descriptions (string literals,
// unchecked numbers) validated into domain entities
// Rule: validation fails on the first invalid entry; an
// invalid candidate is never skipped
// ==========================================

use crate::domain::error::DomainError;
use crate::domain::site::{Historic, Recycling};
use crate::domain::types::{Generation, Location};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

// ==========================================
// Raw scenario description (serde side)
// ==========================================

/// Unvalidated scenario as read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub historic: HistoricSpec,
    #[serde(default)]
    pub centres: Vec<CentreSpec>,
}

/// Raw historic-site description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricSpec {
    pub location: String,
    pub initial_waste: f64,
}

/// Raw recycling-centre description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentreSpec {
    pub generation: String,
    pub location: String,
    pub years_active: i32,
}

impl ScenarioSpec {
    /// Parse a scenario from a JSON string.
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("failed to parse scenario JSON")
    }

    /// Read and parse a scenario file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("invalid scenario file {}", path.display()))
    }

    /// Validate every literal and range and build the scenario.
    ///
    /// # Errors
    /// The `DomainError` of the first invalid entry: unknown
    /// location or generation literal, negative waste, or
    /// years-active out of range.
    pub fn build(&self) -> Result<ScenarioConfiguration, DomainError> {
        let location: Location = self.historic.location.parse()?;
        let historic = Historic::new(location, self.historic.initial_waste)?;

        let mut centres = Vec::with_capacity(self.centres.len());
        for spec in &self.centres {
            let generation: Generation = spec.generation.parse()?;
            let location: Location = spec.location.parse()?;
            centres.push(Recycling::new(generation, location, spec.years_active)?);
        }

        debug!(centres = centres.len(), "scenario built");
        Ok(ScenarioConfiguration::new(historic, centres))
    }
}

// ==========================================
// Validated scenario (domain side)
// ==========================================

/// One planning scenario: a historic site plus the candidate
/// centres under evaluation, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfiguration {
    historic: Historic,
    recycling: Vec<Recycling>,
}

impl ScenarioConfiguration {
    pub fn new(historic: Historic, recycling: Vec<Recycling>) -> Self {
        Self { historic, recycling }
    }

    pub fn historic(&self) -> &Historic {
        &self.historic
    }

    /// Mutable handle for callers that model depletion between
    /// selection runs.
    pub fn historic_mut(&mut self) -> &mut Historic {
        &mut self.historic
    }

    pub fn recycling(&self) -> &[Recycling] {
        &self.recycling
    }

    pub fn set_historic(&mut self, historic: Historic) {
        self.historic = historic;
    }

    /// Append a candidate centre.
    pub fn add_recycling(&mut self, centre: Recycling) {
        self.recycling.push(centre);
    }
}
