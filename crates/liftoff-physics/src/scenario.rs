//! Validated scenario construction: bodies plus a vehicle on its launch pad.

use std::collections::HashSet;

use tracing::debug;

use crate::body::{BodySpec, CelestialBody};
use crate::error::ScenarioError;
use crate::presets;
use crate::profile::VehicleProfile;
use crate::vehicle::{FlightTuning, Vehicle};

/// A ready-to-run session: the flat body list and the vehicle standing on
/// its start body.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub bodies: Vec<CelestialBody>,
    pub vehicle: Vehicle,
}

impl Scenario {
    /// Validate every input and place the vehicle on `start_body`.
    ///
    /// Fails on an empty body list, duplicate names, non-positive body or
    /// vehicle numbers, an unknown start body, or a start position that
    /// coincides with a body center.
    pub fn new(
        profile: VehicleProfile,
        specs: Vec<BodySpec>,
        start_body: &str,
        tuning: FlightTuning,
    ) -> Result<Self, ScenarioError> {
        if specs.is_empty() {
            return Err(ScenarioError::NoBodies);
        }
        profile.validate()?;

        let mut seen = HashSet::new();
        for spec in &specs {
            if !seen.insert(spec.name.as_str()) {
                return Err(ScenarioError::DuplicateBody(spec.name.clone()));
            }
        }

        let bodies = specs
            .into_iter()
            .map(CelestialBody::new)
            .collect::<Result<Vec<_>, _>>()?;

        let start = bodies
            .iter()
            .position(|b| b.name() == start_body)
            .ok_or_else(|| ScenarioError::UnknownStartBody(start_body.to_string()))?;

        let vehicle = Vehicle::on_surface(profile, tuning, &bodies, start);
        if let Some(body) = bodies.iter().find(|b| b.position() == vehicle.center()) {
            return Err(ScenarioError::CoincidentStart(body.name().to_string()));
        }

        debug!(
            bodies = bodies.len(),
            start = start_body,
            vehicle = %vehicle.profile().name,
            "Scenario built"
        );
        Ok(Self { bodies, vehicle })
    }

    /// The vehicle on Earth in the standard Earth–Moon system.
    pub fn earth_moon(profile: VehicleProfile, tuning: FlightTuning) -> Result<Self, ScenarioError> {
        Self::new(profile, presets::earth_moon(), "earth", tuning)
    }

    /// Look up a body by name.
    pub fn body(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn into_parts(self) -> (Vec<CelestialBody>, Vehicle) {
        (self.bodies, self.vehicle)
    }
}
