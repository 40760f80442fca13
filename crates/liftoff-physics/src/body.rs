//! Static gravity sources.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::error::ScenarioError;

/// Display color as RGB bytes. Only the presentation layer reads it.
pub type Color = [u8; 3];

/// Construction parameters for a [`CelestialBody`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    /// Unique name within the scenario.
    pub name: String,
    /// Center in world space (meters).
    pub position: DVec2,
    /// Surface radius in meters.
    pub radius: f64,
    /// Mass in kilograms.
    pub mass: f64,
    pub color: Color,
}

/// A planet or moon: a fixed-position point mass with a solid surface.
///
/// Fields are private so position, radius and mass cannot change after
/// the scenario is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelestialBody {
    name: String,
    position: DVec2,
    radius: f64,
    mass: f64,
    color: Color,
}

impl CelestialBody {
    /// Validate a spec and build the body.
    pub fn new(spec: BodySpec) -> Result<Self, ScenarioError> {
        for (field, value) in [("radius", spec.radius), ("mass", spec.mass)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ScenarioError::InvalidBody {
                    name: spec.name,
                    field,
                    value,
                });
            }
        }
        Ok(Self {
            name: spec.name,
            position: spec.position,
            radius: spec.radius,
            mass: spec.mass,
            color: spec.color,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Gravitational acceleration this body imparts on a point mass at `point`.
    ///
    /// Returns `G * mass / d²` directed from `point` toward the body's center.
    /// When `resting` is set (the caller is standing on this body), the
    /// surface cancels the pull and the zero vector is returned.
    ///
    /// `point` must not coincide with the center; scenario construction
    /// guarantees this for the vehicle's start.
    pub fn gravitational_acceleration(&self, point: DVec2, resting: bool) -> DVec2 {
        if resting {
            return DVec2::ZERO;
        }
        let delta = self.position - point;
        let g = GRAVITATIONAL_CONSTANT * self.mass / delta.length_squared();
        delta.normalize() * g
    }

    /// Point where a vehicle of the given half-height stands upright on the
    /// top of this body (screen-up is -y).
    pub fn surface_point(&self, half_height: f64) -> DVec2 {
        self.position - DVec2::new(0.0, self.radius + half_height)
    }
}
