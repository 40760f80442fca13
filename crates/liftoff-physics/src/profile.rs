//! Vehicle profiles: the physics-relevant numbers of a rocket type.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_WIDTH_RATIO;
use crate::error::ScenarioError;

/// Dimensions, mass and engine power of a rocket type.
///
/// Sprites and other display data live in the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub name: String,
    /// Length from tail to nose in meters.
    pub height_m: f64,
    /// Body width in meters.
    pub width_m: f64,
    /// Mass in kilograms. Constant: burning fuel does not lighten the vehicle.
    pub mass_kg: f64,
    /// Thrust at full throttle in Newtons.
    pub max_thrust_n: f64,
}

impl VehicleProfile {
    /// Profile with the default width-to-height ratio.
    pub fn new(name: impl Into<String>, height_m: f64, mass_kg: f64, max_thrust_n: f64) -> Self {
        Self {
            name: name.into(),
            height_m,
            width_m: height_m * DEFAULT_WIDTH_RATIO,
            mass_kg,
            max_thrust_n,
        }
    }

    pub fn half_height(&self) -> f64 {
        self.height_m / 2.0
    }

    pub fn half_width(&self) -> f64 {
        self.width_m / 2.0
    }

    /// Thrust-to-mass ratio at full throttle (m/s²).
    pub fn max_acceleration(&self) -> f64 {
        self.max_thrust_n / self.mass_kg
    }

    /// Check every field is a positive finite number.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let fields = [
            ("height", self.height_m),
            ("width", self.width_m),
            ("mass", self.mass_kg),
            ("max thrust", self.max_thrust_n),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ScenarioError::InvalidProfile {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}
