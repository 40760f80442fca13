//! Built-in bodies and rocket types.
//!
//! Heights follow the display convention of one meter per two pixels at
//! zoom 1; masses and thrusts are the real vehicles' liftoff figures.

use glam::DVec2;

use crate::body::{BodySpec, Color};
use crate::profile::VehicleProfile;

pub const EARTH_COLOR: Color = [9, 12, 189];
pub const MOON_COLOR: Color = [143, 143, 143];

/// Home planet, centered on the world origin.
pub fn earth() -> BodySpec {
    BodySpec {
        name: "earth".to_string(),
        position: DVec2::ZERO,
        radius: 10_000.0,
        mass: 1.46838e19,
        color: EARTH_COLOR,
    }
}

/// Moon, 100 km straight above the planet.
pub fn moon() -> BodySpec {
    BodySpec {
        name: "moon".to_string(),
        position: DVec2::new(0.0, -100_000.0),
        radius: 3_000.0,
        mass: 2.1846e17,
        color: MOON_COLOR,
    }
}

/// The standard two-body system.
pub fn earth_moon() -> Vec<BodySpec> {
    vec![earth(), moon()]
}

pub fn space_shuttle() -> VehicleProfile {
    VehicleProfile::new("space-shuttle", 112.0, 2_030_000.0, 34_696_128.0)
}

pub fn falcon_9() -> VehicleProfile {
    VehicleProfile::new("falcon-9", 140.0, 541_300.0, 5_885_000.0)
}

pub fn long_march_2f() -> VehicleProfile {
    VehicleProfile::new("long-march-2f", 124.0, 464_000.0, 5_920_000.0)
}

pub fn soyuz() -> VehicleProfile {
    VehicleProfile::new("soyuz", 91.0, 305_000.0, 3_357_000.0)
}

/// All selectable rocket types, in menu order.
pub fn vehicles() -> Vec<VehicleProfile> {
    vec![space_shuttle(), falcon_9(), long_march_2f(), soyuz()]
}

/// Look up a rocket type by its name (case-insensitive).
pub fn vehicle_by_name(name: &str) -> Option<VehicleProfile> {
    vehicles()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_lookup() {
        assert_eq!(vehicle_by_name("soyuz").unwrap().height_m, 91.0);
        assert_eq!(vehicle_by_name("Falcon-9").unwrap().mass_kg, 541_300.0);
        assert!(vehicle_by_name("saturn-v").is_none());
    }

    #[test]
    fn test_vehicle_names_unique() {
        let names: Vec<String> = vehicles().into_iter().map(|p| p.name).collect();
        for (i, a) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(a), "duplicate preset {a}");
        }
    }

    #[test]
    fn test_every_preset_can_lift_off() {
        let g = crate::constants::GRAVITATIONAL_CONSTANT * earth().mass / earth().radius.powi(2);
        for p in vehicles() {
            assert!(
                p.max_acceleration() > g,
                "{} cannot lift off: {} <= {g}",
                p.name,
                p.max_acceleration()
            );
        }
    }
}
