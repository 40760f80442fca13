//! Per-tick snapshot of the vehicle's public state.

use glam::DVec2;
use serde::Serialize;

/// Everything the presentation layer displays about the vehicle, captured
/// after a complete tick. An owned value, so it can be handed to a renderer
/// on another thread without exposing a half-integrated state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Telemetry {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Velocity magnitude, m/s.
    pub speed: f64,
    /// Nose direction in degrees, counter-clockwise from +x.
    pub angle: f64,
    /// Degrees per second.
    pub angular_velocity: f64,
    /// 0..=1.
    pub throttle: f64,
    /// Current engine thrust, N.
    pub thrust: f64,
    /// 0..=100.
    pub fuel_percent: f64,
    /// Meters above the nearest body's surface.
    pub altitude: f64,
    pub nearest_body: String,
    /// Direction from the nearest body to the vehicle, degrees in [0, 360).
    pub angle_from_planet: f64,
    pub velocity_toward_planet: f64,
    pub velocity_tangent_to_planet: f64,
    pub launched: bool,
    pub crashed: bool,
}

impl Telemetry {
    /// HUD lines in display order.
    pub fn hud_lines(&self, time_warp: f64) -> Vec<String> {
        vec![
            format!("Altitude: {:.0} m", self.altitude),
            format!("Nearest Planet: {}", self.nearest_body),
            format!("Throttle: {:.0} %", self.throttle * 100.0),
            format!("Velocity: {:.0} m/s", self.speed),
            format!("Velocity Towards Planet: {:.0} m/s", self.velocity_toward_planet),
            format!("Velocity Tangent Planet: {:.0} m/s", self.velocity_tangent_to_planet),
            format!("Angular Velocity: {:.0} degrees/s", self.angular_velocity),
            format!("Fuel and Oxidizer: {:.0} %", self.fuel_percent),
            format!("Time Warp: {time_warp:.1}X"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Telemetry {
        Telemetry {
            position: DVec2::new(0.0, -10_070.0),
            velocity: DVec2::new(0.0, -120.4),
            speed: 120.4,
            angle: 90.0,
            angular_velocity: -1.5,
            throttle: 0.75,
            thrust: 4_413_750.0,
            fuel_percent: 42.4,
            altitude: 1234.6,
            nearest_body: "earth".to_string(),
            angle_from_planet: 90.0,
            velocity_toward_planet: -120.4,
            velocity_tangent_to_planet: 0.0,
            launched: true,
            crashed: false,
        }
    }

    #[test]
    fn test_hud_lines() {
        let lines = sample().hud_lines(1.0);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Altitude: 1235 m");
        assert_eq!(lines[1], "Nearest Planet: earth");
        assert_eq!(lines[2], "Throttle: 75 %");
        assert_eq!(lines[7], "Fuel and Oxidizer: 42 %");
        assert_eq!(lines[8], "Time Warp: 1.0X");
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"nearest_body\":\"earth\""));
        assert!(json.contains("\"crashed\":false"));
    }
}
