//! Rocket state and the per-tick flight integrator.
//!
//! [`Vehicle::tick`] advances one explicit Euler step in a fixed order:
//! touchdown check, fuel burn, rotation, thrust, gravity, velocity,
//! position, collision corners, nearest body, altitude, angle from the
//! body, radial/tangential speed, and finally the trail point. Later steps
//! read what earlier ones wrote, so the order is part of the contract.

use glam::DVec2;
use liftoff_math::{angle_difference, distance, distance_squared, from_polar, normalize_degrees};
use serde::Serialize;
use tracing::{debug, info};

use crate::body::CelestialBody;
use crate::constants::{
    FULL_THROTTLE_BURN_RATE, GROUND_ANGULAR_DAMPING, LAUNCH_ANGLE_DEG, MAX_LANDING_RADIAL_SPEED,
    MAX_LANDING_TANGENTIAL_SPEED, MAX_LANDING_TILT_DEG, ROTATION_STEP_DEG_S, THROTTLE_STEP,
};
use crate::error::ScenarioError;
use crate::path::Path;
use crate::profile::VehicleProfile;
use crate::telemetry::Telemetry;

/// Tunable rates for the flight model and the control commands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightTuning {
    /// Percent of a full tank burned per second at full throttle.
    pub fuel_burn_rate: f64,
    /// Throttle change per up/down command.
    pub throttle_step: f64,
    /// Angular velocity change per rotate command (deg/s).
    pub rotation_step: f64,
    /// Maximum number of trail points kept (`None` = unbounded).
    pub path_cap: Option<usize>,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            fuel_burn_rate: FULL_THROTTLE_BURN_RATE,
            throttle_step: THROTTLE_STEP,
            rotation_step: ROTATION_STEP_DEG_S,
            path_cap: None,
        }
    }
}

/// What a call to [`Vehicle::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The full step ran.
    Integrated,
    /// The touchdown check found a crash; the vehicle is now frozen.
    Crashed,
    /// The vehicle had already crashed; nothing changed.
    Idle,
}

/// A rocket flying among static bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    profile: VehicleProfile,
    tuning: FlightTuning,

    center: DVec2,
    velocity: DVec2,
    /// Degrees from +x, counter-clockwise on screen (90 = nose up).
    angle: f64,
    /// Degrees per second, counter-clockwise positive.
    angular_velocity: f64,

    fuel_percent: f64,
    throttle: f64,
    thrust: f64,
    thrust_acceleration: DVec2,
    gravity: Vec<DVec2>,

    corners: [DVec2; 4],

    nearest_body: usize,
    altitude: f64,
    angle_from_planet: f64,
    velocity_toward_planet: f64,
    velocity_tangent_to_planet: f64,

    path: Path,
    launched: bool,
    crashed: bool,
}

impl Vehicle {
    /// Place a new vehicle upright on top of `bodies[start_body]`.
    ///
    /// The profile and body index are assumed valid; [`crate::Scenario`]
    /// checks them before calling this.
    pub fn on_surface(
        profile: VehicleProfile,
        tuning: FlightTuning,
        bodies: &[CelestialBody],
        start_body: usize,
    ) -> Self {
        let start = &bodies[start_body];
        let center = start.surface_point(profile.half_height());
        let path = match tuning.path_cap {
            Some(cap) => Path::with_cap(cap),
            None => Path::new(),
        };
        let mut vehicle = Self {
            profile,
            tuning,
            center,
            velocity: DVec2::ZERO,
            angle: LAUNCH_ANGLE_DEG,
            angular_velocity: 0.0,
            fuel_percent: 100.0,
            throttle: 0.0,
            thrust: 0.0,
            thrust_acceleration: DVec2::ZERO,
            gravity: vec![DVec2::ZERO; bodies.len()],
            corners: [center; 4],
            nearest_body: start_body,
            altitude: 0.0,
            angle_from_planet: LAUNCH_ANGLE_DEG,
            velocity_toward_planet: 0.0,
            velocity_tangent_to_planet: 0.0,
            path,
            launched: false,
            crashed: false,
        };
        vehicle.corners = vehicle.compute_corners();
        vehicle
    }

    /// Move the vehicle to an arbitrary state and recompute its derived
    /// telemetry (corners, nearest body, altitude, radial/tangential speed).
    ///
    /// Used to set up scenarios that do not start on the launch pad. The
    /// trail is left untouched. A center exactly on a body's center is
    /// rejected and leaves the vehicle unchanged.
    pub fn place(
        &mut self,
        bodies: &[CelestialBody],
        center: DVec2,
        velocity: DVec2,
        angle: f64,
    ) -> Result<(), ScenarioError> {
        if let Some(body) = bodies.iter().find(|b| b.position() == center) {
            return Err(ScenarioError::CoincidentStart(body.name().to_string()));
        }
        self.center = center;
        self.velocity = velocity;
        self.angle = normalize_degrees(angle);
        self.corners = self.compute_corners();
        self.update_nearest_body(bodies);
        self.update_surface_telemetry(bodies);
        Ok(())
    }

    /// Advance the simulation by `dt * time_warp` seconds.
    pub fn tick(&mut self, bodies: &[CelestialBody], dt: f64, time_warp: f64) -> TickOutcome {
        if self.crashed {
            return TickOutcome::Idle;
        }
        let h = dt * time_warp;

        // 1. Touchdown, judged on last tick's telemetry.
        if self.altitude <= 0.0 {
            self.velocity = DVec2::ZERO;
            self.angular_velocity *= GROUND_ANGULAR_DAMPING;
            if !self.touchdown_is_safe() {
                info!(
                    tilt = angle_difference(self.angle, self.angle_from_planet),
                    radial = self.velocity_toward_planet,
                    tangential = self.velocity_tangent_to_planet,
                    "Vehicle crashed"
                );
                self.crashed = true;
                self.freeze();
                return TickOutcome::Crashed;
            }
        }

        // 2. Fuel.
        if self.fuel_percent > 0.0 {
            let burned = self.throttle * h * self.tuning.fuel_burn_rate;
            self.fuel_percent = (self.fuel_percent - burned).clamp(0.0, 100.0);
        }

        // 3. Orientation.
        self.angle = normalize_degrees(self.angle + self.angular_velocity * h);

        // 4. Thrust along the nose.
        if self.fuel_percent > 0.0 {
            self.thrust = self.throttle * self.profile.max_thrust_n;
            self.thrust_acceleration = from_polar(self.thrust / self.profile.mass_kg, -self.angle);
        } else {
            if self.throttle > 0.0 {
                debug!("Fuel exhausted, engine shut down");
            }
            self.throttle = 0.0;
            self.thrust = 0.0;
            self.thrust_acceleration = DVec2::ZERO;
        }

        // 5. Gravity, one vector per body.
        let resting = self.altitude <= 0.0;
        self.gravity.clear();
        for (i, body) in bodies.iter().enumerate() {
            let suppressed = resting && i == self.nearest_body;
            self.gravity
                .push(body.gravitational_acceleration(self.center, suppressed));
        }

        // 6. Velocity: thrust first, then each gravity term.
        self.velocity += self.thrust_acceleration * h;
        for g in &self.gravity {
            self.velocity += *g * h;
        }

        // 7. Position.
        self.center += self.velocity * h;

        // 8-12. Derived geometry and telemetry.
        self.corners = self.compute_corners();
        self.update_nearest_body(bodies);
        self.update_surface_telemetry(bodies);

        // 13. Trail from the engine end.
        self.path.extend(self.tail());

        TickOutcome::Integrated
    }

    /// Upright and slow enough to survive contact with the ground.
    fn touchdown_is_safe(&self) -> bool {
        angle_difference(self.angle, self.angle_from_planet).abs() <= MAX_LANDING_TILT_DEG
            && self.velocity_toward_planet < MAX_LANDING_RADIAL_SPEED
            && self.velocity_tangent_to_planet < MAX_LANDING_TANGENTIAL_SPEED
    }

    /// Corners of the rotated bounding rectangle: nose-left, nose-right,
    /// tail-left, tail-right (relative to the nose direction).
    fn compute_corners(&self) -> [DVec2; 4] {
        let half_h = self.profile.half_height();
        let half_w = self.profile.half_width();
        let offset = |length: f64, degrees: f64| from_polar(length, -degrees);
        let nose = offset(half_h, self.angle);
        let tail = offset(half_h, self.angle + 180.0);
        let left = offset(half_w, self.angle + 90.0);
        let right = offset(half_w, self.angle - 90.0);
        [
            self.center + nose + left,
            self.center + nose + right,
            self.center + tail + left,
            self.center + tail + right,
        ]
    }

    /// Point at the engine end of the vehicle.
    fn tail(&self) -> DVec2 {
        self.center + from_polar(self.profile.half_height(), -(self.angle + 180.0))
    }

    /// Switch to a strictly closer body, if any. Ties keep the current one.
    fn update_nearest_body(&mut self, bodies: &[CelestialBody]) {
        let Some(current) = bodies.get(self.nearest_body) else {
            return;
        };
        let mut best = self.nearest_body;
        let mut best_d2 = distance_squared(current.position(), self.center);
        for (i, body) in bodies.iter().enumerate() {
            let d2 = distance_squared(body.position(), self.center);
            if d2 < best_d2 {
                best = i;
                best_d2 = d2;
            }
        }
        if best != self.nearest_body {
            debug!(
                from = current.name(),
                to = bodies[best].name(),
                "Nearest body changed"
            );
            self.nearest_body = best;
        }
    }

    /// Altitude, angle from the nearest body, and velocity decomposition.
    fn update_surface_telemetry(&mut self, bodies: &[CelestialBody]) {
        let Some(body) = bodies.get(self.nearest_body) else {
            return;
        };
        let pos = body.position();

        self.altitude = self
            .corners
            .iter()
            .map(|c| distance(*c, pos) - body.radius())
            .fold(f64::INFINITY, f64::min);

        self.angle_from_planet = normalize_degrees(
            (pos.y - self.center.y)
                .atan2(self.center.x - pos.x)
                .to_degrees(),
        );

        let speed = self.velocity.length();
        let heading = liftoff_math::polar::screen_angle(self.velocity);
        let theta = (heading - self.angle_from_planet + 180.0).to_radians();
        self.velocity_toward_planet = theta.cos() * speed;
        self.velocity_tangent_to_planet = (theta.sin() * speed).abs();
    }

    // --- Controls ---

    pub fn throttle_up(&mut self) {
        if self.crashed {
            return;
        }
        self.throttle = (self.throttle + self.tuning.throttle_step).clamp(0.0, 1.0);
    }

    pub fn throttle_down(&mut self) {
        if self.crashed {
            return;
        }
        self.throttle = (self.throttle - self.tuning.throttle_step).clamp(0.0, 1.0);
    }

    pub fn throttle_max(&mut self) {
        if self.crashed {
            return;
        }
        self.throttle = 1.0;
    }

    /// Engine cutoff.
    pub fn throttle_zero(&mut self) {
        self.throttle = 0.0;
    }

    /// Spin counter-clockwise. Angular velocity is not clamped.
    pub fn rotate_ccw(&mut self) {
        if self.crashed {
            return;
        }
        self.angular_velocity += self.tuning.rotation_step;
    }

    /// Spin clockwise. Angular velocity is not clamped.
    pub fn rotate_cw(&mut self) {
        if self.crashed {
            return;
        }
        self.angular_velocity -= self.tuning.rotation_step;
    }

    /// Step angular velocity toward zero, snapping once within one step.
    pub fn stabilize(&mut self) {
        if self.crashed {
            return;
        }
        let step = self.tuning.rotation_step;
        if self.angular_velocity > step {
            self.angular_velocity -= step;
        } else if self.angular_velocity < -step {
            self.angular_velocity += step;
        } else {
            self.angular_velocity = 0.0;
        }
    }

    /// Pin every dynamic quantity to zero. Called when the vehicle crashes.
    pub fn freeze(&mut self) {
        self.velocity = DVec2::ZERO;
        self.angular_velocity = 0.0;
        self.throttle = 0.0;
        self.thrust = 0.0;
        self.thrust_acceleration = DVec2::ZERO;
        self.altitude = 0.0;
    }

    /// Mark the end of the launch countdown.
    pub fn mark_launched(&mut self) {
        if !self.launched {
            info!(vehicle = %self.profile.name, "Liftoff");
        }
        self.launched = true;
    }

    // --- Read-only state ---

    pub fn profile(&self) -> &VehicleProfile {
        &self.profile
    }

    pub fn tuning(&self) -> &FlightTuning {
        &self.tuning
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    pub fn thrust(&self) -> f64 {
        self.thrust
    }

    pub fn thrust_acceleration(&self) -> DVec2 {
        self.thrust_acceleration
    }

    pub fn fuel_percent(&self) -> f64 {
        self.fuel_percent
    }

    pub fn gravity_vectors(&self) -> &[DVec2] {
        &self.gravity
    }

    pub fn corners(&self) -> [DVec2; 4] {
        self.corners
    }

    /// Index of the nearest body in the scenario's body list.
    pub fn nearest_body(&self) -> usize {
        self.nearest_body
    }

    /// Height of the lowest corner above the nearest body's surface.
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn angle_from_planet(&self) -> f64 {
        self.angle_from_planet
    }

    /// Radial speed, positive when closing on the nearest body.
    pub fn velocity_toward_planet(&self) -> f64 {
        self.velocity_toward_planet
    }

    /// Unsigned tangential speed relative to the nearest body.
    pub fn velocity_tangent_to_planet(&self) -> f64 {
        self.velocity_tangent_to_planet
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }

    pub fn is_crashed(&self) -> bool {
        self.crashed
    }

    /// Snapshot of the public state after the last completed tick.
    pub fn telemetry(&self, bodies: &[CelestialBody]) -> Telemetry {
        Telemetry {
            position: self.center,
            velocity: self.velocity,
            speed: self.speed(),
            angle: self.angle,
            angular_velocity: self.angular_velocity,
            throttle: self.throttle,
            thrust: self.thrust,
            fuel_percent: self.fuel_percent,
            altitude: self.altitude,
            nearest_body: bodies
                .get(self.nearest_body)
                .map(|b| b.name().to_string())
                .unwrap_or_default(),
            angle_from_planet: self.angle_from_planet,
            velocity_toward_planet: self.velocity_toward_planet,
            velocity_tangent_to_planet: self.velocity_tangent_to_planet,
            launched: self.launched,
            crashed: self.crashed,
        }
    }
}

#[cfg(test)]
#[path = "vehicle_tests.rs"]
mod tests;
