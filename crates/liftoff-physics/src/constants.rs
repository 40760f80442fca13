//! Physical constants and flight-model tuning defaults.

/// Newtonian gravitational constant in m³ kg⁻¹ s⁻².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Throttle change per throttle-up / throttle-down command.
pub const THROTTLE_STEP: f64 = 0.05;

/// Angular velocity change per rotate command, in degrees per second.
pub const ROTATION_STEP_DEG_S: f64 = 0.5;

/// Fuel burned per second at full throttle, in percent of a full tank.
/// A full burn empties the tank in five seconds at 1x time warp.
pub const FULL_THROTTLE_BURN_RATE: f64 = 20.0;

/// Factor applied to angular velocity on every tick spent touching the ground.
pub const GROUND_ANGULAR_DAMPING: f64 = 0.3;

/// Largest deviation from the local vertical that still counts as upright, degrees.
pub const MAX_LANDING_TILT_DEG: f64 = 5.0;

/// Radial speed (toward the body) at or above which a touchdown is a crash, m/s.
pub const MAX_LANDING_RADIAL_SPEED: f64 = 7.0;

/// Tangential speed at or above which a touchdown is a crash, m/s.
pub const MAX_LANDING_TANGENTIAL_SPEED: f64 = 5.0;

/// Orientation of a vehicle standing on the launch pad (nose up on screen).
pub const LAUNCH_ANGLE_DEG: f64 = 90.0;

/// Width / height ratio used when a profile does not give a width.
pub const DEFAULT_WIDTH_RATIO: f64 = 20.0 / 150.0;
