//! Rocket flight simulation: celestial bodies, the vehicle integrator,
//! trajectory recording, and scenario construction.
//!
//! The core is a fixed-order explicit Euler step ([`Vehicle::tick`]) run
//! against a flat list of static [`CelestialBody`] gravity sources. Bodies
//! never move; the vehicle tracks its nearest body by index so that the
//! whole vehicle state stays `Clone` and serializable.

pub mod body;
pub mod constants;
mod error;
pub mod path;
pub mod presets;
pub mod profile;
pub mod scenario;
pub mod telemetry;
pub mod vehicle;

pub use body::{BodySpec, CelestialBody, Color};
pub use error::ScenarioError;
pub use path::Path;
pub use profile::VehicleProfile;
pub use scenario::Scenario;
pub use telemetry::Telemetry;
pub use vehicle::{FlightTuning, TickOutcome, Vehicle};
