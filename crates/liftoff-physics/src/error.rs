//! Scenario construction errors.

/// Reasons a scenario is rejected at construction time.
///
/// These are the only faults the simulation core reports; once a scenario
/// is built, every tick is plain arithmetic over validated inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    /// The scenario has no gravity sources.
    #[error("scenario has no bodies")]
    NoBodies,

    /// Two bodies share a name.
    #[error("duplicate body name: {0}")]
    DuplicateBody(String),

    /// The requested start body is not in the body list.
    #[error("unknown start body: {0}")]
    UnknownStartBody(String),

    /// A body has a radius or mass that is not a positive finite number.
    #[error("body {name}: {field} must be positive and finite, got {value}")]
    InvalidBody {
        name: String,
        field: &'static str,
        value: f64,
    },

    /// The vehicle profile has a dimension, mass, or thrust that is not a
    /// positive finite number.
    #[error("vehicle {name}: {field} must be positive and finite, got {value}")]
    InvalidProfile {
        name: String,
        field: &'static str,
        value: f64,
    },

    /// The vehicle would sit exactly on a body's center, which makes the
    /// gravity term divide by zero.
    #[error("vehicle center coincides with the center of body {0}")]
    CoincidentStart(String),
}
