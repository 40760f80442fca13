use liftoff_camera::CameraError;
use liftoff_config::ConfigError;
use liftoff_physics::ScenarioError;

/// Failures while setting up a session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid scenario: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("invalid camera: {0}")]
    Camera(#[from] CameraError),
}
