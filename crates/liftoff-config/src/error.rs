use std::path::PathBuf;

/// Errors from loading, saving, or resolving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("cannot serialize config: {0}")]
    Serialize(#[source] ron::Error),

    /// The scenario names a rocket that is neither custom nor a preset.
    #[error("unknown vehicle `{0}`")]
    UnknownVehicle(String),

    #[error("invalid camera settings: {0}")]
    Camera(#[from] liftoff_camera::CameraError),
}
