//! Configuration for Liftoff.
//!
//! Settings persist to disk as a RON file, can be hot-reloaded, and are
//! overridden from the command line via clap. Every section defaults, so
//! older or partial files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DebugConfig, ScenarioConfig, SimulationConfig, WindowConfig,
    default_config_dir,
};
pub use error::ConfigError;
