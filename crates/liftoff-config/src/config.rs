//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use liftoff_camera::ZoomSettings;
use liftoff_physics::{BodySpec, FlightTuning, VehicleProfile, presets};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window / viewport settings.
    pub window: WindowConfig,
    /// Flight model and driver timing.
    pub simulation: SimulationConfig,
    /// Zoom limits and steps.
    pub camera: CameraConfig,
    /// Bodies and rocket selection.
    pub scenario: ScenarioConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    pub title: String,
}

/// Simulation and driver settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed update rate in Hz.
    pub tick_rate_hz: f64,
    /// Percent of the tank burned per second at full throttle.
    pub fuel_burn_rate: f64,
    /// Throttle change per held-key tick.
    pub throttle_step: f64,
    /// Angular velocity change per held-key tick, deg/s.
    pub rotation_step: f64,
    /// Delay between the launch command and liftoff.
    pub countdown_secs: f64,
    /// Time between a crash and the end of the session.
    pub crash_delay_secs: f64,
    pub time_warp_min: f64,
    pub time_warp_max: f64,
    pub time_warp_step: f64,
    /// Maximum trail length (`None` = unbounded).
    pub path_cap: Option<usize>,
    /// Simulated seconds for a headless run.
    pub duration_secs: f64,
    /// Time warp the headless autopilot cruises at once the engine is off.
    pub cruise_time_warp: f64,
}

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Closest zoom, world units per pixel.
    pub min_zoom: f64,
    /// Farthest zoom, world units per pixel.
    pub max_zoom: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    /// Follow the vehicle from the first frame.
    pub start_tethered: bool,
}

/// Which bodies exist and which rocket flies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Rocket name: a custom entry below or a built-in preset.
    pub vehicle: String,
    /// User-defined rocket types. Take precedence over presets of the same name.
    pub custom_vehicles: Vec<VehicleProfile>,
    /// Name of the body the rocket starts on.
    pub start_body: String,
    pub bodies: Vec<BodySpec>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Simulated seconds between HUD telemetry log lines (0 = off).
    pub telemetry_interval_secs: f64,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Liftoff".to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let tuning = FlightTuning::default();
        Self {
            tick_rate_hz: 60.0,
            fuel_burn_rate: tuning.fuel_burn_rate,
            throttle_step: tuning.throttle_step,
            rotation_step: tuning.rotation_step,
            countdown_secs: 10.0,
            crash_delay_secs: 4.0,
            time_warp_min: 0.5,
            time_warp_max: 50.0,
            time_warp_step: 0.2,
            path_cap: tuning.path_cap,
            duration_secs: 120.0,
            cruise_time_warp: 1.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        let zoom = ZoomSettings::default();
        Self {
            min_zoom: zoom.min,
            max_zoom: zoom.max,
            zoom_in_factor: zoom.in_factor,
            zoom_out_factor: zoom.out_factor,
            start_tethered: true,
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            vehicle: "falcon-9".to_string(),
            custom_vehicles: Vec::new(),
            start_body: "earth".to_string(),
            bodies: presets::earth_moon(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            telemetry_interval_secs: 1.0,
        }
    }
}

// --- Conversions ---

impl SimulationConfig {
    pub fn flight_tuning(&self) -> FlightTuning {
        FlightTuning {
            fuel_burn_rate: self.fuel_burn_rate,
            throttle_step: self.throttle_step,
            rotation_step: self.rotation_step,
            path_cap: self.path_cap,
        }
    }

    /// Length of one fixed update in seconds.
    pub fn fixed_dt(&self) -> f64 {
        1.0 / self.tick_rate_hz
    }
}

impl CameraConfig {
    /// Validated zoom limits for the camera.
    pub fn zoom_settings(&self) -> Result<ZoomSettings, ConfigError> {
        let settings = ZoomSettings {
            min: self.min_zoom,
            max: self.max_zoom,
            in_factor: self.zoom_in_factor,
            out_factor: self.zoom_out_factor,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl ScenarioConfig {
    /// Resolve [`ScenarioConfig::vehicle`] against custom entries, then presets.
    pub fn vehicle_profile(&self) -> Result<VehicleProfile, ConfigError> {
        self.custom_vehicles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(&self.vehicle))
            .cloned()
            .or_else(|| presets::vehicle_by_name(&self.vehicle))
            .ok_or_else(|| ConfigError::UnknownVehicle(self.vehicle.clone()))
    }
}

/// Platform config directory for Liftoff (e.g. `~/.config/liftoff`).
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("liftoff"))
}

// --- Load / Save / Reload ---

const CONFIG_FILE_NAME: &str = "config.ron";

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Load `config.ron` from `config_dir`, writing the defaults there first
    /// if the file does not exist.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            return Ok(config);
        }
        let config = Config::default();
        config.save(config_dir)?;
        log::info!("Created default config at {}", config_path.display());
        Ok(config)
    }

    /// Write this config to `config_dir/config.ron`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let write_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| ConfigError::Write { path, source }
        };
        std::fs::create_dir_all(config_dir).map_err(write_err(config_dir))?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;
        std::fs::write(&config_path, serialized).map_err(write_err(&config_path))
    }

    /// Re-read the file. `Some` only when it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = read_config(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
