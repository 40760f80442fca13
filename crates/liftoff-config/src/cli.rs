//! Command-line argument parsing for Liftoff.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Liftoff command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "liftoff", about = "Liftoff: headless 2D rocket flight")]
pub struct CliArgs {
    /// Rocket to fly (space-shuttle, falcon-9, long-march-2f, soyuz, or a custom name).
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Body the rocket starts on.
    #[arg(long)]
    pub start_body: Option<String>,

    /// Simulated seconds to run.
    #[arg(long)]
    pub duration: Option<f64>,

    /// Time warp to cruise at once the engine is off.
    #[arg(long)]
    pub time_warp: Option<f64>,

    /// Viewport width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Simulated seconds between telemetry log lines.
    #[arg(long)]
    pub telemetry_interval: Option<f64>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref vehicle) = args.vehicle {
            self.scenario.vehicle = vehicle.clone();
        }
        if let Some(ref body) = args.start_body {
            self.scenario.start_body = body.clone();
        }
        if let Some(d) = args.duration {
            self.simulation.duration_secs = d;
        }
        if let Some(w) = args.time_warp {
            self.simulation.cruise_time_warp = w;
        }
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(interval) = args.telemetry_interval {
            self.debug.telemetry_interval_secs = interval;
        }
    }
}
