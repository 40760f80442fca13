//! Liftoff: headless rocket flight.
//!
//! Loads the config, builds a session on the chosen body and flies it with
//! a scripted hop-and-land autopilot, logging telemetry as it goes.
//!
//! Run with: `cargo run -p liftoff-game -- --vehicle space-shuttle`

mod autopilot;
mod hud;

use std::error::Error;
use std::path::PathBuf;

use autopilot::{Autopilot, AutopilotConfig};
use clap::Parser;
use hud::TelemetryLog;
use liftoff_app::{GameLoop, Session, SessionPhase};
use liftoff_config::{CliArgs, Config, default_config_dir};
use tracing::{info, warn};

/// Frame times the headless loop replays, in seconds.
const FRAME_TIMES: [f64; 4] = [0.016, 0.0172, 0.0158, 0.0175];

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    liftoff_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!("Liftoff");
    info!(
        "Vehicle: {} | Start: {} | Duration: {:.0}s | Cruise warp: {:.1}x",
        config.scenario.vehicle,
        config.scenario.start_body,
        config.simulation.duration_secs,
        config.simulation.cruise_time_warp,
    );

    let mut session = Session::from_config(&config)?;
    fly(&mut session, &config);
    Ok(())
}

/// Drive the session until it ends or the configured duration runs out.
fn fly(session: &mut Session, config: &Config) {
    let mut game_loop = GameLoop::with_fixed_dt(config.simulation.fixed_dt());
    let mut pilot = Autopilot::new(AutopilotConfig {
        cruise_warp: config.simulation.cruise_time_warp,
        ..AutopilotConfig::default()
    });
    let mut telemetry = TelemetryLog::new(config.debug.telemetry_interval_secs);
    let duration = config.simulation.duration_secs;

    let mut frame = 0usize;
    while game_loop.total_sim_time() < duration && session.phase() != SessionPhase::Over {
        let frame_time = FRAME_TIMES[frame % FRAME_TIMES.len()];
        frame += 1;
        game_loop.advance(
            frame_time,
            |dt, _sim_time| {
                let input = pilot.control(session);
                session.step(dt, &input);
            },
            |_alpha| {},
        );
        telemetry.update(session);
    }

    if session.phase() == SessionPhase::Over {
        warn!("Vehicle lost");
    }
    info!(
        frames = game_loop.frame_count(),
        updates = game_loop.update_count(),
        stage = ?pilot.stage(),
        "Run finished"
    );
    telemetry.summary(session);
}
