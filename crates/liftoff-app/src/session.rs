//! One flight from the pad to the end screen.
//!
//! [`Session::step`] runs a fixed order each tick: input, countdown,
//! integration, crash handling, camera follow.

use glam::UVec2;
use liftoff_camera::Camera;
use liftoff_config::{CameraConfig, Config, SimulationConfig};
use liftoff_physics::{CelestialBody, Scenario, Telemetry, TickOutcome, Vehicle};
use tracing::info;

use crate::countdown::LaunchCountdown;
use crate::error::AppError;
use crate::input::{CameraEvent, Command, ControlInput, HeldControl};
use crate::warp::TimeWarp;

/// Where the session is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// On the pad, waiting for the launch command.
    PreLaunch,
    Countdown,
    Flight,
    /// Crashed; the wreck stays on screen for the crash delay.
    Crashed,
    /// Nothing more will happen.
    Over,
}

/// What one [`Session::step`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub phase: SessionPhase,
    /// The vehicle was integrated this step.
    pub integrated: bool,
    pub outcome: Option<TickOutcome>,
    /// A rotation control fired this step.
    pub rcs: bool,
    pub time_warp: f64,
}

/// Owns the bodies, the vehicle and the camera of one flight.
#[derive(Debug, Clone)]
pub struct Session {
    bodies: Vec<CelestialBody>,
    vehicle: Vehicle,
    camera: Camera,
    countdown: LaunchCountdown,
    time_warp: TimeWarp,
    crash_delay: f64,
    crash_elapsed: Option<f64>,
    over: bool,
    elapsed: f64,
    flight_time: f64,
}

impl Session {
    pub fn new(
        scenario: Scenario,
        camera_config: &CameraConfig,
        sim_config: &SimulationConfig,
        screen_size: UVec2,
    ) -> Result<Self, AppError> {
        let zoom = camera_config.zoom_settings()?;
        let (bodies, vehicle) = scenario.into_parts();
        let mut camera = Camera::centered_on(vehicle.center(), screen_size, zoom)?;
        camera.set_tether(camera_config.start_tethered);

        Ok(Self {
            bodies,
            vehicle,
            camera,
            countdown: LaunchCountdown::new(sim_config.countdown_secs),
            time_warp: TimeWarp::new(
                sim_config.time_warp_min,
                sim_config.time_warp_max,
                sim_config.time_warp_step,
            ),
            crash_delay: sim_config.crash_delay_secs,
            crash_elapsed: None,
            over: false,
            elapsed: 0.0,
            flight_time: 0.0,
        })
    }

    /// Build the scenario described by `config` and wrap it in a session.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let profile = config.scenario.vehicle_profile()?;
        let scenario = Scenario::new(
            profile,
            config.scenario.bodies.clone(),
            &config.scenario.start_body,
            config.simulation.flight_tuning(),
        )?;
        info!(
            vehicle = %scenario.vehicle.profile().name,
            start = %config.scenario.start_body,
            bodies = scenario.bodies.len(),
            "Session ready"
        );
        Self::new(
            scenario,
            &config.camera,
            &config.simulation,
            UVec2::new(config.window.width, config.window.height),
        )
    }

    /// Advance one fixed step of `dt` real seconds.
    pub fn step(&mut self, dt: f64, input: &ControlInput) -> StepReport {
        if self.over {
            return self.report(false, None, false);
        }
        self.elapsed += dt;

        // 1. Input.
        self.apply_camera_events(input);
        self.apply_commands(input);
        let rcs = self.apply_held_controls(input);
        self.apply_time_warp(input, rcs);

        // 2. Countdown.
        if self.countdown.advance(dt) {
            self.vehicle.throttle_max();
            self.vehicle.mark_launched();
        }

        // 3. Integrate.
        let mut outcome = None;
        if self.vehicle.is_launched() && !self.vehicle.is_crashed() {
            let warp = self.time_warp.value();
            outcome = Some(self.vehicle.tick(&self.bodies, dt, warp));
            self.flight_time += dt * warp;
        }

        // 4. Crash.
        let mut rcs = rcs;
        if self.vehicle.is_crashed() {
            self.vehicle.freeze();
            rcs = false;
            let since_crash = match self.crash_elapsed {
                None => {
                    info!(flight_time = self.flight_time, "Vehicle destroyed");
                    0.0
                }
                Some(t) => t + dt,
            };
            self.crash_elapsed = Some(since_crash);
            if since_crash > self.crash_delay {
                info!("Session over");
                self.over = true;
            }
        }

        // 5. Camera.
        if self.camera.is_tethered() {
            self.camera.follow(self.vehicle.center());
        }

        self.report(outcome.is_some(), outcome, rcs)
    }

    fn report(&self, integrated: bool, outcome: Option<TickOutcome>, rcs: bool) -> StepReport {
        StepReport {
            phase: self.phase(),
            integrated,
            outcome,
            rcs,
            time_warp: self.time_warp.value(),
        }
    }

    fn apply_camera_events(&mut self, input: &ControlInput) {
        for event in input.camera_events() {
            match *event {
                CameraEvent::DragStart => self.camera.set_tether(false),
                CameraEvent::Drag(delta) => {
                    self.camera.pan(-delta.x, -delta.y);
                }
                CameraEvent::Zoom { direction, anchor } => self.camera.zoom_at(direction, anchor),
                CameraEvent::Resize(size) => self.camera.resize(size),
            }
        }
    }

    fn apply_commands(&mut self, input: &ControlInput) {
        for command in input.commands() {
            match command {
                Command::Launch if self.time_warp.allows_controls() => {
                    if !self.vehicle.is_launched() {
                        self.countdown.start();
                    } else {
                        self.vehicle.throttle_max();
                    }
                }
                Command::Launch => {}
                Command::Cutoff => self.vehicle.throttle_zero(),
                Command::ToggleTether => self.camera.toggle_tether(),
            }
        }
    }

    /// Throttle and attitude keys. Returns whether RCS fired.
    fn apply_held_controls(&mut self, input: &ControlInput) -> bool {
        if !self.time_warp.allows_controls()
            || !self.vehicle.is_launched()
            || self.vehicle.is_crashed()
        {
            return false;
        }

        if input.is_held(HeldControl::ThrottleUp) {
            self.vehicle.throttle_up();
        } else if input.is_held(HeldControl::ThrottleDown) {
            self.vehicle.throttle_down();
        }

        if input.is_held(HeldControl::RotateCcw) {
            self.vehicle.rotate_ccw();
        } else if input.is_held(HeldControl::RotateCw) {
            self.vehicle.rotate_cw();
        } else if input.is_held(HeldControl::Stabilize) {
            self.vehicle.stabilize();
        } else {
            return false;
        }
        true
    }

    fn apply_time_warp(&mut self, input: &ControlInput, rcs: bool) {
        if !self.vehicle.is_launched() || self.vehicle.is_crashed() {
            return;
        }
        if input.is_held(HeldControl::WarpNormal) {
            self.time_warp.reset();
        } else if input.is_held(HeldControl::WarpSlower) {
            self.time_warp.slower();
        } else if input.is_held(HeldControl::WarpFaster) {
            let engines_idle = !rcs && self.vehicle.throttle() == 0.0;
            self.time_warp.faster(engines_idle);
        }
    }

    // --- Read-only state ---

    pub fn phase(&self) -> SessionPhase {
        if self.over {
            SessionPhase::Over
        } else if self.vehicle.is_crashed() {
            SessionPhase::Crashed
        } else if self.vehicle.is_launched() {
            SessionPhase::Flight
        } else if self.countdown.is_running() {
            SessionPhase::Countdown
        } else {
            SessionPhase::PreLaunch
        }
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn countdown(&self) -> &LaunchCountdown {
        &self.countdown
    }

    pub fn time_warp(&self) -> f64 {
        self.time_warp.value()
    }

    /// Real seconds stepped so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Simulated seconds since liftoff, including warp.
    pub fn flight_time(&self) -> f64 {
        self.flight_time
    }

    pub fn telemetry(&self) -> Telemetry {
        self.vehicle.telemetry(&self.bodies)
    }

    pub fn hud_lines(&self) -> Vec<String> {
        self.telemetry().hud_lines(self.time_warp.value())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
