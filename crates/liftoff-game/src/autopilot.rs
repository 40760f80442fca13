//! Scripted pilot for headless runs: a vertical hop and a powered landing.

use glam::DVec2;
use liftoff_app::{Command, ControlInput, HeldControl, Session, SessionPhase};
use tracing::info;

/// Where the hop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopStage {
    Pad,
    Ascent,
    Coast,
    Braking,
    Landed,
}

/// Tunables for the hop.
#[derive(Debug, Clone)]
pub struct AutopilotConfig {
    /// Fuel percentage kept back for the landing burn.
    pub reserve_fuel: f64,
    /// Multiplier on the ideal braking altitude.
    pub braking_margin: f64,
    /// Warp used while climbing with the engine off.
    pub cruise_warp: f64,
    /// Radial speed (m/s) below which a braking burn ends.
    pub hover_speed: f64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            reserve_fuel: 50.0,
            braking_margin: 1.5,
            cruise_warp: 1.0,
            hover_speed: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    config: AutopilotConfig,
    stage: HopStage,
}

impl Autopilot {
    pub fn new(config: AutopilotConfig) -> Self {
        Self {
            config,
            stage: HopStage::Pad,
        }
    }

    pub fn stage(&self) -> HopStage {
        self.stage
    }

    /// Decide this step's input from the current session state.
    pub fn control(&mut self, session: &Session) -> ControlInput {
        let mut input = ControlInput::new();
        match session.phase() {
            SessionPhase::PreLaunch => return input.press(Command::Launch),
            SessionPhase::Flight => {}
            _ => return input,
        }

        let vehicle = session.vehicle();
        if vehicle.angular_velocity() != 0.0 {
            input = input.hold(HeldControl::Stabilize);
        }

        let next = match self.stage {
            HopStage::Pad => HopStage::Ascent,
            HopStage::Ascent if vehicle.fuel_percent() <= self.config.reserve_fuel => {
                input = input.press(Command::Cutoff);
                HopStage::Coast
            }
            HopStage::Ascent => HopStage::Ascent,
            HopStage::Coast => {
                let falling = vehicle.velocity_toward_planet() > 0.0;
                if !falling {
                    if session.time_warp() < self.config.cruise_warp {
                        input = input.hold(HeldControl::WarpFaster);
                    }
                } else if session.time_warp() > 1.0 {
                    input = input.hold(HeldControl::WarpNormal);
                } else if vehicle.altitude() <= self.braking_altitude(session) {
                    input = input.press(Command::Launch);
                    return self.enter(HopStage::Braking, input);
                }
                HopStage::Coast
            }
            HopStage::Braking if vehicle.velocity_toward_planet() <= self.config.hover_speed => {
                input = input.press(Command::Cutoff);
                if vehicle.altitude() <= 0.0 {
                    HopStage::Landed
                } else {
                    HopStage::Coast
                }
            }
            HopStage::Braking => HopStage::Braking,
            HopStage::Landed => HopStage::Landed,
        };
        self.enter(next, input)
    }

    fn enter(&mut self, stage: HopStage, input: ControlInput) -> ControlInput {
        if stage != self.stage {
            info!(from = ?self.stage, to = ?stage, "Autopilot stage");
            self.stage = stage;
        }
        input
    }

    /// Altitude at which a full-throttle burn stops the current descent,
    /// scaled by the margin. Infinite when the engine cannot beat gravity.
    pub fn braking_altitude(&self, session: &Session) -> f64 {
        let vehicle = session.vehicle();
        let gravity: f64 = vehicle
            .gravity_vectors()
            .iter()
            .copied()
            .sum::<DVec2>()
            .length();
        let decel = vehicle.profile().max_acceleration() - gravity;
        if decel <= 0.0 {
            return f64::INFINITY;
        }
        let v = vehicle.velocity_toward_planet().max(0.0);
        self.config.braking_margin * v * v / (2.0 * decel)
    }
}

#[cfg(test)]
mod tests {
    use glam::UVec2;
    use liftoff_config::Config;
    use liftoff_physics::{Scenario, presets};

    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn quick_session(vehicle: &str) -> Session {
        let mut config = Config::default();
        config.simulation.countdown_secs = 0.05;
        config.scenario.vehicle = vehicle.to_string();
        Session::from_config(&config).unwrap()
    }

    #[test]
    fn test_presses_launch_on_the_pad() {
        let session = quick_session("falcon-9");
        let mut pilot = Autopilot::new(AutopilotConfig::default());
        let input = pilot.control(&session);
        assert_eq!(input.commands(), [Command::Launch]);
        assert_eq!(pilot.stage(), HopStage::Pad);
    }

    #[test]
    fn test_idle_during_countdown() {
        let mut session = quick_session("falcon-9");
        let mut pilot = Autopilot::new(AutopilotConfig::default());
        let first = pilot.control(&session);
        session.step(DT, &first);
        assert_eq!(session.phase(), SessionPhase::Countdown);
        assert!(pilot.control(&session).is_empty());
    }

    #[test]
    fn test_cuts_engine_at_reserve() {
        let mut session = quick_session("space-shuttle");
        let mut pilot = Autopilot::new(AutopilotConfig::default());
        let mut cut_at = None;
        for _ in 0..600 {
            let input = pilot.control(&session);
            if input.commands().contains(&Command::Cutoff) && cut_at.is_none() {
                cut_at = Some(session.vehicle().fuel_percent());
            }
            session.step(DT, &input);
            if pilot.stage() == HopStage::Coast {
                break;
            }
        }
        let fuel = cut_at.expect("engine cut");
        assert!(fuel <= 50.0 && fuel > 49.0, "{fuel}");
        assert_eq!(session.vehicle().throttle(), 0.0);
    }

    #[test]
    fn test_braking_altitude_grows_with_speed() {
        let mut session = quick_session("space-shuttle");
        let pilot = Autopilot::new(AutopilotConfig::default());
        assert_eq!(pilot.braking_altitude(&session), 0.0);

        // Climb, cut the engine, and wait until the vehicle is falling.
        session.step(DT, &ControlInput::new().press(Command::Launch));
        let mut falling_altitudes = Vec::new();
        for i in 0..1200 {
            let input = if i == 120 {
                ControlInput::new().press(Command::Cutoff)
            } else {
                ControlInput::new()
            };
            session.step(DT, &input);
            let vehicle = session.vehicle();
            if vehicle.velocity_toward_planet() > 1.0 && vehicle.altitude() > 0.0 {
                falling_altitudes.push(pilot.braking_altitude(&session));
            }
        }
        assert!(falling_altitudes.len() > 2);
        assert!(falling_altitudes.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_does_nothing_after_crash() {
        let config = Config::default();
        let mut scenario = Scenario::new(
            presets::falcon_9(),
            presets::earth_moon(),
            "earth",
            config.simulation.flight_tuning(),
        )
        .unwrap();
        // Nose-tilted and falling fast onto the Earth.
        scenario.vehicle
            .place(
                &scenario.bodies,
                DVec2::new(0.0, -10_100.0),
                DVec2::new(0.0, 50.0),
                100.0,
            )
            .unwrap();
        scenario.vehicle.mark_launched();
        let mut session = Session::new(
            scenario,
            &config.camera,
            &config.simulation,
            UVec2::new(800, 600),
        )
        .unwrap();

        let mut pilot = Autopilot::new(AutopilotConfig::default());
        for _ in 0..200 {
            let input = pilot.control(&session);
            session.step(DT, &input);
            if session.phase() == SessionPhase::Crashed {
                break;
            }
        }
        assert_eq!(session.phase(), SessionPhase::Crashed);
        assert!(pilot.control(&session).is_empty());
    }
}
