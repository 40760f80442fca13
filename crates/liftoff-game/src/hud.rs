//! Periodic telemetry lines and a flight summary for headless runs.

use liftoff_app::{Session, SessionPhase};
use tracing::info;

/// Flight records kept across the run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightRecord {
    pub max_altitude_m: f64,
    pub max_speed_mps: f64,
    pub min_fuel_pct: f64,
}

/// Emits the HUD every `interval` seconds of session time.
#[derive(Debug, Clone)]
pub struct TelemetryLog {
    interval: f64,
    next_at: f64,
    lines_logged: u64,
    record: FlightRecord,
}

impl TelemetryLog {
    /// A non-positive interval disables the periodic lines; records are
    /// still kept.
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            next_at: 0.0,
            lines_logged: 0,
            record: FlightRecord {
                min_fuel_pct: 100.0,
                ..FlightRecord::default()
            },
        }
    }

    /// Update the records and log the HUD when the interval has elapsed.
    /// Returns whether a line was logged.
    pub fn update(&mut self, session: &Session) -> bool {
        let t = session.telemetry();
        let record = &mut self.record;
        record.max_altitude_m = record.max_altitude_m.max(t.altitude);
        record.max_speed_mps = record.max_speed_mps.max(t.speed);
        record.min_fuel_pct = record.min_fuel_pct.min(t.fuel_percent);

        if self.interval <= 0.0 || session.elapsed() < self.next_at {
            return false;
        }
        while self.next_at <= session.elapsed() {
            self.next_at += self.interval;
        }
        self.lines_logged += 1;
        info!(
            phase = ?session.phase(),
            t = format_args!("{:.2}", session.elapsed()),
            "{}",
            format_hud(session)
        );
        true
    }

    pub fn record(&self) -> &FlightRecord {
        &self.record
    }

    pub fn lines_logged(&self) -> u64 {
        self.lines_logged
    }

    /// Log the final state and the records.
    pub fn summary(&self, session: &Session) {
        let outcome = match session.phase() {
            SessionPhase::Crashed | SessionPhase::Over => "crashed",
            SessionPhase::Flight => "in flight",
            SessionPhase::PreLaunch | SessionPhase::Countdown => "never launched",
        };
        let record = self.record();
        info!(
            outcome,
            flight_time = format_args!("{:.1}", session.flight_time()),
            max_altitude = format_args!("{:.1}", record.max_altitude_m),
            max_speed = format_args!("{:.1}", record.max_speed_mps),
            hud_lines = self.lines_logged(),
            fuel = format_args!("{:.1}", record.min_fuel_pct),
            "Flight summary"
        );
    }
}

/// HUD lines joined on one log line.
pub fn format_hud(session: &Session) -> String {
    session.hud_lines().join(" | ")
}

#[cfg(test)]
mod tests {
    use liftoff_app::{Command, ControlInput};
    use liftoff_config::Config;

    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn session() -> Session {
        let mut config = Config::default();
        config.simulation.countdown_secs = 0.0;
        Session::from_config(&config).unwrap()
    }

    #[test]
    fn test_logs_once_per_interval() {
        let mut session = session();
        let mut log = TelemetryLog::new(0.5);
        let mut logged = 0;
        for _ in 0..120 {
            session.step(DT, &ControlInput::new());
            if log.update(&session) {
                logged += 1;
            }
        }
        // First step, then 0.5, 1.0, 1.5 and possibly 2.0 depending on rounding.
        assert!((4..=5).contains(&logged), "{logged}");
        assert_eq!(log.lines_logged(), logged);
    }

    #[test]
    fn test_disabled_interval_still_records() {
        let mut session = session();
        session.step(DT, &ControlInput::new().press(Command::Launch));
        let mut log = TelemetryLog::new(0.0);
        for _ in 0..60 {
            session.step(DT, &ControlInput::new());
            assert!(!log.update(&session));
        }
        assert!(log.record().max_altitude_m > 0.0);
        assert!(log.record().max_speed_mps > 0.0);
        assert!(log.record().min_fuel_pct < 100.0);
        assert_eq!(log.lines_logged(), 0);
    }

    #[test]
    fn test_format_hud_joins_lines() {
        let session = session();
        let hud = format_hud(&session);
        assert_eq!(hud.split(" | ").count(), session.hud_lines().len());
        assert!(hud.contains("Fuel"), "{hud}");
    }
}
