use tracing::debug;

/// Simulation speed multiplier with stepped adjustment.
///
/// The bounds gate a step rather than clamp its result, so one step may
/// land just outside `[min, max]`. Values are snapped to a 1e-6 grid after
/// every step so repeated ±step sequences return exactly to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeWarp {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl TimeWarp {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            value: 1.0,
            min,
            max,
            step: step.abs(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Physical controls only respond at real time or slower.
    pub fn allows_controls(&self) -> bool {
        self.value <= 1.0
    }

    pub fn reset(&mut self) {
        self.set(1.0);
    }

    /// One step slower, while above the minimum.
    pub fn slower(&mut self) -> bool {
        if self.value > self.min {
            self.set(self.value - self.step);
            return true;
        }
        false
    }

    /// One step faster, while below the maximum. Speeding past 1x needs
    /// `engines_idle` (no RCS and zero throttle).
    pub fn faster(&mut self, engines_idle: bool) -> bool {
        if self.value < self.max && (self.value < 1.0 || engines_idle) {
            self.set(self.value + self.step);
            return true;
        }
        false
    }

    fn set(&mut self, value: f64) {
        let snapped = (value * 1e6).round() / 1e6;
        if snapped != self.value {
            debug!(from = self.value, to = snapped, "Time warp changed");
        }
        self.value = snapped;
    }
}

impl Default for TimeWarp {
    fn default() -> Self {
        Self::new(0.5, 50.0, 0.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_real_time() {
        let warp = TimeWarp::default();
        assert_eq!(warp.value(), 1.0);
        assert!(warp.allows_controls());
    }

    #[test]
    fn test_faster_needs_idle_engines_above_one() {
        let mut warp = TimeWarp::default();
        assert!(!warp.faster(false));
        assert_eq!(warp.value(), 1.0);
        assert!(warp.faster(true));
        assert_eq!(warp.value(), 1.2);
        assert!(!warp.allows_controls());
    }

    #[test]
    fn test_faster_below_one_is_always_allowed() {
        let mut warp = TimeWarp::default();
        warp.slower();
        assert_eq!(warp.value(), 0.8);
        assert!(warp.faster(false));
        assert_eq!(warp.value(), 1.0);
    }

    #[test]
    fn test_slower_stops_below_half() {
        let mut warp = TimeWarp::default();
        let mut steps = 0;
        while warp.slower() {
            steps += 1;
        }
        // 1.0 -> 0.8 -> 0.6 -> 0.4
        assert_eq!(steps, 3);
        assert_eq!(warp.value(), 0.4);
    }

    #[test]
    fn test_faster_stops_at_max() {
        let mut warp = TimeWarp::default();
        while warp.faster(true) {}
        assert!(warp.value() >= 50.0 && warp.value() < 50.0 + 0.2 + 1e-9);
    }

    #[test]
    fn test_round_trip_is_exact() {
        let mut warp = TimeWarp::default();
        for _ in 0..37 {
            warp.faster(true);
        }
        for _ in 0..37 {
            warp.slower();
        }
        assert_eq!(warp.value(), 1.0);
    }

    #[test]
    fn test_reset() {
        let mut warp = TimeWarp::default();
        warp.faster(true);
        warp.faster(true);
        warp.reset();
        assert_eq!(warp.value(), 1.0);
    }
}
