use tracing::debug;

/// One-shot launch countdown, advanced with unwarped frame time.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchCountdown {
    duration: f64,
    elapsed: Option<f64>,
}

impl LaunchCountdown {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration: duration_secs.max(0.0),
            elapsed: None,
        }
    }

    /// Start counting. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.elapsed.is_some() {
            return false;
        }
        debug!(seconds = self.duration, "Launch countdown started");
        self.elapsed = Some(0.0);
        true
    }

    /// Advance by `dt`. Returns `true` exactly once, on the call where the
    /// countdown runs out; the countdown is then idle again.
    pub fn advance(&mut self, dt: f64) -> bool {
        let Some(elapsed) = self.elapsed.as_mut() else {
            return false;
        };
        *elapsed += dt;
        if *elapsed > self.duration {
            self.elapsed = None;
            return true;
        }
        false
    }

    pub fn is_running(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Seconds left, while running.
    pub fn remaining(&self) -> Option<f64> {
        self.elapsed.map(|e| (self.duration - e).max(0.0))
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }
}
