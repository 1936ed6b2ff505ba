use std::time::Duration;

/// Timing of the capture loop.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptureConfig {
    delay: Duration,
    idle_yield: Duration,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1500),
            idle_yield: Duration::from_millis(1),
        }
    }
}

impl CaptureConfig {
    /// Minimum time between two classification attempts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Pause after every grab. Zero only yields the thread.
    pub fn with_idle_yield(mut self, idle_yield: Duration) -> Self {
        self.idle_yield = idle_yield;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn idle_yield(&self) -> Duration {
        self.idle_yield
    }
}
