//! Lightweight wall-clock timing.
//!
//! Disabled by default. Enable programmatically with [`enable_timing`] or by
//! setting the `EV_TIMING` environment variable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);

const TIMING_ENV: &str = "EV_TIMING";

/// Enable timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var(TIMING_ENV).is_ok()
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    label: &'static str,
    start: Instant,
    enabled: bool,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            enabled: is_enabled(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Stop the timer and return elapsed time in seconds.
    /// If timing is disabled, returns None.
    pub fn stop(self) -> Option<f64> {
        if self.enabled {
            Some(self.start.elapsed().as_secs_f64())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_timer_reports_elapsed() {
        enable_timing();
        let timer = Timer::start("unit");
        assert_eq!(timer.label(), "unit");
        let elapsed = timer.stop().expect("timing enabled");
        assert!(elapsed >= 0.0);
    }
}
