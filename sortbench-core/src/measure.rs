//! Elapsed-Time Measurement
//!
//! Wraps the monotonic clock so the harness never reads wall-clock time of day.

use std::time::{Duration, Instant};

/// Timer around one timed region
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since `start`
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Convert a duration to fractional milliseconds
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_measures_sleep() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.stop();

        // Should be at least the sleep time, allowing for scheduler slack above
        assert!(elapsed >= Duration::from_millis(10));
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_millis_conversion() {
        assert!((as_millis_f64(Duration::from_micros(1500)) - 1.5).abs() < 1e-9);
        assert_eq!(as_millis_f64(Duration::ZERO), 0.0);
    }
}
