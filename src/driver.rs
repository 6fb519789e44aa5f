//! Frame driver
//!
//! The sole suspension point of the engine: the host scheduler calls
//! `frame` once per available tick with the current wall-clock time. The
//! driver normalizes the elapsed delta to the reference frame interval and
//! runs exactly one simulation step followed by one render. After `stop`,
//! no further host invocation occurs.

use crate::consts::{FRAME_INTERVAL_MS, MAX_FRAME_SCALE};

/// Host callbacks driven once per tick, in step-then-render order
pub trait Host {
    fn step(&mut self, dt: f32);
    fn render(&mut self);
}

/// Drives the step/render pair from an external clock
#[derive(Debug)]
pub struct FrameDriver {
    last_ms: Option<f64>,
    running: bool,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            last_ms: None,
            running: true,
        }
    }

    /// Normalized frame scale for a wall-clock delta: 1.0 at the reference
    /// interval, clamped so a long pause cannot tunnel the body through
    /// tiles, and never negative.
    pub fn normalize_delta(delta_ms: f64) -> f32 {
        ((delta_ms / FRAME_INTERVAL_MS) as f32).clamp(0.0, MAX_FRAME_SCALE)
    }

    /// Run one tick at wall-clock time `now_ms`. Once stopped this does
    /// nothing and returns false.
    pub fn frame(&mut self, now_ms: f64, host: &mut dyn Host) -> bool {
        if !self.running {
            return false;
        }
        let dt = match self.last_ms {
            // first frame has no delta; assume one reference interval
            None => 1.0,
            Some(last) => Self::normalize_delta(now_ms - last),
        };
        self.last_ms = Some(now_ms);
        host.step(dt);
        host.render();
        true
    }

    /// Halt the driver; `frame` becomes a no-op. Restart by constructing a
    /// new driver over re-initialized state.
    pub fn stop(&mut self) {
        self.running = false;
        log::info!("frame driver stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHost {
        steps: Vec<f32>,
        renders: u32,
    }

    impl Host for CountingHost {
        fn step(&mut self, dt: f32) {
            self.steps.push(dt);
        }
        fn render(&mut self) {
            self.renders += 1;
        }
    }

    #[test]
    fn test_delta_normalization() {
        assert!((FrameDriver::normalize_delta(16.67) - 1.0).abs() < 1e-6);
        assert!((FrameDriver::normalize_delta(33.34) - 2.0).abs() < 1e-6);
        // long pauses clamp instead of tunneling
        assert_eq!(FrameDriver::normalize_delta(5000.0), MAX_FRAME_SCALE);
        // a clock that went backwards yields zero, not a negative step
        assert_eq!(FrameDriver::normalize_delta(-50.0), 0.0);
    }

    #[test]
    fn test_one_step_one_render_per_tick() {
        let mut driver = FrameDriver::new();
        let mut host = CountingHost::default();
        assert!(driver.frame(0.0, &mut host));
        assert!(driver.frame(16.67, &mut host));
        assert!(driver.frame(33.34, &mut host));
        assert_eq!(host.steps.len(), 3);
        assert_eq!(host.renders, 3);
        // first frame assumes one reference interval
        assert!((host.steps[0] - 1.0).abs() < 1e-6);
        assert!((host.steps[1] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_no_invocation_after_stop() {
        let mut driver = FrameDriver::new();
        let mut host = CountingHost::default();
        driver.frame(0.0, &mut host);
        driver.stop();
        assert!(!driver.is_running());
        assert!(!driver.frame(16.67, &mut host));
        assert!(!driver.frame(33.34, &mut host));
        assert_eq!(host.steps.len(), 1);
        assert_eq!(host.renders, 1);
    }
}
