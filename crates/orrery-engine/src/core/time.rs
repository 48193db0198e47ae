/// Simulation clock.
///
/// Simulated time is integrated from frame deltas (`t += scale * dt`) rather
/// than read from a wall clock, so pausing, resuming and running backwards
/// never produce a jump. Real (unscaled) time is tracked alongside it for
/// things that must keep moving while the simulation is paused.
#[derive(Debug, Clone)]
pub struct SimClock {
    /// Simulated seconds since start (high-precision accumulator).
    simulated: f64,
    /// Unscaled seconds since start.
    real: f64,
    /// Multiplier on the derivative of simulated time. May be 0 or negative.
    time_scale: f64,
    paused: bool,
    /// Upper bound on a single frame delta.
    max_frame_dt: f32,
}

impl SimClock {
    pub fn new(time_scale: f64, max_frame_dt: f32) -> Self {
        Self {
            simulated: 0.0,
            real: 0.0,
            time_scale,
            paused: false,
            max_frame_dt: max_frame_dt.max(0.0),
        }
    }

    /// Advance by one frame. Returns the simulated delta applied this frame.
    pub fn advance(&mut self, frame_dt: f32) -> f64 {
        let dt = self.clamp_frame_dt(frame_dt) as f64;
        self.real += dt;
        let scaled = dt * self.effective_scale();
        self.simulated += scaled;
        scaled
    }

    /// Clamp a raw frame delta into `[0, max_frame_dt]`.
    /// Non-finite deltas count as zero.
    pub fn clamp_frame_dt(&self, frame_dt: f32) -> f32 {
        if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.max_frame_dt)
        } else {
            0.0
        }
    }

    /// Scale actually applied: zero while paused.
    pub fn effective_scale(&self) -> f64 {
        if self.paused {
            0.0
        } else {
            self.time_scale
        }
    }

    pub fn simulated_time(&self) -> f64 {
        self.simulated
    }

    pub fn real_time(&self) -> f64 {
        self.real
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Non-finite scales are ignored.
    pub fn set_time_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.time_scale = scale;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(1.0, 0.25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_scaled_time() {
        let mut clock = SimClock::new(2.0, 1.0);
        clock.advance(0.5);
        clock.advance(0.25);
        assert!((clock.simulated_time() - 1.5).abs() < 1e-12);
        assert!((clock.real_time() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn zero_scale_freezes_simulated_time() {
        let mut clock = SimClock::new(0.0, 1.0);
        clock.advance(0.1);
        clock.advance(0.2);
        assert_eq!(clock.simulated_time(), 0.0);
        assert!(clock.real_time() > 0.0);
    }

    #[test]
    fn pause_keeps_scale() {
        let mut clock = SimClock::new(3.0, 1.0);
        clock.toggle_pause();
        assert_eq!(clock.advance(0.1), 0.0);
        assert_eq!(clock.time_scale(), 3.0);
        clock.toggle_pause();
        assert!((clock.advance(0.1) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn negative_scale_runs_backwards() {
        let mut clock = SimClock::new(1.0, 1.0);
        clock.advance(0.5);
        clock.set_time_scale(-1.0);
        clock.advance(0.5);
        assert!(clock.simulated_time().abs() < 1e-12);
    }

    #[test]
    fn caps_long_frames() {
        let mut clock = SimClock::new(1.0, 0.25);
        clock.advance(10.0); // stalled tab
        assert!((clock.simulated_time() - 0.25).abs() < 1e-12);
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert!((clock.simulated_time() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_finite_scale() {
        let mut clock = SimClock::default();
        clock.set_time_scale(f64::NAN);
        assert_eq!(clock.time_scale(), 1.0);
    }
}
