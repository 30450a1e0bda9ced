/// Pausable simulation clock.
///
/// Elapsed time only grows while running; pausing freezes the value fed to
/// the scene without stopping the frame loop. Resuming continues from the
/// frozen value, so a paused interval contributes nothing.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    /// Seconds of simulated time.
    elapsed: f64,
    paused: bool,
    /// Seconds spent paused, for diagnostics.
    frozen: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's wall-clock delta. Negative or non-finite deltas
    /// (tab throttling, clock jumps) are dropped.
    pub fn advance(&mut self, frame_dt: f32) {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return;
        }
        if self.paused {
            self.frozen += frame_dt as f64;
        } else {
            self.elapsed += frame_dt as f64;
        }
    }

    /// Flip the pause state. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Simulated seconds since start.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Wall-clock seconds that passed while paused.
    pub fn frozen(&self) -> f64 {
        self.frozen
    }
}
