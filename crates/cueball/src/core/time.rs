/// Converts wall-clock time into whole simulation frames.
///
/// The table advances by exactly one unit per `time_step`, so the frame loop
/// asks the clock how many steps the elapsed time is worth.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Seconds of wall-clock time per simulation frame.
    frame_secs: f64,
    /// Time not yet turned into frames.
    pending: f64,
    /// Cap on frames per call, so a stalled tab does not fast-forward the table.
    max_catch_up: u32,
}

impl FrameClock {
    pub fn new(frames_per_second: f64, max_catch_up: u32) -> Self {
        Self {
            frame_secs: 1.0 / frames_per_second,
            pending: 0.0,
            max_catch_up: max_catch_up.max(1),
        }
    }

    /// Add elapsed seconds. Returns the number of frames to simulate.
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        if !(elapsed.is_finite() && elapsed > 0.0) {
            return 0;
        }
        self.pending = (self.pending + elapsed).min(self.frame_secs * self.max_catch_up as f64);
        // Small epsilon so an exact frame interval is not lost to rounding.
        let frames = ((self.pending + 1e-9) / self.frame_secs) as u32;
        self.pending = (self.pending - frames as f64 * self.frame_secs).max(0.0);
        frames
    }

    /// Drop any partial frame, e.g. after the table is re-racked.
    pub fn reset(&mut self) {
        self.pending = 0.0;
    }
}
