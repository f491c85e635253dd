//! Select-button debouncing.
//!
//! Level-triggered with a cooldown window rather than edge-triggered
//! with release detection: a press is accepted whenever the raw pin
//! reads pressed and the previous acceptance is more than the debounce
//! delay in the past. A held button therefore re-fires once per window.

/// Tracks the timestamp of the last accepted press.
pub struct PressFilter {
    last_accepted_ms: u64,
}

impl PressFilter {
    pub const fn new() -> Self {
        Self { last_accepted_ms: 0 }
    }

    /// Feed one raw pin sample plus the current monotonic time (ms).
    ///
    /// Returns `true` when this sample counts as a new activation.
    /// Bounce inside the window is silently absorbed.
    pub fn poll(&mut self, pressed: bool, now_ms: u64, delay_ms: u64) -> bool {
        if pressed && now_ms - self.last_accepted_ms > delay_ms {
            self.last_accepted_ms = now_ms;
            true
        } else {
            false
        }
    }
}

impl Default for PressFilter {
    fn default() -> Self {
        Self::new()
    }
}
