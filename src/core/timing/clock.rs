//=========================================================================
// Clocks
//=========================================================================
//
// Millisecond time sources.
//
// FrameClock samples a monotonic Instant once per logic tick so every
// system in the tick sees the same "now". ManualClock is advanced by
// hand for deterministic tests.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

//=== Clock Trait =========================================================

/// Monotonic time in milliseconds since an arbitrary origin.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Duration in whole milliseconds, saturating at `u64::MAX`.
fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

//=== FrameClock ==========================================================

/// Monotonic clock frozen between [`FrameClock::advance`] calls.
#[derive(Debug)]
pub struct FrameClock {
    origin: Instant,
    now_ms: u64,
    delta_ms: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            now_ms: 0,
            delta_ms: 0,
        }
    }

    /// Samples the monotonic clock. Called once at the start of each tick.
    pub(crate) fn advance(&mut self) {
        let now = whole_millis(self.origin.elapsed());
        self.delta_ms = now.saturating_sub(self.now_ms);
        self.now_ms = now;
    }

    /// Moves the frame time to an explicit value (tests).
    #[cfg(test)]
    pub(crate) fn set(&mut self, now_ms: u64) {
        self.delta_ms = now_ms.saturating_sub(self.now_ms);
        self.now_ms = now_ms;
    }

    /// Milliseconds between the last two samples.
    pub fn delta_ms(&self) -> u64 {
        self.delta_ms
    }

    /// Seconds between the last two samples.
    pub fn delta_secs(&self) -> f32 {
        self.delta_ms as f32 / 1000.0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FrameClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

//=== ManualClock =========================================================

/// Clock that only moves when told to.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now_ms: start_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    pub fn set(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
