//=========================================================================
// Timing
//=========================================================================
//
// Clock and tick capabilities for the logic thread.
//
//   FrameClock      one monotonic sample per tick
//   TimerScheduler  repeating timers → TimerId notifications
//
//=========================================================================

//=== Module Declarations =================================================

mod clock;
mod scheduler;

//=== Public API ==========================================================

pub use clock::{Clock, FrameClock, ManualClock};
pub use scheduler::{TickSource, TimerId, TimerScheduler};
