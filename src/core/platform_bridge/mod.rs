//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the platform thread (winit) and the logic thread.
//
// Components:
// - `interface`: event and error types that cross the boundary
// - `event_collector`: core-side collection of platform events
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{PlatformError, PlatformEvent};
