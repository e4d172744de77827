//=========================================================================
// Timer Scheduler
//=========================================================================
//
// Repeating timers driven by the frame clock.
//
// Architecture:
//   schedule_repeating() → BTreeMap<TimerId, TimerEntry>
//                         ↓
//   advance(now) → Vec<TimerId> fired (id order)
//
// A repeating timer that fell several periods behind fires once per
// advance and is rescheduled from `now`, so a slow frame never produces
// a burst of catch-up ticks.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::{debug, trace};

//=== TimerId =============================================================

/// Ownership handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

//=== TickSource Trait ====================================================

/// Tick capability: register a repeating callback slot and cancel it.
pub trait TickSource {
    /// Fires every `interval_ms` until cancelled.
    fn schedule_repeating(&mut self, interval_ms: u64) -> TimerId;

    /// Returns `false` if the timer was not scheduled.
    fn cancel_timer(&mut self, id: TimerId) -> bool;
}

//=== TimerScheduler ======================================================

#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    interval_ms: u64,
    due_ms: u64,
}

#[derive(Debug, Default)]
pub struct TimerScheduler {
    next_id: u64,
    now_ms: u64,
    timers: BTreeMap<TimerId, TimerEntry>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, interval_ms: u64) -> TimerId {
        // Zero intervals would fire on every advance forever.
        let interval_ms = interval_ms.max(1);

        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.insert(
            id,
            TimerEntry {
                interval_ms,
                due_ms: self.now_ms.saturating_add(interval_ms),
            },
        );
        trace!("Timer {:?} scheduled every {} ms", id, interval_ms);
        id
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    //--- Advance ----------------------------------------------------------

    /// Moves scheduler time to `now_ms` and returns every timer that came
    /// due, in id order. Each fired timer is rescheduled one interval
    /// after `now_ms`.
    pub fn advance(&mut self, now_ms: u64) -> Vec<TimerId> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;

        let mut fired = Vec::new();
        for (&id, entry) in self.timers.iter_mut() {
            if entry.due_ms <= now {
                fired.push(id);
                entry.due_ms = now.saturating_add(entry.interval_ms);
            }
        }

        fired
    }
}

impl TickSource for TimerScheduler {
    fn schedule_repeating(&mut self, interval_ms: u64) -> TimerId {
        self.insert(interval_ms)
    }

    fn cancel_timer(&mut self, id: TimerId) -> bool {
        let removed = self.timers.remove(&id).is_some();
        if !removed {
            debug!("Cancel of inactive timer {:?}", id);
        }
        removed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
