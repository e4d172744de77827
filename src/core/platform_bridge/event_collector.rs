//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side receiver of platform events.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input batches → TickControl
//
// Draining is bounded per tick so a flood of input cannot starve the
// simulation; leftovers are picked up on the next tick. Pacing is the
// orchestrator's job, so collection never sleeps.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== Constants ===========================================================

const MAX_EVENTS_PER_FRAME: usize = 100;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
        }
    }

    /// Pulls whatever the platform sent since the last tick.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();

        for _ in 0..MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                    if !discrete.is_empty() {
                        self.input_batches.push(discrete);
                    }
                    if !continuous.is_empty() {
                        self.input_batches.push(continuous);
                    }
                }
                Ok(PlatformEvent::WindowClosed) => {
                    debug!("Window closed, stopping collection");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Disconnected) => {
                    debug!("Platform channel disconnected");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => return TickControl::Continue,
            }
        }

        warn!(
            "Event queue backlog: {} events drained this tick, {} still queued",
            MAX_EVENTS_PER_FRAME,
            self.receiver.len()
        );
        TickControl::Continue
    }

    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }

    /// Hands this tick's batches over, leaving an empty buffer behind.
    pub(crate) fn take_batches(&mut self) -> Vec<Vec<InputEvent>> {
        std::mem::take(&mut self.input_batches)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
