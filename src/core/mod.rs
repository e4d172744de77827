//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for all engine subsystems running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own the GlobalSystems (input, scenes) and build the GlobalContext
// - Receive platform events over the crossbeam channel
// - Tick at a fixed rate (TPS) and pace the thread
//
// Notes:
// The orchestrator never touches winit. Everything it knows about the
// window arrives as `PlatformEvent`s, and it stops when the window closes
// or the platform side of the channel goes away.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod display;
pub mod globals;
pub mod input;
pub mod message_bus;
pub mod notification;
pub(crate) mod platform_bridge;
pub mod qte;
pub mod scene;
pub mod timing;

//=== Public API ==========================================================

pub use globals::GlobalSystems;
pub use input::Action;
pub use scene::SceneKey;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{debug, info, trace};

//=== Internal Modules ====================================================

use globals::GlobalContext;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================

/// Owns the logic-side systems until the core thread is spawned.
pub(crate) struct CoreSystemsOrchestrator<S: SceneKey, A: Action> {
    systems: GlobalSystems<S, A>,
}

impl<S: SceneKey, A: Action> CoreSystemsOrchestrator<S, A> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            systems: GlobalSystems::new(),
        }
    }

    /// Runs `init_fn` against the systems before the thread starts.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        init_fn(&mut self.systems);
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Each tick:
    //  1. Collects platform events (bounded, never blocks)
    //  2. Runs the systems pipeline on the sampled frame time
    //  3. Sleeps out the rest of the tick
    //  4. Exits when the window closes or the channel disconnects
    //
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut systems = self.systems;
            let mut collector = EventCollector::new(receiver);
            let mut context = GlobalContext::new();

            systems.scene_manager.start(&mut context);
            debug!("Core thread started at {} TPS", tps);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting");
                    break;
                }
                context.frame_input_events = collector.take_batches();

                //--- Step 2: Update systems --------------------------------
                systems.update(&mut context);

                //--- Step 3: Maintain pacing -------------------------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                } else {
                    trace!("Tick overran by {:?}", elapsed - frame_duration);
                }
            }
        })
    }
}

impl<S: SceneKey, A: Action> Default for CoreSystemsOrchestrator<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
