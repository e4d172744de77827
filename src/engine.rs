//=========================================================================
// Whiplash Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init(): register scenes, bindings
//         ├─ with_channel_capacity() └─ run(): spawns logic thread,
//         ├─ with_title()                 runs platform, blocks until exit
//         └─ with_window_size()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::marker::PhantomData;

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformEvent;
use crate::core::{Action, CoreSystemsOrchestrator, GlobalSystems, SceneKey};
use crate::platform::{Platform, WindowSettings};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Window**: "Whiplash", 800x600
///
/// # Examples
///
/// ```no_run
/// use whiplash::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameScene { Main }
/// impl SceneKey for GameScene {}
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Pause }
/// impl Action for GameAction {}
///
/// EngineBuilder::<GameScene, GameAction>::new()
///     .with_tps(120.0)
///     .with_title("Trial")
///     .build()
///     .init(|systems| {
///         systems.input.bind_key(KeyCode::Escape, GameAction::Pause, InputContext::Primary);
///     })
///     .run();
/// ```
pub struct EngineBuilder<S: SceneKey, A: Action> {
    tps: f64,
    channel_capacity: usize,
    window: WindowSettings,
    _phantom: PhantomData<(S, A)>,
}

impl<S: SceneKey, A: Action> EngineBuilder<S, A> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window: WindowSettings::default(),
            _phantom: PhantomData,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// QTE deadlines are checked once per tick, so the tick period bounds
    /// how late a timeout can be observed.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Sets the logical window size in pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be positive, got {}x{}",
            width,
            height
        );
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Consumes the builder. Call [`Engine::init`] to register scenes and
    /// bindings, then [`Engine::run`].
    pub fn build(self) -> Engine<S, A> {
        info!(
            "Building engine (TPS: {}, channel: {}, window: {}x{})",
            self.tps, self.channel_capacity, self.window.width, self.window.height
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        }
    }
}

impl<S: SceneKey, A: Action> Default for EngineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Whiplash runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem, SceneManager, timers, QTEs
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// Communication: bounded crossbeam channel (PlatformEvent)
/// ```
pub struct Engine<S: SceneKey, A: Action> {
    orchestrator: CoreSystemsOrchestrator<S, A>,
    tps: f64,
    channel_capacity: usize,
    window: WindowSettings,
}

impl<S: SceneKey, A: Action> Engine<S, A> {
    //--- Initialization ---------------------------------------------------

    /// Gives mutable access to [`GlobalSystems`] before the logic thread
    /// starts: register scenes, bind keys.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        info!("Initializing engine systems");
        self.orchestrator.init_systems(init_fn);
        info!("Engine initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the engine and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core channel
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the platform event loop on this thread
    /// 4. On window close: the logic thread sees `WindowClosed` and stops
    ///
    /// A platform failure or a logic thread panic is logged; `run` still
    /// returns normally.
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx) = bounded::<PlatformEvent>(self.channel_capacity);
        info!("Channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.window);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Wait for the logic thread --------------------------------
        // `platform` (and its sender) is gone by now, so the core thread
        // observes a disconnect even if `WindowClosed` was never sent.
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
