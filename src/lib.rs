//=========================================================================
// Whiplash - Library Root
//
// Public API surface of the Whiplash engine and game shell.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose `core` systems (scenes, input, display, timing, QTEs)
// - Keep the winit integration (`platform`) private
// - Ship the Whiplash scenes (`game`) used by the binary
//
// Typical usage:
// ```no_run
// use whiplash::prelude::*;
// use whiplash::game::{self, GameAction, GameScene};
//
// EngineBuilder::<GameScene, GameAction>::new()
//     .build()
//     .init(game::install)
//     .run();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod core;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and the winit event loop. Nothing in it is
// part of the public API.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
