//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene lifecycle and stack-based scene switching.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene>>
//     └─ stack: Vec<S>
//
// Flow:
//   update() → collect_active_scenes() → Scene::update()
//   scenes → GlobalContext::transition() → TransitionQueue
//   process_transitions() → on_exit / on_enter at the tick boundary
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;

//=== Module Declarations =================================================

mod scene_manager;
mod transition_queue;

//=== Public API ==========================================================

pub use scene_manager::{SceneKey, SceneManager, SceneTransition};
pub use transition_queue::TransitionQueue;

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks and update logic.
///
/// Scenes are registered in SceneManager and activated via the scene
/// stack. Each scene keeps its own state between activations, so a scene
/// that allocates visuals or arms a QTE in `on_enter` should release them
/// in `on_exit`.
///
/// # Minimal Implementation
///
/// Only `update()` is required:
///
/// ```rust
/// # use whiplash::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameScene { Main }
/// # impl SceneKey for GameScene {}
/// struct MyScene;
///
/// impl Scene<GameScene> for MyScene {
///     fn update(&mut self, context: &mut GlobalContext<GameScene>) {
///         // Only this method is required
///     }
/// }
/// ```
pub trait Scene<S: SceneKey>: Send {
    /// Called when the scene enters the active stack.
    fn on_enter(&mut self, _context: &mut GlobalContext<S>) {}

    /// Called when the scene leaves the active stack.
    fn on_exit(&mut self, _context: &mut GlobalContext<S>) {}

    /// Called every tick while the scene is active on the stack.
    fn update(&mut self, context: &mut GlobalContext<S>);

    /// Whether scenes below this one should keep receiving updates.
    fn is_transparent(&self) -> bool {
        false
    }
}
