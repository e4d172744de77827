//=========================================================================
// Whiplash Game
//=========================================================================
//
// The scenes shipped with the `whiplash` binary.
//
// Flow:
//   Boot ──► Title ──(NEW GAME + SPACE in time)──► Play
//              ▲                                    │
//              └──────────(pause → EXIT TO TITLE)───┘
//
//=========================================================================

//=== Module Declarations =================================================

mod boot;
mod camera;
pub mod config;
mod play;
mod title;
mod widgets;

//=== Public API ==========================================================

pub use boot::BootScene;
pub use camera::Camera;
pub use play::PlayScene;
pub use title::TitleScene;
pub use widgets::Button;

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalSystems;
use crate::core::input::{Action, InputContext, KeyCode};
use crate::core::scene::SceneKey;

//=== Keys ================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameScene {
    Boot,
    Title,
    Play,
}

impl SceneKey for GameScene {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Toggles the pause menu during play.
    Pause,
}

impl Action for GameAction {}

//=== Installation ========================================================

/// Binds the game's keys and registers every scene, starting at Boot.
pub fn install(systems: &mut GlobalSystems<GameScene, GameAction>) {
    systems
        .input
        .bind_key(KeyCode::Escape, GameAction::Pause, InputContext::Primary);

    systems
        .scene_manager
        .register_default(GameScene::Boot, BootScene::new());
    systems
        .scene_manager
        .register_scene(GameScene::Title, TitleScene::new());
    systems
        .scene_manager
        .register_scene(GameScene::Play, PlayScene::new());
}

//=========================================================================
// Unit Tests
//=========================================================================
