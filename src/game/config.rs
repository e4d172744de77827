//=========================================================================
// Game Configuration
//=========================================================================
//
// Tunables shared by the Whiplash scenes.
//
//=========================================================================

use std::time::Duration;

use crate::core::display::Color;
use crate::core::qte::QteStyle;

//=== Window ==============================================================

pub const TITLE: &str = "Whiplash";
pub const GAME_WIDTH: f32 = 800.0;
pub const GAME_HEIGHT: f32 = 600.0;

//=== World ===============================================================

pub const TILE_SIZE: f32 = 32.0;
pub const WORLD_WIDTH: f32 = GAME_WIDTH;
pub const WORLD_HEIGHT: f32 = GAME_HEIGHT;

/// Pixels per second.
pub const PLAYER_SPEED: f32 = 160.0;
pub const PLAYER_WIDTH: f32 = 32.0;
pub const PLAYER_HEIGHT: f32 = 48.0;

/// Fraction of the distance the camera closes each tick.
pub const CAMERA_LERP: f32 = 0.1;

//=== QTE =================================================================

pub const QTE_DEFAULT_DURATION: Duration = Duration::from_millis(2000);
pub const QTE_BAR_WIDTH: f32 = 400.0;
pub const QTE_BAR_HEIGHT: f32 = 16.0;
pub const QTE_COLOR_SUCCESS: Color = Color::from_hex(0x4fc3f7);
pub const QTE_COLOR_FAIL: Color = Color::from_hex(0xf44336);
pub const QTE_OVERLAY_ALPHA: f32 = 0.6;

/// How long the "Too slow!" notice stays up.
pub const FAIL_NOTICE_MS: u64 = 1500;

//=== Palette =============================================================

pub const BACKGROUND: Color = Color::from_hex(0x0d0d1a);
pub const PANEL: Color = Color::from_hex(0x1a1a3a);
pub const PANEL_HOVER: Color = Color::from_hex(0x2a2a5a);
pub const ACCENT: Color = Color::from_hex(0x4fc3f7);
pub const ACCENT_HOVER: Color = Color::from_hex(0xa8d8f0);
pub const GRASS: Color = Color::from_hex(0x3a5f3a);
pub const GRASS_EDGE: Color = Color::from_hex(0x2a4f2a);

/// QTE look for the game viewport.
pub fn qte_style() -> QteStyle {
    QteStyle {
        bar_width: QTE_BAR_WIDTH,
        bar_height: QTE_BAR_HEIGHT,
        bar_fill: QTE_COLOR_SUCCESS,
        overlay_alpha: QTE_OVERLAY_ALPHA,
        ..QteStyle::for_viewport(GAME_WIDTH, GAME_HEIGHT)
    }
}
