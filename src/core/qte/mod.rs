//=========================================================================
// Quick-Time Events
//=========================================================================
//
// Timed "press this key now" challenges.
//
// Architecture:
//   QteManager::start(host, challenge)
//     ├─ 4 visuals        (overlay, bar background, bar fill, prompt)
//     ├─ 2 subscriptions  (qualifying key once, any key)
//     └─ 1 repeating tick
//
//   message bus → Notification → QteManager::handle(host, ..)
//                                  └─ Resolution (exactly once)
//
// The manager never owns its collaborators. Every call is handed the
// host, which provides drawing, input, ticks and time through the
// QteHost capability traits.
//
//=========================================================================

//=== Module Declarations =================================================

mod challenge;
mod manager;

#[cfg(test)]
pub(crate) mod testing;

//=== Public API ==========================================================

pub use challenge::{QteCallback, QteChallenge, QteChallengeBuilder, DEFAULT_DURATION};
pub use manager::QteManager;

//=== Internal Dependencies ===============================================

use crate::core::display::{Color, DrawSurface};
use crate::core::input::{InputSource, KeyCode};
use crate::core::timing::{Clock, TickSource};

//=== QteHost =============================================================

/// Everything a QteManager needs from its surroundings.
pub trait QteHost: DrawSurface + InputSource + TickSource + Clock {}

impl<T: DrawSurface + InputSource + TickSource + Clock> QteHost for T {}

//=== Resolution ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailReason {
    /// A key other than the qualifying one was pressed.
    WrongInput(KeyCode),
    Timeout,
}

/// How an armed challenge ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Success,
    Failed(FailReason),
}

impl Resolution {
    pub fn is_success(self) -> bool {
        matches!(self, Resolution::Success)
    }
}

//=== QteStyle ============================================================

/// Layout and look of the challenge overlay.
///
/// Positions are derived from the viewport centre `(cx, cy)`:
/// the bar sits at `cy + bar_offset_y`, the prompt at `cy + prompt_offset_y`.
#[derive(Debug, Clone, PartialEq)]
pub struct QteStyle {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub overlay_color: Color,
    pub overlay_alpha: f32,
    pub bar_width: f32,
    pub bar_height: f32,
    pub bar_offset_y: f32,
    pub bar_background: Color,
    pub bar_fill: Color,
    pub prompt_offset_y: f32,
    pub prompt_font_size: u32,
    pub prompt_color: Color,
    /// Overlay depth; bar background, fill and prompt stack above it.
    pub base_depth: i32,
    pub tick_interval_ms: u64,
}

impl QteStyle {
    /// Default look for a viewport of the given size.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,
            ..Self::default()
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.viewport_width / 2.0, self.viewport_height / 2.0)
    }
}

impl Default for QteStyle {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            overlay_color: Color::BLACK,
            overlay_alpha: 0.6,
            bar_width: 400.0,
            bar_height: 16.0,
            bar_offset_y: 40.0,
            bar_background: Color::from_hex(0x333333),
            bar_fill: Color::from_hex(0x4fc3f7),
            prompt_offset_y: -30.0,
            prompt_font_size: 28,
            prompt_color: Color::WHITE,
            base_depth: 1000,
            tick_interval_ms: 16,
        }
    }
}
