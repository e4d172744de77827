//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use whiplash::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Input system
pub use crate::core::input::{Action, InputContext, InputSource, KeyCode, Modifiers, MouseButton};

// Scene system
pub use crate::core::scene::{Scene, SceneKey, SceneTransition};

// Message bus
pub use crate::core::message_bus::MessageBus;
pub use crate::core::notification::Notification;

// Display
pub use crate::core::display::{Color, DrawSurface, Origin, RectSpec, TextSpec, VisualHandle};

// Timing
pub use crate::core::timing::{Clock, TickSource};

// Quick-time events
pub use crate::core::qte::{FailReason, QteChallenge, QteHost, QteManager, QteStyle, Resolution};
