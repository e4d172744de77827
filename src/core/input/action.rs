//=========================================================================
// Action Trait & Input Context
//=========================================================================
//
// Actions: opaque game-defined identifiers routed by the engine.
// Contexts: separate binding sets for different game states.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// Actions are mapped from raw input by the [`InputSystem`](super::InputSystem)
/// and published on the message bus each tick.
///
/// ```
/// use whiplash::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Pause, Confirm }
///
/// impl Action for GameAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== InputContext ========================================================

/// Identifies which set of bindings is active.
///
/// The same key can map to different actions per context, e.g. Space =
/// Jump in gameplay and Space = Select in a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputContext {
    /// Default gameplay context.
    #[default]
    Primary,

    /// User-defined context (menus, dialogue, ...).
    Custom(u32),
}

impl InputContext {
    #[inline]
    pub const fn custom(id: u32) -> Self {
        Self::Custom(id)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_is_default() {
        assert_eq!(InputContext::default(), InputContext::Primary);
    }

    #[test]
    fn primary_differs_from_custom_zero() {
        assert_ne!(InputContext::Primary, InputContext::custom(0));
    }

    #[test]
    fn custom_contexts_are_const() {
        const MENU: InputContext = InputContext::custom(0);
        const DIALOGUE: InputContext = InputContext::custom(1);
        assert_ne!(MENU, DIALOGUE);
    }
}
