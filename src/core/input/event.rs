//=========================================================================
// Input Event Types
//
// Engine-side representation of low-level input.
//
// The platform layer (winit) is translated into these types before
// anything crosses the thread boundary, so the logic thread never
// depends on a windowing crate.
//
// Event Flow:
// ```text
// Platform (winit) → InputProcessor → InputEvent
//         ↓
//   StateTracker (held / pressed / released)
//   KeySubscriptions (QTE and other listeners)
//   ActionMapper (game actions)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,

    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the key location, not the produced character: `KeyA` is the
/// same key on QWERTY and AZERTY layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Key the platform reported but the engine does not map.
    Unidentified,
}

impl KeyCode {
    /// Short uppercase name suitable for on-screen prompts ("SPACE", "E", "3").
    pub fn label(self) -> &'static str {
        use KeyCode::*;
        match self {
            Digit0 => "0", Digit1 => "1", Digit2 => "2", Digit3 => "3", Digit4 => "4",
            Digit5 => "5", Digit6 => "6", Digit7 => "7", Digit8 => "8", Digit9 => "9",

            KeyA => "A", KeyB => "B", KeyC => "C", KeyD => "D", KeyE => "E",
            KeyF => "F", KeyG => "G", KeyH => "H", KeyI => "I", KeyJ => "J",
            KeyK => "K", KeyL => "L", KeyM => "M", KeyN => "N", KeyO => "O",
            KeyP => "P", KeyQ => "Q", KeyR => "R", KeyS => "S", KeyT => "T",
            KeyU => "U", KeyV => "V", KeyW => "W", KeyX => "X", KeyY => "Y",
            KeyZ => "Z",

            ArrowDown => "DOWN",
            ArrowLeft => "LEFT",
            ArrowRight => "RIGHT",
            ArrowUp => "UP",

            Space => "SPACE",
            Enter => "ENTER",
            Escape => "ESC",
            Tab => "TAB",
            Backspace => "BACKSPACE",
            Delete => "DELETE",

            Unidentified => "?",
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//=== Modifiers ===========================================================

/// Modifier key state. Left and right variants are not distinguished.
///
/// Bindings require an exact match: `Ctrl+S` does not fire for
/// `Ctrl+Shift+S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };
}

//=== InputEvent ==========================================================

/// Low-level input event as delivered by the platform layer.
///
/// Equality and hashing cover type + key/button + modifiers. `MouseMoved`
/// ignores its coordinates so the platform buffer can coalesce a frame's
/// cursor motion into a single (latest) event.
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },

    /// Cursor position in window pixels, top-left origin.
    MouseMoved { x: f32, y: f32 },

    /// Ignored by every consumer.
    Unidentified,
}

impl InputEvent {
    /// Key pressed by this event, if it is a `KeyDown`.
    pub fn pressed_key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyDown { key, .. } => Some(*key),
            _ => None,
        }
    }
}

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb })
            | (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma },
                MouseButtonDown { button: b, modifiers: mb },
            )
            | (
                MouseButtonUp { button: a, modifiers: ma },
                MouseButtonUp { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers }
            | Self::MouseButtonUp { button, modifiers } => {
                button.hash(state);
                modifiers.hash(state);
            }
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    #[test]
    fn labels_are_prompt_friendly() {
        assert_eq!(KeyCode::Space.label(), "SPACE");
        assert_eq!(KeyCode::KeyE.label(), "E");
        assert_eq!(KeyCode::Digit7.label(), "7");
        assert_eq!(KeyCode::Escape.to_string(), "ESC");
    }

    #[test]
    fn pressed_key_only_for_key_down() {
        assert_eq!(key_down(KeyCode::KeyA).pressed_key(), Some(KeyCode::KeyA));

        let up = InputEvent::KeyUp { key: KeyCode::KeyA, modifiers: Modifiers::NONE };
        assert_eq!(up.pressed_key(), None);
        assert_eq!(InputEvent::MouseMoved { x: 1.0, y: 1.0 }.pressed_key(), None);
    }

    #[test]
    fn modifiers_participate_in_equality() {
        let plain = key_down(KeyCode::KeyS);
        let ctrl = InputEvent::KeyDown { key: KeyCode::KeyS, modifiers: Modifiers::CTRL };
        assert_ne!(plain, ctrl);
        assert_ne!(hash_of(&plain), hash_of(&ctrl));
    }

    #[test]
    fn key_down_and_key_up_differ() {
        let up = InputEvent::KeyUp { key: KeyCode::KeyA, modifiers: Modifiers::NONE };
        assert_ne!(key_down(KeyCode::KeyA), up);
    }

    #[test]
    fn mouse_moved_coalesces_in_sets() {
        let mut set = HashSet::new();
        set.insert(InputEvent::MouseMoved { x: 10.0, y: 10.0 });
        set.replace(InputEvent::MouseMoved { x: 20.0, y: 30.0 });

        assert_eq!(set.len(), 1);
        match set.iter().next() {
            Some(InputEvent::MouseMoved { x, y }) => assert_eq!((*x, *y), (20.0, 30.0)),
            other => panic!("Expected MouseMoved, got {:?}", other),
        }
    }

    #[test]
    fn modifiers_default_is_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }
}
