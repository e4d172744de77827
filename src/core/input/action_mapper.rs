//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps press events to game actions based on bindings and context.
//
// Architecture:
//   (key/button, modifiers, context) → HashMap → Action
//
// Only bindings in the active context resolve to actions.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::{Action, InputContext},
    event::{InputEvent, KeyCode, Modifiers, MouseButton},
};

//=== ActionMapper ========================================================

pub(crate) struct ActionMapper<A: Action> {
    key_bindings: HashMap<(KeyCode, Modifiers, InputContext), A>,
    mouse_bindings: HashMap<(MouseButton, Modifiers, InputContext), A>,
    current_context: InputContext,
}

impl<A: Action> ActionMapper<A> {
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
            mouse_bindings: HashMap::new(),
            current_context: InputContext::Primary,
        }
    }

    //--- Binding API ------------------------------------------------------

    pub(crate) fn bind_key_with_mods(
        &mut self,
        key: KeyCode,
        modifiers: Modifiers,
        action: A,
        context: InputContext,
    ) {
        self.key_bindings.insert((key, modifiers, context), action);
    }

    pub(crate) fn bind_mouse_with_mods(
        &mut self,
        button: MouseButton,
        modifiers: Modifiers,
        action: A,
        context: InputContext,
    ) {
        self.mouse_bindings.insert((button, modifiers, context), action);
    }

    /// Removes every binding of `key` in `context`, whatever the modifiers.
    pub(crate) fn unbind_key(&mut self, key: KeyCode, context: InputContext) {
        self.key_bindings.retain(|&(k, _, ctx), _| !(k == key && ctx == context));
    }

    pub(crate) fn clear_context(&mut self, context: InputContext) {
        self.key_bindings.retain(|&(_, _, ctx), _| ctx != context);
        self.mouse_bindings.retain(|&(_, _, ctx), _| ctx != context);
    }

    //--- Event Mapping ----------------------------------------------------

    /// Maps a press event to an action in the active context.
    pub(crate) fn map_event(&self, event: &InputEvent) -> Option<A> {
        match event {
            InputEvent::KeyDown { key, modifiers } => self
                .key_bindings
                .get(&(*key, *modifiers, self.current_context))
                .copied(),
            InputEvent::MouseButtonDown { button, modifiers } => self
                .mouse_bindings
                .get(&(*button, *modifiers, self.current_context))
                .copied(),
            _ => None,
        }
    }

    pub(crate) fn set_context(&mut self, context: InputContext) {
        self.current_context = context;
    }

    pub(crate) fn current_context(&self) -> InputContext {
        self.current_context
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Pause,
        Confirm,
        Save,
    }

    impl Action for TestAction {}

    fn key_down(key: KeyCode, modifiers: Modifiers) -> InputEvent {
        InputEvent::KeyDown { key, modifiers }
    }

    #[test]
    fn maps_bound_key() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key_with_mods(KeyCode::Escape, Modifiers::NONE, TestAction::Pause, InputContext::Primary);

        assert_eq!(
            mapper.map_event(&key_down(KeyCode::Escape, Modifiers::NONE)),
            Some(TestAction::Pause)
        );
        assert_eq!(mapper.map_event(&key_down(KeyCode::Enter, Modifiers::NONE)), None);
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key_with_mods(KeyCode::KeyS, Modifiers::CTRL, TestAction::Save, InputContext::Primary);

        assert_eq!(mapper.map_event(&key_down(KeyCode::KeyS, Modifiers::NONE)), None);
        assert_eq!(
            mapper.map_event(&key_down(KeyCode::KeyS, Modifiers::CTRL)),
            Some(TestAction::Save)
        );
    }

    #[test]
    fn context_selects_binding_set() {
        let menu = InputContext::custom(0);
        let mut mapper = ActionMapper::new();
        mapper.bind_key_with_mods(KeyCode::Enter, Modifiers::NONE, TestAction::Pause, InputContext::Primary);
        mapper.bind_key_with_mods(KeyCode::Enter, Modifiers::NONE, TestAction::Confirm, menu);

        let enter = key_down(KeyCode::Enter, Modifiers::NONE);
        assert_eq!(mapper.map_event(&enter), Some(TestAction::Pause));

        mapper.set_context(menu);
        assert_eq!(mapper.current_context(), menu);
        assert_eq!(mapper.map_event(&enter), Some(TestAction::Confirm));
    }

    #[test]
    fn mouse_buttons_map_on_press_only() {
        let mut mapper = ActionMapper::new();
        mapper.bind_mouse_with_mods(MouseButton::Left, Modifiers::NONE, TestAction::Confirm, InputContext::Primary);

        let down = InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::NONE };
        let up = InputEvent::MouseButtonUp { button: MouseButton::Left, modifiers: Modifiers::NONE };
        assert_eq!(mapper.map_event(&down), Some(TestAction::Confirm));
        assert_eq!(mapper.map_event(&up), None);
    }

    #[test]
    fn unbind_key_removes_all_modifier_variants() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key_with_mods(KeyCode::KeyS, Modifiers::NONE, TestAction::Confirm, InputContext::Primary);
        mapper.bind_key_with_mods(KeyCode::KeyS, Modifiers::CTRL, TestAction::Save, InputContext::Primary);

        mapper.unbind_key(KeyCode::KeyS, InputContext::Primary);

        assert_eq!(mapper.map_event(&key_down(KeyCode::KeyS, Modifiers::NONE)), None);
        assert_eq!(mapper.map_event(&key_down(KeyCode::KeyS, Modifiers::CTRL)), None);
    }

    #[test]
    fn clear_context_leaves_other_contexts() {
        let menu = InputContext::custom(1);
        let mut mapper = ActionMapper::new();
        mapper.bind_key_with_mods(KeyCode::Escape, Modifiers::NONE, TestAction::Pause, InputContext::Primary);
        mapper.bind_key_with_mods(KeyCode::Enter, Modifiers::NONE, TestAction::Confirm, menu);

        mapper.clear_context(InputContext::Primary);
        assert_eq!(mapper.map_event(&key_down(KeyCode::Escape, Modifiers::NONE)), None);

        mapper.set_context(menu);
        assert_eq!(
            mapper.map_event(&key_down(KeyCode::Enter, Modifiers::NONE)),
            Some(TestAction::Confirm)
        );
    }
}
