//=========================================================================
// Input System
//=========================================================================
//
// High-level input handling for the logic thread.
//
// Architecture:
//   frame batches ─┬─► StateTracker     (held/pressed queries for scenes)
//                  ├─► ActionMapper     (game actions → message bus)
//                  └─► KeySubscriptions (listener notifications, see
//                                        GlobalSystems::update)
//
//=========================================================================

//=== Module Declarations =================================================

mod action;
mod action_mapper;
pub mod event;
mod state_tracker;
pub mod subscriptions;

//=== Public API ==========================================================

pub use action::{Action, InputContext};
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use state_tracker::StateTracker;
pub use subscriptions::{InputSource, KeyNotification, KeySubscriptions, SubscriptionId};

//=== Internal Dependencies ===============================================

use action_mapper::ActionMapper;

//=== InputSystem =========================================================

/// Binds keys and buttons to game actions and produces the actions fired
/// during each tick.
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
    actions: Vec<A>,
}

impl<A: Action> InputSystem<A> {
    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
            actions: Vec::with_capacity(8),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key (no modifiers) to an action in `context`.
    pub fn bind_key(&mut self, key: KeyCode, action: A, context: InputContext) {
        self.mapper.bind_key_with_mods(key, Modifiers::NONE, action, context);
    }

    pub fn bind_key_with_mods(
        &mut self,
        key: KeyCode,
        modifiers: Modifiers,
        action: A,
        context: InputContext,
    ) {
        self.mapper.bind_key_with_mods(key, modifiers, action, context);
    }

    pub fn bind_mouse(&mut self, button: MouseButton, action: A, context: InputContext) {
        self.mapper.bind_mouse_with_mods(button, Modifiers::NONE, action, context);
    }

    pub fn unbind_key(&mut self, key: KeyCode, context: InputContext) {
        self.mapper.unbind_key(key, context);
    }

    pub fn clear_context(&mut self, context: InputContext) {
        self.mapper.clear_context(context);
    }

    pub fn set_context(&mut self, context: InputContext) {
        self.mapper.set_context(context);
    }

    pub fn context(&self) -> InputContext {
        self.mapper.current_context()
    }

    //--- Frame Processing -------------------------------------------------

    /// Feeds this tick's batches into `state` and maps them to actions.
    pub(crate) fn process_frame(&mut self, state: &mut StateTracker, batches: &[Vec<InputEvent>]) {
        self.actions.clear();
        state.begin_frame();

        for batch in batches {
            state.process_events(batch);
            self.actions
                .extend(batch.iter().filter_map(|event| self.mapper.map_event(event)));
        }
    }

    /// Actions fired during the last processed tick, in input order.
    pub fn actions(&self) -> &[A] {
        &self.actions
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
