//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains systems that process input, manage scenes, and coordinate
// game logic. Systems operate on GlobalContext data.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{Action, InputSystem};
use crate::core::notification::Notification;
use crate::core::scene::{SceneKey, SceneManager};
use crate::core::timing::Clock;

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `input`: High-level input system with action mapping
/// - `scene_manager`: Stack-based scene lifecycle manager
pub struct GlobalSystems<S: SceneKey, A: Action> {
    /// Key and button bindings to game actions.
    pub input: InputSystem<A>,

    /// Scene registration, activation, updates, and transitions.
    pub scene_manager: SceneManager<S>,
}

impl<S: SceneKey, A: Action> GlobalSystems<S, A> {
    /// Creates a new systems container with default-initialized systems.
    ///
    /// Users reach it through [`crate::Engine::init`].
    pub(crate) fn new() -> Self {
        Self {
            input: InputSystem::new(),
            scene_manager: SceneManager::new(),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Samples the frame clock and runs one tick.
    pub(crate) fn update(&mut self, context: &mut GlobalContext<S>) {
        context.clock.advance();
        self.tick(context);
    }

    /// Runs one tick at the context's current frame time.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input**: platform batches → input state and actions
    /// 2. **Publishing**: last tick's actions and notifications are cleared,
    ///    fresh actions pushed
    /// 3. **Notifications**: key subscriptions first, then timers, so a
    ///    qualifying press beats a deadline tick in the same frame
    /// 4. **Expiry**: timed visuals past their deadline are removed
    /// 5. **Scene Update**: active scenes read actions and notifications
    /// 6. **Transitions**: queued scene transitions are applied
    pub(crate) fn tick(&mut self, context: &mut GlobalContext<S>) {
        let now = context.clock.now_ms();

        // 1. Input state and actions
        self.input
            .process_frame(&mut context.input_state, &context.frame_input_events);

        // 2. Publish actions
        context.message_bus.clear::<A>();
        context.message_bus.clear::<Notification>();
        context.message_bus.extend(self.input.actions().iter().copied());

        // 3. Key notifications, then timer notifications
        for batch in &context.frame_input_events {
            for notification in context.key_subscriptions.dispatch(batch) {
                context.message_bus.push(Notification::Key(notification));
            }
        }
        context.frame_input_events.clear();

        for timer in context.timers.advance(now) {
            context.message_bus.push(Notification::Timer(timer));
        }
        trace!(
            "Tick at {} ms: {} notification(s)",
            now,
            context.message_bus.count::<Notification>()
        );

        // 4. Timed visuals
        context.display.purge_expired(now);

        // 5. Scenes
        self.scene_manager.update(context);

        // 6. Transitions
        self.scene_manager.process_transitions(context);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
