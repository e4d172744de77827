//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - input_state: low-level input state (keys, mouse, modifiers)
// - scene_transitions: command queue for scene changes
// - message_bus: this tick's actions and listener notifications
// - display / key_subscriptions / timers / clock: the capabilities a
//   QteManager is driven with
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::display::{DisplayList, DrawSurface, RectSpec, TextSpec, VisualHandle};
use crate::core::input::{
    Action, InputEvent, InputSource, KeyCode, KeySubscriptions, StateTracker, SubscriptionId,
};
use crate::core::message_bus::MessageBus;
use crate::core::notification::Notification;
use crate::core::scene::{SceneKey, SceneTransition, TransitionQueue};
use crate::core::timing::{Clock, FrameClock, TickSource, TimerId, TimerScheduler};

//=== GlobalContext =======================================================

/// Shared context data accessible to scenes during updates.
///
/// Scenes receive `&mut GlobalContext` during their lifecycle methods.
/// It implements [`DrawSurface`], [`InputSource`], [`TickSource`] and
/// [`Clock`], so a scene can hand it straight to a
/// [`QteManager`](crate::core::qte::QteManager) as the host.
pub struct GlobalContext<S: SceneKey> {
    /// Raw input state tracker for low-level input queries.
    pub input_state: StateTracker,

    /// Transition queue for scene changes, applied at the tick boundary.
    pub scene_transitions: TransitionQueue<S>,

    /// Actions and notifications published this tick.
    pub message_bus: MessageBus,

    /// Every visual currently alive.
    pub display: DisplayList,

    /// Key press listeners.
    pub key_subscriptions: KeySubscriptions,

    /// Repeating timers.
    pub timers: TimerScheduler,

    /// Frame time, sampled once per tick.
    pub clock: FrameClock,

    /// Input batches received from the platform for the current tick.
    /// Consumed by GlobalSystems; scenes use `input_state` instead.
    pub(crate) frame_input_events: Vec<Vec<InputEvent>>,
}

impl<S: SceneKey> GlobalContext<S> {
    /// Creates a new context with empty state.
    pub(crate) fn new() -> Self {
        Self {
            input_state: StateTracker::new(),
            scene_transitions: TransitionQueue::new(),
            message_bus: MessageBus::new(),
            display: DisplayList::new(),
            key_subscriptions: KeySubscriptions::new(),
            timers: TimerScheduler::new(),
            clock: FrameClock::new(),
            frame_input_events: Vec::new(),
        }
    }

    /// Queues a scene transition for the end of this tick.
    pub fn transition(&mut self, transition: SceneTransition<S>) {
        self.scene_transitions.push(transition);
    }

    /// Game actions fired this tick.
    pub fn actions<A: Action>(&self) -> &[A] {
        self.message_bus.read::<A>()
    }

    /// Listener notifications published this tick.
    ///
    /// Returned by value so the caller can pass `&mut self` to whoever
    /// handles them.
    pub fn notifications(&self) -> Vec<Notification> {
        self.message_bus.read_owned::<Notification>()
    }

    /// Seconds elapsed since the previous tick.
    pub fn delta_secs(&self) -> f32 {
        self.clock.delta_secs()
    }
}

//=== Capabilities ========================================================

impl<S: SceneKey> DrawSurface for GlobalContext<S> {
    fn create_rect(&mut self, spec: RectSpec) -> VisualHandle {
        self.display.create_rect(spec)
    }

    fn create_text(&mut self, spec: TextSpec) -> VisualHandle {
        self.display.create_text(spec)
    }

    fn set_rect_width(&mut self, handle: VisualHandle, width: f32) -> bool {
        self.display.set_rect_width(handle, width)
    }

    fn set_position(&mut self, handle: VisualHandle, x: f32, y: f32) -> bool {
        self.display.set_position(handle, x, y)
    }

    fn destroy(&mut self, handle: VisualHandle) -> bool {
        self.display.destroy(handle)
    }
}

impl<S: SceneKey> InputSource for GlobalContext<S> {
    fn subscribe_key_once(&mut self, key: KeyCode) -> SubscriptionId {
        self.key_subscriptions.subscribe_key_once(key)
    }

    fn subscribe_any_key(&mut self) -> SubscriptionId {
        self.key_subscriptions.subscribe_any_key()
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.key_subscriptions.unsubscribe(id)
    }
}

impl<S: SceneKey> TickSource for GlobalContext<S> {
    fn schedule_repeating(&mut self, interval_ms: u64) -> TimerId {
        self.timers.schedule_repeating(interval_ms)
    }

    fn cancel_timer(&mut self, id: TimerId) -> bool {
        self.timers.cancel_timer(id)
    }
}

impl<S: SceneKey> Clock for GlobalContext<S> {
    fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
