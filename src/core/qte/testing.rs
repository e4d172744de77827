//=========================================================================
// QTE Test Host
//=========================================================================
//
// A QteHost backed by the real display list, subscriptions and timer
// scheduler, driven by a ManualClock, that records every capability
// call for later inspection.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{QteManager, Resolution};
use crate::core::display::{DisplayList, DrawSurface, RectSpec, TextSpec, VisualHandle};
use crate::core::input::{InputEvent, InputSource, KeyCode, KeySubscriptions, Modifiers, SubscriptionId};
use crate::core::notification::Notification;
use crate::core::timing::{Clock, ManualClock, TickSource, TimerId, TimerScheduler};

//=== HostCall ============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum HostCall {
    Create(VisualHandle),
    SetWidth(VisualHandle, f32),
    SetPosition(VisualHandle),
    Destroy(VisualHandle),
    Subscribe(SubscriptionId),
    Unsubscribe(SubscriptionId),
    Schedule(TimerId),
    CancelTimer(TimerId),
    Outcome(&'static str),
}

//=== RecordingHost =======================================================

pub(crate) struct RecordingHost {
    pub display: DisplayList,
    pub keys: KeySubscriptions,
    pub timers: TimerScheduler,
    pub clock: ManualClock,
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            display: DisplayList::new(),
            keys: KeySubscriptions::new(),
            timers: TimerScheduler::new(),
            clock: ManualClock::new(0),
            calls: Vec::new(),
        }
    }

    /// Callback that records `tag` as an outcome.
    pub fn outcome(tag: &'static str) -> impl FnOnce(&mut RecordingHost) + Send + 'static {
        move |host: &mut RecordingHost| host.calls.push(HostCall::Outcome(tag))
    }

    /// Runs one frame: advances the clock by `ms`, presses `keys`, then
    /// delivers key notifications before timer notifications.
    pub fn frame(
        &mut self,
        qte: &mut QteManager<Self>,
        ms: u64,
        keys: &[KeyCode],
    ) -> Vec<Resolution> {
        self.clock.advance(ms);

        let events: Vec<InputEvent> = keys
            .iter()
            .map(|&key| InputEvent::KeyDown { key, modifiers: Modifiers::NONE })
            .collect();

        let mut notifications: Vec<Notification> = self
            .keys
            .dispatch(&events)
            .into_iter()
            .map(Notification::from)
            .collect();
        notifications.extend(
            self.timers
                .advance(self.clock.now_ms())
                .into_iter()
                .map(Notification::from),
        );

        notifications
            .iter()
            .filter_map(|notification| qte.handle(self, notification))
            .collect()
    }

    //--- Inspection -------------------------------------------------------

    fn count(&self, predicate: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    pub fn created(&self) -> Vec<VisualHandle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Create(handle) => Some(*handle),
                _ => None,
            })
            .collect()
    }

    pub fn creates(&self) -> usize {
        self.count(|call| matches!(call, HostCall::Create(_)))
    }

    pub fn destroys(&self) -> usize {
        self.count(|call| matches!(call, HostCall::Destroy(_)))
    }

    pub fn subscribes(&self) -> usize {
        self.count(|call| matches!(call, HostCall::Subscribe(_)))
    }

    pub fn unsubscribes(&self) -> usize {
        self.count(|call| matches!(call, HostCall::Unsubscribe(_)))
    }

    pub fn schedules(&self) -> usize {
        self.count(|call| matches!(call, HostCall::Schedule(_)))
    }

    pub fn timer_cancels(&self) -> usize {
        self.count(|call| matches!(call, HostCall::CancelTimer(_)))
    }

    pub fn outcomes(&self) -> Vec<&'static str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Outcome(tag) => Some(*tag),
                _ => None,
            })
            .collect()
    }
}

//=== Capabilities ========================================================

impl DrawSurface for RecordingHost {
    fn create_rect(&mut self, spec: RectSpec) -> VisualHandle {
        let handle = self.display.create_rect(spec);
        self.calls.push(HostCall::Create(handle));
        handle
    }

    fn create_text(&mut self, spec: TextSpec) -> VisualHandle {
        let handle = self.display.create_text(spec);
        self.calls.push(HostCall::Create(handle));
        handle
    }

    fn set_rect_width(&mut self, handle: VisualHandle, width: f32) -> bool {
        self.calls.push(HostCall::SetWidth(handle, width));
        self.display.set_rect_width(handle, width)
    }

    fn set_position(&mut self, handle: VisualHandle, x: f32, y: f32) -> bool {
        self.calls.push(HostCall::SetPosition(handle));
        self.display.set_position(handle, x, y)
    }

    fn destroy(&mut self, handle: VisualHandle) -> bool {
        self.calls.push(HostCall::Destroy(handle));
        self.display.destroy(handle)
    }
}

impl InputSource for RecordingHost {
    fn subscribe_key_once(&mut self, key: KeyCode) -> SubscriptionId {
        let id = self.keys.subscribe_key_once(key);
        self.calls.push(HostCall::Subscribe(id));
        id
    }

    fn subscribe_any_key(&mut self) -> SubscriptionId {
        let id = self.keys.subscribe_any_key();
        self.calls.push(HostCall::Subscribe(id));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.calls.push(HostCall::Unsubscribe(id));
        self.keys.unsubscribe(id)
    }
}

impl TickSource for RecordingHost {
    fn schedule_repeating(&mut self, interval_ms: u64) -> TimerId {
        let id = self.timers.schedule_repeating(interval_ms);
        self.calls.push(HostCall::Schedule(id));
        id
    }

    fn cancel_timer(&mut self, id: TimerId) -> bool {
        self.calls.push(HostCall::CancelTimer(id));
        self.timers.cancel_timer(id)
    }
}

impl Clock for RecordingHost {
    fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }
}
