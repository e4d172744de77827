//=========================================================================
// Key Subscriptions
//=========================================================================
//
// Listener registry for "a key was pressed" notifications.
//
// Architecture:
//   subscribe_*() → BTreeMap<SubscriptionId, Subscription>
//                          ↓
//   dispatch(events) → Vec<KeyNotification>  (id order per event)
//
// One-shot subscriptions are removed the moment they match, so a second
// press in the same frame cannot notify them again. Persistent ones stay
// until explicitly unsubscribed.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== SubscriptionId ======================================================

/// Ownership handle for a key subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

//=== KeyNotification =====================================================

/// A subscription matched a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotification {
    pub subscription: SubscriptionId,
    pub key: KeyCode,
}

//=== InputSource Trait ===================================================

/// Input capability: subscribe to key presses and release subscriptions.
pub trait InputSource {
    /// Fires once, the next time `key` is pressed.
    fn subscribe_key_once(&mut self, key: KeyCode) -> SubscriptionId;

    /// Fires on every key press, carrying the key, until unsubscribed.
    fn subscribe_any_key(&mut self) -> SubscriptionId;

    /// Releases a subscription. Returns `false` if it was already gone
    /// (e.g. a one-shot that has fired).
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

//=== KeySubscriptions ====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyFilter {
    Exact(KeyCode),
    Any,
}

#[derive(Debug, Clone, Copy)]
struct Subscription {
    filter: KeyFilter,
    once: bool,
}

/// Registry of key subscriptions; turns key presses into notifications.
#[derive(Debug, Default)]
pub struct KeySubscriptions {
    next_id: u64,
    entries: BTreeMap<SubscriptionId, Subscription>,
}

impl KeySubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, filter: KeyFilter, once: bool) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.insert(id, Subscription { filter, once });
        trace!("Key subscription {:?} added ({:?}, once: {})", id, filter, once);
        id
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.contains_key(&id)
    }

    //--- Dispatch ---------------------------------------------------------

    /// Matches every `KeyDown` in `events`, in arrival order, against the
    /// live subscriptions.
    ///
    /// For each press, matching subscriptions are notified in id order.
    /// Other event kinds are ignored.
    pub fn dispatch(&mut self, events: &[InputEvent]) -> Vec<KeyNotification> {
        let mut notifications = Vec::new();

        for key in events.iter().filter_map(InputEvent::pressed_key) {
            let mut fired_once = Vec::new();

            for (&id, sub) in &self.entries {
                let matches = match sub.filter {
                    KeyFilter::Exact(wanted) => wanted == key,
                    KeyFilter::Any => true,
                };

                if matches {
                    notifications.push(KeyNotification { subscription: id, key });
                    if sub.once {
                        fired_once.push(id);
                    }
                }
            }

            for id in fired_once {
                self.entries.remove(&id);
            }
        }

        notifications
    }
}

impl InputSource for KeySubscriptions {
    fn subscribe_key_once(&mut self, key: KeyCode) -> SubscriptionId {
        self.insert(KeyFilter::Exact(key), true)
    }

    fn subscribe_any_key(&mut self) -> SubscriptionId {
        self.insert(KeyFilter::Any, false)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.entries.remove(&id).is_some();
        if !removed {
            debug!("Unsubscribe of inactive key subscription {:?}", id);
        }
        removed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
