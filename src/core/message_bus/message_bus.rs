//=========================================================================
// Message Bus
//=========================================================================
//
// Per-type message queues shared by systems and scenes within a tick.
//
// Architecture:
//   GlobalSystems → push<M>() → HashMap<TypeId, Vec<M>>
//                                    ↓
//   scenes ← read<M>() / read_owned<M>()
//                                    ↓
//   GlobalSystems → clear<M>() at the start of the next tick
//
// Game actions and listener Notifications travel this way each tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;

use log::error;

//=== Internal Dependencies ===============================================

use super::message_queue::MessageQueue;

//=== Message =============================================================

/// Anything that can travel on the bus.
pub trait Message: Send + 'static {}

impl<T: Send + 'static> Message for T {}

//=== MessageBus ==========================================================

#[derive(Default)]
pub struct MessageBus {
    queues: HashMap<TypeId, Box<dyn MessageQueue>>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn queue<M: Message>(&self) -> Option<&Vec<M>> {
        self.queues
            .get(&TypeId::of::<M>())
            .and_then(|queue| queue.as_any().downcast_ref::<Vec<M>>())
    }

    fn queue_mut<M: Message>(&mut self) -> Option<&mut Vec<M>> {
        self.queues
            .get_mut(&TypeId::of::<M>())
            .and_then(|queue| queue.as_any_mut().downcast_mut::<Vec<M>>())
    }

    //--- Publishing -------------------------------------------------------

    pub fn push<M: Message>(&mut self, message: M) {
        self.queues
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Box::new(Vec::<M>::new()));

        match self.queue_mut::<M>() {
            Some(queue) => queue.push(message),
            None => error!("Message queue for {} has the wrong type", std::any::type_name::<M>()),
        }
    }

    pub fn extend<M: Message>(&mut self, messages: impl IntoIterator<Item = M>) {
        for message in messages {
            self.push(message);
        }
    }

    //--- Reading ----------------------------------------------------------

    /// Messages of type M queued this tick, oldest first.
    pub fn read<M: Message>(&self) -> &[M] {
        self.queue::<M>().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Copy of the queued messages, for readers that need `&mut` access
    /// to their surroundings while iterating.
    pub fn read_owned<M: Message + Clone>(&self) -> Vec<M> {
        self.read::<M>().to_vec()
    }

    pub fn has_messages<M: Message>(&self) -> bool {
        self.count::<M>() > 0
    }

    pub fn count<M: Message>(&self) -> usize {
        self.queue::<M>().map_or(0, Vec::len)
    }

    //--- Clearing ---------------------------------------------------------

    pub fn clear<M: Message>(&mut self) {
        if let Some(queue) = self.queue_mut::<M>() {
            queue.clear();
        }
    }

    /// Empties every queue but keeps their allocations.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear_queue();
        }
    }

    /// Total messages across every type.
    pub fn total(&self) -> usize {
        self.queues.values().map(|queue| queue.len()).sum()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputSource, KeyCode, KeyNotification, KeySubscriptions};
    use crate::core::notification::Notification;
    use crate::core::scene::{SceneKey, SceneTransition};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Title,
        Play,
    }

    impl SceneKey for TestScene {}

    fn key_notification(key: KeyCode) -> Notification {
        let mut subscriptions = KeySubscriptions::new();
        Notification::Key(KeyNotification {
            subscription: subscriptions.subscribe_any_key(),
            key,
        })
    }

    #[test]
    fn empty_bus_reads_nothing() {
        let bus = MessageBus::new();
        assert!(bus.read::<Notification>().is_empty());
        assert!(!bus.has_messages::<Notification>());
        assert_eq!(bus.total(), 0);
    }

    #[test]
    fn messages_keep_push_order() {
        let mut bus = MessageBus::new();
        let space = key_notification(KeyCode::Space);
        let escape = key_notification(KeyCode::Escape);

        bus.push(space);
        bus.push(escape);

        assert_eq!(bus.read::<Notification>(), &[space, escape]);
        assert_eq!(bus.count::<Notification>(), 2);
    }

    #[test]
    fn types_are_queued_separately() {
        let mut bus = MessageBus::new();
        bus.push(key_notification(KeyCode::KeyE));
        bus.push(SceneTransition::Replace(TestScene::Title, TestScene::Play));
        bus.push(SceneTransition::<TestScene>::Clear);

        assert_eq!(bus.count::<Notification>(), 1);
        assert_eq!(
            bus.read::<SceneTransition<TestScene>>(),
            &[
                SceneTransition::Replace(TestScene::Title, TestScene::Play),
                SceneTransition::Clear,
            ]
        );
        assert_eq!(bus.total(), 3);
    }

    #[test]
    fn read_is_repeatable_until_cleared() {
        let mut bus = MessageBus::new();
        bus.extend([key_notification(KeyCode::Space), key_notification(KeyCode::KeyA)]);

        assert_eq!(bus.read::<Notification>().len(), 2);
        assert_eq!(bus.read_owned::<Notification>().len(), 2);

        bus.clear::<Notification>();
        assert!(bus.read::<Notification>().is_empty());
    }

    #[test]
    fn clear_only_touches_its_type() {
        let mut bus = MessageBus::new();
        bus.push(key_notification(KeyCode::Space));
        bus.push(SceneTransition::Push(TestScene::Play));

        bus.clear::<Notification>();

        assert_eq!(bus.count::<Notification>(), 0);
        assert_eq!(bus.count::<SceneTransition<TestScene>>(), 1);
    }

    #[test]
    fn clear_all_empties_every_queue() {
        let mut bus = MessageBus::new();
        for _ in 0..20 {
            bus.push(key_notification(KeyCode::Space));
            bus.push(SceneTransition::Push(TestScene::Title));
        }

        bus.clear_all();
        assert_eq!(bus.total(), 0);

        bus.push(SceneTransition::Push(TestScene::Play));
        assert_eq!(bus.count::<SceneTransition<TestScene>>(), 1);
    }
}
