//=========================================================================
// Notifications
//=========================================================================
//
// Listener deliveries published on the message bus each tick.
//
// Subscribers hold the id they were handed at subscription time and
// match it against incoming notifications. Ids that no longer belong to
// anyone are simply not matched.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::KeyNotification;
use crate::core::timing::TimerId;

//=== Notification ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// A key subscription matched a press.
    Key(KeyNotification),

    /// A scheduled timer came due.
    Timer(TimerId),
}

impl From<KeyNotification> for Notification {
    fn from(notification: KeyNotification) -> Self {
        Self::Key(notification)
    }
}

impl From<TimerId> for Notification {
    fn from(id: TimerId) -> Self {
        Self::Timer(id)
    }
}
