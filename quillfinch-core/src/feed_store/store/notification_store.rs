/*
    notification_store.rs - In-memory notification list

    Prepend on create, wholesale clear, derived unread count. Not
    persisted and not linked to the other stores; dispatch happens at
    the application controller level.
*/

use crate::feed_store::model::{
    Notification, NotificationDraft, NotificationId, Timestamp,
};
use tracing::debug;

/// Notification list for the current user
#[derive(Default)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
}

impl NotificationStore {
    /// Start empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the demo fixture entries
    pub fn with_fixtures() -> Self {
        NotificationStore {
            notifications: crate::feed_store::fixtures::seed_notifications(),
        }
    }

    /// Prepend a new unread notification
    pub fn add(&mut self, draft: NotificationDraft) -> &Notification {
        let notification =
            Notification::from_draft(draft, NotificationId::generate(), Timestamp::now());
        debug!(id = %notification.id, kind = ?notification.kind, "notification added");
        self.notifications.insert(0, notification);
        &self.notifications[0]
    }

    /// Mark one notification read. Idempotent; unknown id is a no-op.
    pub fn mark_read(&mut self, id: &NotificationId) {
        if let Some(n) = self.notifications.iter_mut().find(|n| &n.id == id) {
            n.read = true;
        }
    }

    /// Mark everything read
    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    /// Drop all notifications
    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    /// Count of unread notifications, derived from the list
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// All notifications, most recent first
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}
