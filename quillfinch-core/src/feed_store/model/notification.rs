/*
    notification.rs - Notification model

    Notifications are in-memory only (never persisted). The unread count
    is derived from the list rather than tracked as a separate counter.
*/

use super::types::{ActorRef, NotificationId, PostId, Timestamp};
use serde::{Deserialize, Serialize};

/// What triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    Mention,
    Share,
}

/// Input for creating a notification. Id, read flag and timestamp are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub kind: NotificationKind,
    pub message: String,
    pub from: ActorRef,
    pub post_id: Option<PostId>,
}

/// A notification shown to the current user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,

    /// Actor snapshot (who triggered this)
    pub from: ActorRef,

    /// The post this refers to, if any
    pub post_id: Option<PostId>,

    pub read: bool,
    pub created_at: Timestamp,
}

impl Notification {
    pub fn from_draft(draft: NotificationDraft, id: NotificationId, created_at: Timestamp) -> Self {
        Notification {
            id,
            kind: draft.kind,
            message: draft.message,
            from: draft.from,
            post_id: draft.post_id,
            read: false,
            created_at,
        }
    }
}
