/*
    feed_store - Authoritative state layer for the feed application

    Handles:
    - Data models (users, posts, notifications, comment threads)
    - Store structs with command methods (no ambient singletons)
    - Snapshot persistence behind a repository trait
    - Session-aware application controller
*/

pub mod app;
pub mod fixtures;
pub mod model;
pub mod share;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export commonly used types
pub use app::FeedApp;
pub use model::{CommentId, NotificationId, PostId, PostKind, Timestamp, UserId};
pub use share::{SharePayload, ShareTarget};
pub use store::{StoreError, StoreResult};
