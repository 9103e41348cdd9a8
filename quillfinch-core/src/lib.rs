//! Quillfinch — a local-first social feed state engine.
//!
//! Holds all application state (users and session, posts, notifications,
//! comment threads) in memory and mirrors the auth and post stores to a
//! pluggable snapshot repository on every mutation. Single-threaded and
//! synchronous by design; there is no server and no network protocol.

pub mod config;
pub mod feed_store;
pub mod logging;

#[cfg(test)]
pub mod test_utils;

pub use config::{Config, ConfigError};
pub use feed_store::model::{CommentId, NotificationId, PostId, PostKind, Timestamp, UserId};
pub use feed_store::store::{StoreError, StoreResult};
pub use feed_store::FeedApp;
pub use logging::{init_logging, LogLevel};
