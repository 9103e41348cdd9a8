/*
    Store subsystem - State stores and persistence seam
*/

pub mod auth_store;
pub mod comment_store;
pub mod errors;
pub mod notification_store;
pub mod post_store;
pub mod repository;

pub use auth_store::AuthStore;
pub use comment_store::CommentStore;
pub use errors::{StoreError, StoreResult};
pub use notification_store::NotificationStore;
pub use post_store::PostStore;
pub use repository::{FileRepository, MemoryRepository, SnapshotRepository};
