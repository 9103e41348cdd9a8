/*
    Model subsystem - Data structures for entities
*/

pub mod types;
pub mod user;
pub mod post;
pub mod notification;
pub mod comment;

pub use types::*;
pub use user::*;
pub use post::*;
pub use notification::*;
pub use comment::*;
