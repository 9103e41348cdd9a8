/*
    comment.rs - Standalone comment thread model

    A second comment model, parallel to the comments embedded in posts:
    threads keyed by post id, with one level of reply nesting. The type
    would structurally allow deeper nesting, but the store only ever
    attaches replies to top-level comments.

    Likes here are a bare count plus a viewer-relative flag stored
    globally; a double toggle by one viewer is indistinguishable from
    two different viewers. The shape is kept as specified.
*/

use super::types::{ActorRef, CommentId, PostId, Timestamp};
use serde::{Deserialize, Serialize};

/// A comment in a standalone thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadComment {
    pub id: CommentId,
    pub post_id: PostId,
    pub content: String,
    pub author: ActorRef,

    /// Like count, not a set of user ids
    pub likes: u32,

    /// Whether the last toggler liked it (viewer-relative, stored globally)
    pub is_liked: bool,

    pub created_at: Timestamp,

    /// One level of nesting only; replies never carry replies
    pub replies: Vec<ThreadComment>,
}

impl ThreadComment {
    pub fn new(post_id: PostId, content: String, author: ActorRef) -> Self {
        ThreadComment {
            id: CommentId::generate(),
            post_id,
            content,
            author,
            likes: 0,
            is_liked: false,
            created_at: Timestamp::now(),
            replies: Vec::new(),
        }
    }

    /// Flip the viewer-relative like state, adjusting the count
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.is_liked = !self.is_liked;
    }
}
