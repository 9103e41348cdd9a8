/*
    comment_store.rs - Standalone comment threads keyed by post id

    Parallel to the comments embedded in posts; the two models are not
    linked. New comments are prepended to their thread, replies are
    appended to their parent. Only top-level comments are addressable:
    replying to a reply, liking a reply or deleting a reply by id are
    silent no-ops.
*/

use crate::feed_store::model::{ActorRef, CommentId, PostId, ThreadComment};
use std::collections::HashMap;
use tracing::debug;

/// Comment threads per post
#[derive(Default)]
pub struct CommentStore {
    threads: HashMap<PostId, Vec<ThreadComment>>,
}

impl CommentStore {
    /// Start empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the demo fixture threads
    pub fn with_fixtures() -> Self {
        CommentStore {
            threads: crate::feed_store::fixtures::seed_threads(),
        }
    }

    /// Prepend a comment to the thread for `post_id`
    pub fn add_comment(
        &mut self,
        post_id: &PostId,
        content: String,
        author: ActorRef,
    ) -> CommentId {
        let comment = ThreadComment::new(post_id.clone(), content, author);
        let id = comment.id.clone();
        self.threads
            .entry(post_id.clone())
            .or_default()
            .insert(0, comment);
        debug!(%post_id, comment_id = %id, "thread comment added");
        id
    }

    /// Append a reply to a top-level comment. Unknown ids and reply
    /// targets that are themselves replies are silent no-ops.
    pub fn add_reply(&mut self, comment_id: &CommentId, content: String, author: ActorRef) {
        for thread in self.threads.values_mut() {
            if let Some(parent) = thread.iter_mut().find(|c| &c.id == comment_id) {
                let reply = ThreadComment::new(parent.post_id.clone(), content, author);
                parent.replies.push(reply);
                return;
            }
        }
    }

    /// Toggle the like state of a top-level comment
    pub fn toggle_like(&mut self, comment_id: &CommentId) {
        for thread in self.threads.values_mut() {
            if let Some(comment) = thread.iter_mut().find(|c| &c.id == comment_id) {
                comment.toggle_like();
                return;
            }
        }
    }

    /// Remove a top-level comment (replies go with it)
    pub fn delete_comment(&mut self, comment_id: &CommentId) {
        for thread in self.threads.values_mut() {
            thread.retain(|c| &c.id != comment_id);
        }
    }

    /// The thread for a post, newest comment first
    pub fn comments_for(&self, post_id: &PostId) -> &[ThreadComment] {
        self.threads.get(post_id).map(Vec::as_slice).unwrap_or(&[])
    }
}
