/*
    post_store.rs - The feed

    Posts are kept most-recent-first: creation prepends. Mutations
    persist the full posts collection to the "posts" blob; the pure
    reads (search, hashtag counts, saved filter) are O(n) scans over
    the in-memory collection.

    Authorization and not-found conditions are silent no-ops per the
    store's failure taxonomy.
*/

use crate::feed_store::model::{CommentDraft, Post, PostDraft, PostId, Timestamp, UserId};
use crate::feed_store::store::errors::StoreResult;
use crate::feed_store::store::repository::{
    load_snapshot, save_snapshot, SnapshotRepository, POSTS_SNAPSHOT_KEY,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// The posts collection
pub struct PostStore {
    posts: Vec<Post>,
    repo: Arc<dyn SnapshotRepository>,
}

impl std::fmt::Debug for PostStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostStore")
            .field("posts", &self.posts)
            .finish_non_exhaustive()
    }
}

impl PostStore {
    /// Rehydrate from the repository, starting empty if nothing was
    /// ever persisted
    pub fn load(repo: Arc<dyn SnapshotRepository>) -> StoreResult<Self> {
        let posts: Vec<Post> =
            load_snapshot(repo.as_ref(), POSTS_SNAPSHOT_KEY)?.unwrap_or_default();

        debug!(posts = posts.len(), "post store rehydrated");

        Ok(PostStore { posts, repo })
    }

    fn persist(&self) -> StoreResult<()> {
        save_snapshot(self.repo.as_ref(), POSTS_SNAPSHOT_KEY, &self.posts)
    }

    /// Create a post and prepend it to the feed
    pub fn add_post(&mut self, draft: PostDraft) -> StoreResult<Post> {
        let post = Post::from_draft(draft, PostId::generate(), Timestamp::now());
        self.posts.insert(0, post.clone());
        self.persist()?;

        metrics::counter!("quillfinch_posts_created_total").increment(1);
        info!(post_id = %post.id, author = %post.author.username, "post created");
        Ok(post)
    }

    /// Remove a post iff it exists and the caller is its author or an
    /// admin. Returns whether anything was removed.
    pub fn delete_post(
        &mut self,
        post_id: &PostId,
        user_id: &UserId,
        is_admin: bool,
    ) -> StoreResult<bool> {
        let Some(pos) = self.posts.iter().position(|p| &p.id == post_id) else {
            return Ok(false);
        };
        if &self.posts[pos].author.id != user_id && !is_admin {
            debug!(%post_id, %user_id, "delete refused: not author, not admin");
            return Ok(false);
        }

        self.posts.remove(pos);
        self.persist()?;

        info!(%post_id, %user_id, is_admin, "post deleted");
        Ok(true)
    }

    /// Toggle a like. Unknown post id is a no-op.
    pub fn toggle_like(&mut self, post_id: &PostId, user_id: &UserId) -> StoreResult<()> {
        let Some(post) = self.posts.iter_mut().find(|p| &p.id == post_id) else {
            return Ok(());
        };
        post.toggle_like(user_id);
        self.persist()
    }

    /// Toggle a save. Unknown post id is a no-op.
    pub fn toggle_save(&mut self, post_id: &PostId, user_id: &UserId) -> StoreResult<()> {
        let Some(post) = self.posts.iter_mut().find(|p| &p.id == post_id) else {
            return Ok(());
        };
        post.toggle_save(user_id);
        self.persist()
    }

    /// Append a comment to a post. Unknown post id is a no-op.
    pub fn add_comment(&mut self, post_id: &PostId, draft: CommentDraft) -> StoreResult<()> {
        let Some(post) = self.posts.iter_mut().find(|p| &p.id == post_id) else {
            return Ok(());
        };
        post.add_comment(draft);
        self.persist()
    }

    /// Occurrence counts of every hashtag across all posts. Duplicate
    /// tags within one post count individually. No ordering guarantee.
    pub fn hashtag_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for post in &self.posts {
            for tag in &post.hashtags {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Posts saved by the given user, in feed order. An empty user id
    /// yields an empty result.
    pub fn saved_posts(&self, user_id: &UserId) -> Vec<Post> {
        if user_id.0.is_empty() {
            return Vec::new();
        }
        self.posts
            .iter()
            .filter(|p| p.saved_by_user(user_id))
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over content, hashtags, author
    /// name and author username. Feed order is preserved.
    pub fn search(&self, query: &str) -> Vec<Post> {
        let term = query.to_lowercase();
        self.posts
            .iter()
            .filter(|p| {
                p.content.to_lowercase().contains(&term)
                    || p.hashtags.iter().any(|t| t.to_lowercase().contains(&term))
                    || p.author.name.to_lowercase().contains(&term)
                    || p.author.username.to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }

    /// The feed, most recent first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, post_id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == post_id)
    }
}
