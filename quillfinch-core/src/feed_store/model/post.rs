/*
    post.rs - Feed post model

    A post carries its author fields denormalized at creation time
    (snapshot-at-creation invariant: later profile edits never update
    existing posts). Hashtags are derived once from the content when the
    post is created and never recomputed.

    Likes and saved_by behave as sets: the toggle operations enforce
    uniqueness. Embedded comments are append-only.
*/

use super::types::{AuthorRef, CommentId, PostId, PostKind, Timestamp, UserId};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static HASHTAG_RE: OnceLock<Regex> = OnceLock::new();

fn hashtag_re() -> &'static Regex {
    HASHTAG_RE.get_or_init(|| {
        Regex::new(r"#[A-Za-z0-9_]+").unwrap_or_else(|error| panic!("hashtag regex failed to compile: {error}"))
    })
}

/// Extract `#word` tokens from post content, in match order.
///
/// Duplicates are preserved: a tag used twice in one post counts twice
/// in the trending aggregation.
pub fn extract_hashtags(content: &str) -> Vec<String> {
    hashtag_re()
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A comment embedded in a post's comment sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostComment {
    pub id: CommentId,
    pub content: String,
    pub author: AuthorRef,
    pub created_at: Timestamp,
}

/// Input for creating a post. Id, timestamp, hashtags and the
/// like/comment/save collections are assigned by the store.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub kind: PostKind,
    pub content: String,
    pub author: AuthorRef,
    pub media: Option<String>,
    pub url: Option<String>,
}

/// Input for an embedded comment
#[derive(Debug, Clone)]
pub struct CommentDraft {
    pub content: String,
    pub author: AuthorRef,
}

/// A post in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub kind: PostKind,
    pub content: String,

    /// Author snapshot, frozen at creation
    pub author: AuthorRef,

    pub created_at: Timestamp,

    /// Media reference, present only for image/video posts
    pub media: Option<String>,

    /// Link target, present only for link posts
    pub url: Option<String>,

    /// User ids that liked this post (set semantics via toggle)
    pub likes: Vec<UserId>,

    /// Ordered, append-only comment sequence
    pub comments: Vec<PostComment>,

    /// Hashtags derived from content at creation, in match order
    pub hashtags: Vec<String>,

    /// User ids that saved this post (set semantics via toggle)
    pub saved_by: Vec<UserId>,
}

impl Post {
    /// Create a post from a draft, deriving hashtags from the content
    pub fn from_draft(draft: PostDraft, id: PostId, created_at: Timestamp) -> Self {
        let hashtags = extract_hashtags(&draft.content);
        Post {
            id,
            kind: draft.kind,
            content: draft.content,
            author: draft.author,
            created_at,
            media: draft.media,
            url: draft.url,
            likes: Vec::new(),
            comments: Vec::new(),
            hashtags,
            saved_by: Vec::new(),
        }
    }

    /// Toggle a user's like: remove if present, add if not
    pub fn toggle_like(&mut self, user_id: &UserId) {
        if let Some(pos) = self.likes.iter().position(|id| id == user_id) {
            self.likes.remove(pos);
        } else {
            self.likes.push(user_id.clone());
        }
    }

    /// Toggle a user's save: remove if present, add if not
    pub fn toggle_save(&mut self, user_id: &UserId) {
        if let Some(pos) = self.saved_by.iter().position(|id| id == user_id) {
            self.saved_by.remove(pos);
        } else {
            self.saved_by.push(user_id.clone());
        }
    }

    /// Append an embedded comment with a fresh id and timestamp
    pub fn add_comment(&mut self, draft: CommentDraft) -> &PostComment {
        self.comments.push(PostComment {
            id: CommentId::generate(),
            content: draft.content,
            author: draft.author,
            created_at: Timestamp::now(),
        });
        self.comments
            .last()
            .expect("comment was just pushed")
    }

    pub fn liked_by(&self, user_id: &UserId) -> bool {
        self.likes.contains(user_id)
    }

    pub fn saved_by_user(&self, user_id: &UserId) -> bool {
        self.saved_by.contains(user_id)
    }
}
