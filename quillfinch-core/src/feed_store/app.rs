/*
    app.rs - Application controller

    FeedApp owns all four stores and exposes the session-aware command
    surface: callers never pass user ids around, the controller reads
    the active session and stamps author snapshots itself.

    Cross-store behavior lives only here. The stores stay independent;
    the controller wires notification dispatch (a like or comment on
    another user's post emits a notification) and the share capability.
*/

use crate::config::Config;
use crate::feed_store::model::{
    ActorRef, AuthorRef, CommentDraft, CommentId, NewUser, Notification, NotificationDraft,
    NotificationId, NotificationKind, Post, PostDraft, PostId, PostKind, PreferencesPatch,
    PrivacyPatch, ProfilePatch, ThreadComment, User, UserId,
};
use crate::feed_store::share::{dispatch_share, NoopShare, SharePayload, ShareTarget};
use crate::feed_store::store::{
    AuthStore, CommentStore, FileRepository, MemoryRepository, NotificationStore, PostStore,
    SnapshotRepository, StoreResult,
};
use std::collections::HashMap;
use std::sync::Arc;

fn author_of(user: &User) -> AuthorRef {
    AuthorRef {
        id: user.id.clone(),
        name: user.name.clone(),
        username: user.username.clone(),
        avatar: user.avatar.clone(),
    }
}

fn actor_of(user: &User) -> ActorRef {
    ActorRef {
        name: user.name.clone(),
        username: user.username.clone(),
        avatar: user.avatar.clone(),
    }
}

/// The application state, owned in one place
pub struct FeedApp {
    auth: AuthStore,
    posts: PostStore,
    notifications: NotificationStore,
    comments: CommentStore,
    share_target: Box<dyn ShareTarget>,
}

impl FeedApp {
    /// Build against an explicit repository and share target, with
    /// empty notification/comment stores. This is the seam unit tests
    /// use (in-memory repository, recording share target).
    pub fn new(
        repo: Arc<dyn SnapshotRepository>,
        share_target: Box<dyn ShareTarget>,
    ) -> StoreResult<Self> {
        Ok(FeedApp {
            auth: AuthStore::load(repo.clone())?,
            posts: PostStore::load(repo)?,
            notifications: NotificationStore::new(),
            comments: CommentStore::new(),
            share_target,
        })
    }

    /// Build from configuration: file-backed persistence under the
    /// configured data dir (or memory-only when persistence is off),
    /// fixture seeding per the config flag, no share capability.
    pub fn open(config: &Config) -> StoreResult<Self> {
        let repo: Arc<dyn SnapshotRepository> = if config.store.persist {
            Arc::new(FileRepository::new(config.store.data_dir.clone())?)
        } else {
            Arc::new(MemoryRepository::new())
        };

        let mut app = Self::new(repo, Box::new(NoopShare))?;
        if config.store.seed_fixtures {
            app.notifications = NotificationStore::with_fixtures();
            app.comments = CommentStore::with_fixtures();
        }
        Ok(app)
    }

    // ── Auth ────────────────────────────────────────────────────────

    pub fn register(&mut self, data: NewUser) -> StoreResult<User> {
        self.auth.register(data)
    }

    pub fn login(&mut self, email: &str, password: &str) -> StoreResult<User> {
        self.auth.login(email, password)
    }

    pub fn logout(&mut self) -> StoreResult<()> {
        self.auth.logout()
    }

    pub fn update_profile(&mut self, patch: &ProfilePatch) -> StoreResult<Option<User>> {
        self.auth.update_profile(patch)
    }

    pub fn update_privacy(&mut self, patch: &PrivacyPatch) -> StoreResult<Option<User>> {
        self.auth.update_privacy(patch)
    }

    pub fn update_preferences(&mut self, patch: &PreferencesPatch) -> StoreResult<Option<User>> {
        self.auth.update_preferences(patch)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.auth.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    // ── Posts ───────────────────────────────────────────────────────

    /// Create a post as the current user. `Ok(None)` when no session
    /// is active.
    pub fn create_post(
        &mut self,
        kind: PostKind,
        content: String,
        media: Option<String>,
        url: Option<String>,
    ) -> StoreResult<Option<Post>> {
        let Some(user) = self.auth.current_user() else {
            return Ok(None);
        };
        let draft = PostDraft {
            kind,
            content,
            author: author_of(user),
            media,
            url,
        };
        self.posts.add_post(draft).map(Some)
    }

    /// Delete a post as the current user, with the admin override
    pub fn delete_post(&mut self, post_id: &PostId) -> StoreResult<bool> {
        let Some(user) = self.auth.current_user() else {
            return Ok(false);
        };
        let (user_id, is_admin) = (user.id.clone(), user.is_admin);
        self.posts.delete_post(post_id, &user_id, is_admin)
    }

    /// Toggle the current user's like. Liking (not unliking) another
    /// user's post emits a notification.
    pub fn toggle_like(&mut self, post_id: &PostId) -> StoreResult<()> {
        let Some(user) = self.auth.current_user() else {
            return Ok(());
        };
        let me = user.id.clone();
        let actor = actor_of(user);

        let Some(post) = self.posts.get(post_id) else {
            return Ok(());
        };
        let becomes_liked = !post.liked_by(&me);
        let author_id = post.author.id.clone();

        self.posts.toggle_like(post_id, &me)?;

        if becomes_liked && author_id != me {
            self.notifications.add(NotificationDraft {
                kind: NotificationKind::Like,
                message: "le dio me gusta a tu publicación".to_string(),
                from: actor,
                post_id: Some(post_id.clone()),
            });
        }
        Ok(())
    }

    /// Toggle the current user's save
    pub fn toggle_save(&mut self, post_id: &PostId) -> StoreResult<()> {
        let Some(user) = self.auth.current_user() else {
            return Ok(());
        };
        let me = user.id.clone();
        self.posts.toggle_save(post_id, &me)
    }

    /// Comment on a post as the current user. Commenting on another
    /// user's post emits a notification.
    pub fn comment_on(&mut self, post_id: &PostId, content: String) -> StoreResult<()> {
        let Some(user) = self.auth.current_user() else {
            return Ok(());
        };
        let me = user.id.clone();
        let author = author_of(user);
        let actor = actor_of(user);

        let Some(post) = self.posts.get(post_id) else {
            return Ok(());
        };
        let author_id = post.author.id.clone();

        self.posts.add_comment(post_id, CommentDraft { content, author })?;

        if author_id != me {
            self.notifications.add(NotificationDraft {
                kind: NotificationKind::Comment,
                message: "comentó en tu publicación".to_string(),
                from: actor,
                post_id: Some(post_id.clone()),
            });
        }
        Ok(())
    }

    /// Share a post through the platform capability. Failures are
    /// logged and swallowed; an unknown post id is a no-op.
    pub fn share_post(&self, post_id: &PostId, url: &str) {
        let Some(post) = self.posts.get(post_id) else {
            return;
        };
        let payload = SharePayload {
            title: format!("Publicación de {}", post.author.name),
            text: post.content.clone(),
            url: url.to_string(),
        };
        dispatch_share(self.share_target.as_ref(), &payload);
    }

    /// The feed, most recent first
    pub fn feed(&self) -> &[Post] {
        self.posts.posts()
    }

    pub fn search(&self, query: &str) -> Vec<Post> {
        self.posts.search(query)
    }

    pub fn hashtag_counts(&self) -> HashMap<String, usize> {
        self.posts.hashtag_counts()
    }

    /// Posts the given user saved, in feed order
    pub fn saved_posts(&self, user_id: &UserId) -> Vec<Post> {
        self.posts.saved_posts(user_id)
    }

    /// Posts the current user saved; empty when no session is active
    pub fn my_saved_posts(&self) -> Vec<Post> {
        match self.auth.current_user() {
            Some(user) => self.posts.saved_posts(&user.id),
            None => Vec::new(),
        }
    }

    // ── Notifications ───────────────────────────────────────────────

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.notifications()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.unread_count()
    }

    pub fn mark_notification_read(&mut self, id: &NotificationId) {
        self.notifications.mark_read(id);
    }

    pub fn mark_all_notifications_read(&mut self) {
        self.notifications.mark_all_read();
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    // ── Comment threads ─────────────────────────────────────────────

    /// Add a standalone thread comment as the current user. No-op
    /// without a session.
    pub fn add_thread_comment(&mut self, post_id: &PostId, content: String) -> Option<CommentId> {
        let actor = actor_of(self.auth.current_user()?);
        Some(self.comments.add_comment(post_id, content, actor))
    }

    /// Reply to a top-level thread comment as the current user
    pub fn add_thread_reply(&mut self, comment_id: &CommentId, content: String) {
        let Some(user) = self.auth.current_user() else {
            return;
        };
        let actor = actor_of(user);
        self.comments.add_reply(comment_id, content, actor);
    }

    pub fn toggle_thread_like(&mut self, comment_id: &CommentId) {
        self.comments.toggle_like(comment_id);
    }

    pub fn delete_thread_comment(&mut self, comment_id: &CommentId) {
        self.comments.delete_comment(comment_id);
    }

    pub fn thread_comments(&self, post_id: &PostId) -> &[ThreadComment] {
        self.comments.comments_for(post_id)
    }
}
