/*
    Cross-store scenarios

    End-to-end sequences through FeedApp: moderation, notification
    dispatch, the share capability, and the author-snapshot invariant.
*/

use crate::feed_store::app::FeedApp;
use crate::feed_store::model::{NotificationKind, PostKind, ProfilePatch};
use crate::feed_store::share::{NoopShare, SharePayload, ShareTarget};
use crate::feed_store::store::MemoryRepository;
use crate::test_utils::TestUserBuilder;
use std::sync::{Arc, Mutex};

fn app() -> FeedApp {
    FeedApp::new(Arc::new(MemoryRepository::new()), Box::new(NoopShare)).unwrap()
}

/// Share target that records every payload it receives
struct RecordingShare {
    payloads: Arc<Mutex<Vec<SharePayload>>>,
}

impl ShareTarget for RecordingShare {
    fn share(&self, payload: &SharePayload) -> anyhow::Result<()> {
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

struct FailingShare;

impl ShareTarget for FailingShare {
    fn share(&self, _payload: &SharePayload) -> anyhow::Result<()> {
        anyhow::bail!("platform refused")
    }
}

#[test]
fn admin_can_moderate_other_authors() {
    let mut app = app();
    app.register(TestUserBuilder::new("ana").build()).unwrap();
    app.register(TestUserBuilder::new("bruno").build()).unwrap();

    // bruno is active after registering and posts
    let post = app
        .create_post(PostKind::Text, "spam".to_string(), None, None)
        .unwrap()
        .unwrap();

    // ana was the first registrant and is the admin
    app.login("ana@example.com", "secret").unwrap();
    assert!(app.delete_post(&post.id).unwrap());
    assert!(app.feed().is_empty());
}

#[test]
fn non_admin_cannot_delete_other_authors() {
    let mut app = app();
    app.register(TestUserBuilder::new("ana").build()).unwrap();
    let post = app
        .create_post(PostKind::Text, "mine".to_string(), None, None)
        .unwrap()
        .unwrap();

    app.register(TestUserBuilder::new("bruno").build()).unwrap();
    assert!(!app.delete_post(&post.id).unwrap());
    assert_eq!(app.feed().len(), 1);
}

#[test]
fn liking_anothers_post_emits_a_notification() {
    let mut app = app();
    app.register(TestUserBuilder::new("ana").with_name("Ana Developer").build())
        .unwrap();
    let post = app
        .create_post(PostKind::Text, "hola".to_string(), None, None)
        .unwrap()
        .unwrap();

    app.register(TestUserBuilder::new("bruno").with_name("Bruno").build())
        .unwrap();
    app.toggle_like(&post.id).unwrap();

    let notifications = app.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Like);
    assert_eq!(notifications[0].message, "le dio me gusta a tu publicación");
    assert_eq!(notifications[0].from.name, "Bruno");
    assert_eq!(notifications[0].post_id.as_ref(), Some(&post.id));
    assert!(!notifications[0].read);
}

#[test]
fn unliking_emits_nothing() {
    let mut app = app();
    app.register(TestUserBuilder::new("ana").build()).unwrap();
    let post = app
        .create_post(PostKind::Text, "hola".to_string(), None, None)
        .unwrap()
        .unwrap();

    app.register(TestUserBuilder::new("bruno").build()).unwrap();
    app.toggle_like(&post.id).unwrap();
    app.toggle_like(&post.id).unwrap();

    // Only the first toggle (the like) produced a notification
    assert_eq!(app.notifications().len(), 1);
}

#[test]
fn self_actions_emit_nothing() {
    let mut app = app();
    app.register(TestUserBuilder::new("ana").build()).unwrap();
    let post = app
        .create_post(PostKind::Text, "hola".to_string(), None, None)
        .unwrap()
        .unwrap();

    app.toggle_like(&post.id).unwrap();
    app.comment_on(&post.id, "my own post".to_string()).unwrap();

    assert!(app.notifications().is_empty());
}

#[test]
fn commenting_on_anothers_post_emits_a_notification() {
    let mut app = app();
    app.register(TestUserBuilder::new("ana").build()).unwrap();
    let post = app
        .create_post(PostKind::Text, "hola".to_string(), None, None)
        .unwrap()
        .unwrap();

    app.register(TestUserBuilder::new("bruno").build()).unwrap();
    app.comment_on(&post.id, "nice".to_string()).unwrap();

    let notifications = app.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Comment);
    assert_eq!(notifications[0].message, "comentó en tu publicación");
}

#[test]
fn notification_read_lifecycle() {
    let mut app = app();
    app.register(TestUserBuilder::new("ana").build()).unwrap();
    let post = app
        .create_post(PostKind::Text, "hola".to_string(), None, None)
        .unwrap()
        .unwrap();

    app.register(TestUserBuilder::new("bruno").build()).unwrap();
    app.toggle_like(&post.id).unwrap();
    app.comment_on(&post.id, "nice".to_string()).unwrap();
    assert_eq!(app.unread_count(), 2);

    let first = app.notifications()[0].id.clone();
    app.mark_notification_read(&first);
    assert_eq!(app.unread_count(), 1);

    // Marking the same one again changes nothing
    app.mark_notification_read(&first);
    assert_eq!(app.unread_count(), 1);

    app.mark_all_notifications_read();
    assert_eq!(app.unread_count(), 0);
    assert_eq!(app.notifications().len(), 2);

    app.clear_notifications();
    assert!(app.notifications().is_empty());
}

#[test]
fn share_builds_payload_from_post_and_url() {
    let payloads = Arc::new(Mutex::new(Vec::new()));
    let target = RecordingShare {
        payloads: payloads.clone(),
    };
    let mut app =
        FeedApp::new(Arc::new(MemoryRepository::new()), Box::new(target)).unwrap();

    app.register(TestUserBuilder::new("ana").with_name("Ana Developer").build())
        .unwrap();
    let post = app
        .create_post(PostKind::Text, "mira esto".to_string(), None, None)
        .unwrap()
        .unwrap();

    app.share_post(&post.id, "https://quillfinch.example/p/1");

    let shared = payloads.lock().unwrap();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].title, "Publicación de Ana Developer");
    assert_eq!(shared[0].text, "mira esto");
    assert_eq!(shared[0].url, "https://quillfinch.example/p/1");
}

#[test]
fn share_failure_and_unknown_post_are_silent() {
    let mut app =
        FeedApp::new(Arc::new(MemoryRepository::new()), Box::new(FailingShare)).unwrap();

    app.register(TestUserBuilder::new("ana").build()).unwrap();
    let post = app
        .create_post(PostKind::Text, "hola".to_string(), None, None)
        .unwrap()
        .unwrap();

    // Neither call panics or returns an error surface
    app.share_post(&post.id, "https://quillfinch.example/p/1");
    app.share_post(&crate::feed_store::model::PostId::new("missing".to_string()), "url");
}

#[test]
fn author_snapshot_is_frozen_at_creation() {
    let mut app = app();
    app.register(TestUserBuilder::new("ana").with_name("Ana").build())
        .unwrap();
    let post = app
        .create_post(PostKind::Text, "hola".to_string(), None, None)
        .unwrap()
        .unwrap();
    app.comment_on(&post.id, "and a comment".to_string()).unwrap();

    app.update_profile(&ProfilePatch {
        name: Some("Ana Renamed".to_string()),
        ..ProfilePatch::default()
    })
    .unwrap();

    assert_eq!(app.current_user().unwrap().name, "Ana Renamed");
    assert_eq!(app.feed()[0].author.name, "Ana");
    assert_eq!(app.feed()[0].comments[0].author.name, "Ana");
}

#[test]
fn thread_comment_flow() {
    let mut app = app();
    app.register(TestUserBuilder::new("ana").build()).unwrap();
    let post = app
        .create_post(PostKind::Text, "hola".to_string(), None, None)
        .unwrap()
        .unwrap();

    let c1 = app.add_thread_comment(&post.id, "first".to_string()).unwrap();
    app.add_thread_comment(&post.id, "second".to_string()).unwrap();

    // Most recent first
    let thread = app.thread_comments(&post.id);
    assert_eq!(thread[0].content, "second");
    assert_eq!(thread[1].content, "first");

    app.add_thread_reply(&c1, "welcome".to_string());
    app.toggle_thread_like(&c1);

    let thread = app.thread_comments(&post.id);
    assert_eq!(thread[1].replies.len(), 1);
    assert_eq!(thread[1].likes, 1);
    assert!(thread[1].is_liked);

    app.delete_thread_comment(&c1);
    assert_eq!(app.thread_comments(&post.id).len(), 1);
}
