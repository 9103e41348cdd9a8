/*
    fixtures.rs - Demo seed data

    The notification and comment stores start with a couple of fixture
    entries, mirroring what the application ships for first-run demos.
*/

use crate::feed_store::model::{
    ActorRef, CommentId, Notification, NotificationId, NotificationKind, PostId, ThreadComment,
    Timestamp,
};
use std::collections::HashMap;

fn ana() -> ActorRef {
    ActorRef {
        name: "Ana Developer".to_string(),
        username: "ana_dev".to_string(),
        avatar: None,
    }
}

fn technews() -> ActorRef {
    ActorRef {
        name: "Tech News".to_string(),
        username: "technews".to_string(),
        avatar: None,
    }
}

/// Two unread demo notifications
pub fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: NotificationId::new("1".to_string()),
            kind: NotificationKind::Like,
            message: "le dio me gusta a tu publicación".to_string(),
            from: ana(),
            post_id: Some(PostId::new("1".to_string())),
            read: false,
            created_at: Timestamp::now(),
        },
        Notification {
            id: NotificationId::new("2".to_string()),
            kind: NotificationKind::Comment,
            message: "comentó en tu publicación".to_string(),
            from: technews(),
            post_id: Some(PostId::new("2".to_string())),
            read: false,
            created_at: Timestamp::now(),
        },
    ]
}

/// One demo thread with a single liked comment
pub fn seed_threads() -> HashMap<PostId, Vec<ThreadComment>> {
    let post_id = PostId::new("1".to_string());
    let mut threads = HashMap::new();
    threads.insert(
        post_id.clone(),
        vec![ThreadComment {
            id: CommentId::new("c1".to_string()),
            post_id,
            content: "¡Qué hermoso lugar!".to_string(),
            author: ana(),
            likes: 5,
            is_liked: false,
            created_at: Timestamp::now(),
            replies: Vec::new(),
        }],
    );
    threads
}
