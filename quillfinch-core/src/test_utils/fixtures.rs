//! Test fixtures for creating common test objects
//!
//! Provides builder patterns and factory functions for creating test data.

use crate::feed_store::model::{
    AuthorRef, Language, NewUser, PostDraft, PostKind, Privacy, UserId,
};

/// Builder for registration input
pub struct TestUserBuilder {
    name: String,
    username: String,
    email: String,
    password: String,
    avatar: Option<String>,
}

impl TestUserBuilder {
    pub fn new(username: &str) -> Self {
        Self {
            name: username.to_string(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: "secret".to_string(),
            avatar: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    pub fn with_avatar(mut self, avatar: &str) -> Self {
        self.avatar = Some(avatar.to_string());
        self
    }

    pub fn build(self) -> NewUser {
        NewUser {
            name: self.name,
            username: self.username,
            email: self.email,
            password: self.password,
            avatar: self.avatar,
            bio: None,
            notifications: true,
            dark_mode: false,
            language: Language::Es,
            privacy: Privacy::default(),
        }
    }
}

/// Builder for post drafts
pub struct TestPostBuilder {
    kind: PostKind,
    content: String,
    author: AuthorRef,
    media: Option<String>,
    url: Option<String>,
}

impl TestPostBuilder {
    pub fn new(content: &str) -> Self {
        Self {
            kind: PostKind::Text,
            content: content.to_string(),
            author: AuthorRef {
                id: UserId::generate(),
                name: "Ana Developer".to_string(),
                username: "ana_dev".to_string(),
                avatar: None,
            },
            media: None,
            url: None,
        }
    }

    pub fn with_kind(mut self, kind: PostKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_author(mut self, author: AuthorRef) -> Self {
        self.author = author;
        self
    }

    pub fn with_media(mut self, media: &str) -> Self {
        self.media = Some(media.to_string());
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn build(self) -> PostDraft {
        PostDraft {
            kind: self.kind,
            content: self.content,
            author: self.author,
            media: self.media,
            url: self.url,
        }
    }
}
