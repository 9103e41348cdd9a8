/*
    user.rs - Registered user model

    A user record holds credentials, profile fields, preferences and
    privacy settings. Users are created at registration and never
    deleted; there is no account-deletion path.

    Note on credentials: passwords are stored and compared as plain
    text. This engine is a demo-grade local store and documents that
    choice as a non-goal rather than hiding it.
*/

use super::types::UserId;
use serde::{Deserialize, Serialize};

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
}

impl Default for Language {
    fn default() -> Self {
        Language::Es
    }
}

/// Profile visibility setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVisibility {
    Public,
    Private,
}

impl Default for ProfileVisibility {
    fn default() -> Self {
        ProfileVisibility::Public
    }
}

/// Per-user privacy settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Privacy {
    pub profile_visibility: ProfileVisibility,
    pub show_online: bool,
}

impl Default for Privacy {
    fn default() -> Self {
        Privacy {
            profile_visibility: ProfileVisibility::Public,
            show_online: true,
        }
    }
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,

    /// True only for the first registered user
    pub is_admin: bool,

    pub notifications: bool,
    pub dark_mode: bool,
    pub language: Language,
    pub privacy: Privacy,
}

/// Registration input: everything the caller provides. The id and
/// admin flag are assigned by the auth store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub privacy: Privacy,
}

fn default_true() -> bool {
    true
}

/// Partial profile update. `None` fields are left untouched.
///
/// No validation is performed: an update can make email or username
/// collide with another user's. Uniqueness is only checked at
/// registration.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<Option<String>>,
    pub bio: Option<Option<String>>,
}

/// Partial privacy update
#[derive(Debug, Clone, Default)]
pub struct PrivacyPatch {
    pub profile_visibility: Option<ProfileVisibility>,
    pub show_online: Option<bool>,
}

/// Partial preferences update
#[derive(Debug, Clone, Default)]
pub struct PreferencesPatch {
    pub notifications: Option<bool>,
    pub dark_mode: Option<bool>,
    pub language: Option<Language>,
}

impl User {
    /// Build a user from registration input
    pub fn from_registration(data: NewUser, id: UserId, is_admin: bool) -> Self {
        User {
            id,
            name: data.name,
            username: data.username,
            email: data.email,
            password: data.password,
            avatar: data.avatar,
            bio: data.bio,
            is_admin,
            notifications: data.notifications,
            dark_mode: data.dark_mode,
            language: data.language,
            privacy: data.privacy,
        }
    }

    /// Merge a profile patch into this record
    pub fn apply_profile(&mut self, patch: &ProfilePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(username) = &patch.username {
            self.username = username.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(password) = &patch.password {
            self.password = password.clone();
        }
        if let Some(avatar) = &patch.avatar {
            self.avatar = avatar.clone();
        }
        if let Some(bio) = &patch.bio {
            self.bio = bio.clone();
        }
    }

    /// Merge a privacy patch into this record
    pub fn apply_privacy(&mut self, patch: &PrivacyPatch) {
        if let Some(visibility) = patch.profile_visibility {
            self.privacy.profile_visibility = visibility;
        }
        if let Some(show_online) = patch.show_online {
            self.privacy.show_online = show_online;
        }
    }

    /// Merge a preferences patch into this record
    pub fn apply_preferences(&mut self, patch: &PreferencesPatch) {
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
        if let Some(dark_mode) = patch.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
    }
}
