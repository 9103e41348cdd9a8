/*
    auth_store.rs - Users collection and active session

    Exposes register/login/logout and the three partial-update commands.
    The whole state (users + session) is serialized to the "auth" blob
    on every mutation and rehydrated at construction.

    Registration enforces email/username uniqueness; the update path
    does not re-check, so updates can create duplicates. That matches
    the source behavior and is documented rather than fixed.
*/

use crate::feed_store::model::{
    NewUser, PreferencesPatch, PrivacyPatch, ProfilePatch, User, UserId,
};
use crate::feed_store::store::errors::{StoreError, StoreResult};
use crate::feed_store::store::repository::{
    load_snapshot, save_snapshot, SnapshotRepository, AUTH_SNAPSHOT_KEY,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Persisted shape of the auth store
#[derive(Debug, Default, Serialize, Deserialize)]
struct AuthSnapshot {
    users: Vec<User>,
    session: Option<UserId>,
}

/// Registered users and the active session
pub struct AuthStore {
    users: Vec<User>,
    session: Option<UserId>,
    repo: Arc<dyn SnapshotRepository>,
}

impl AuthStore {
    /// Rehydrate from the repository, starting empty if nothing was
    /// ever persisted
    pub fn load(repo: Arc<dyn SnapshotRepository>) -> StoreResult<Self> {
        let snapshot: AuthSnapshot =
            load_snapshot(repo.as_ref(), AUTH_SNAPSHOT_KEY)?.unwrap_or_default();

        debug!(users = snapshot.users.len(), "auth store rehydrated");

        Ok(AuthStore {
            users: snapshot.users,
            session: snapshot.session,
            repo,
        })
    }

    fn persist(&self) -> StoreResult<()> {
        let snapshot = AuthSnapshot {
            users: self.users.clone(),
            session: self.session.clone(),
        };
        save_snapshot(self.repo.as_ref(), AUTH_SNAPSHOT_KEY, &snapshot)
    }

    /// Register a new user. The first registrant becomes the admin and
    /// the new user becomes the active session.
    pub fn register(&mut self, data: NewUser) -> StoreResult<User> {
        if let Some(existing) = self
            .users
            .iter()
            .find(|u| u.email == data.email || u.username == data.username)
        {
            let (field, value) = if existing.email == data.email {
                ("email", data.email.clone())
            } else {
                ("username", data.username.clone())
            };
            warn!(%value, field, "registration rejected: duplicate");
            return Err(StoreError::Duplicate { field, value });
        }

        let is_admin = self.users.is_empty();
        let user = User::from_registration(data, UserId::generate(), is_admin);

        self.users.push(user.clone());
        self.session = Some(user.id.clone());
        self.persist()?;

        metrics::counter!("quillfinch_users_registered_total").increment(1);
        info!(user_id = %user.id, username = %user.username, is_admin, "user registered");
        Ok(user)
    }

    /// Log in with an exact (email, password) pair. Never mutates the
    /// users collection.
    pub fn login(&mut self, email: &str, password: &str) -> StoreResult<User> {
        let user = self
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
            .ok_or(StoreError::InvalidCredentials)?;

        self.session = Some(user.id.clone());
        self.persist()?;

        info!(user_id = %user.id, "login");
        Ok(user)
    }

    /// Clear the active session
    pub fn logout(&mut self) -> StoreResult<()> {
        self.session = None;
        self.persist()?;
        debug!("logout");
        Ok(())
    }

    /// Merge profile fields into the session user. `Ok(None)` when no
    /// session is active.
    pub fn update_profile(&mut self, patch: &ProfilePatch) -> StoreResult<Option<User>> {
        self.update_session_user(|user| user.apply_profile(patch))
    }

    /// Merge privacy fields into the session user
    pub fn update_privacy(&mut self, patch: &PrivacyPatch) -> StoreResult<Option<User>> {
        self.update_session_user(|user| user.apply_privacy(patch))
    }

    /// Merge preference fields into the session user
    pub fn update_preferences(&mut self, patch: &PreferencesPatch) -> StoreResult<Option<User>> {
        self.update_session_user(|user| user.apply_preferences(patch))
    }

    fn update_session_user(
        &mut self,
        apply: impl FnOnce(&mut User),
    ) -> StoreResult<Option<User>> {
        let Some(session_id) = self.session.clone() else {
            return Ok(None);
        };

        let Some(user) = self.users.iter_mut().find(|u| u.id == session_id) else {
            // Session points at a user that no longer exists in the
            // collection; treat as no session.
            return Ok(None);
        };

        apply(user);
        let updated = user.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    /// The currently authenticated user, if any
    pub fn current_user(&self) -> Option<&User> {
        let session_id = self.session.as_ref()?;
        self.users.iter().find(|u| &u.id == session_id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}
