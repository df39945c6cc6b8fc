use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use reactfact_db::{KeyValueStore, keys, load_json, save_json};
use reactfact_types::User;
use reactfact_types::models::avatar_for;

use crate::error::{Result, StateError};

/// Holds the identity of whoever is using this device.
///
/// There is no password and no expiry: any non-blank username signs in.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    user: RwLock<Option<User>>,
}

impl SessionStore {
    /// Load whatever user the device remembers. Runs to completion before
    /// the store is handed out, so nobody observes a half-restored session.
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        let user: Option<User> = load_json(storage.as_ref(), keys::USER)?;
        if let Some(u) = &user {
            info!("Restored session for '{}'", u.username);
        }
        Ok(Self {
            storage,
            user: RwLock::new(user),
        })
    }

    pub fn current(&self) -> Result<Option<User>> {
        Ok(self.user.read()?.clone())
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.user.read()?.is_some())
    }

    pub fn require_user(&self) -> Result<User> {
        self.current()?.ok_or(StateError::NotSignedIn)
    }

    /// Run `f` against the signed-in user while holding the session read
    /// lock. Sign-in and sign-out wait until `f` returns.
    pub(crate) fn with_user<T>(&self, f: impl FnOnce(Option<&User>) -> Result<T>) -> Result<T> {
        let user = self.user.read()?;
        f(user.as_ref())
    }

    pub fn login(&self, username: &str, email: Option<&str>) -> Result<User> {
        self.login_at(username, email, Utc::now())
    }

    pub fn login_at(&self, username: &str, email: Option<&str>, now: DateTime<Utc>) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(StateError::EmptyUsername);
        }

        let user = User {
            id: now.timestamp_millis().to_string(),
            username: username.to_string(),
            email: email.map(str::trim).filter(|e| !e.is_empty()).map(str::to_string),
            is_anonymous: false,
            avatar: avatar_for(username),
        };
        self.replace(user)
    }

    pub fn login_anonymously(&self) -> Result<User> {
        let now = Utc::now();
        let username = format!("anonymous-{}", now.timestamp_millis());
        let user = User {
            id: now.timestamp_millis().to_string(),
            avatar: avatar_for(&username),
            username,
            email: None,
            is_anonymous: true,
        };
        self.replace(user)
    }

    pub fn logout(&self) -> Result<()> {
        let mut guard = self.user.write()?;
        self.storage.remove(keys::USER)?;
        if let Some(u) = guard.take() {
            info!("Signed out '{}'", u.username);
        }
        Ok(())
    }

    /// Rename and/or re-avatar the signed-in user. The id is kept.
    pub fn update_profile(&self, username: &str, avatar: Option<&str>) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(StateError::EmptyUsername);
        }

        let mut user = self.require_user()?;
        user.username = username.to_string();
        if let Some(avatar) = avatar.map(str::trim).filter(|a| !a.is_empty()) {
            user.avatar = avatar.to_string();
        }
        debug!("Profile updated for {}", user.id);
        self.replace(user)
    }

    fn replace(&self, user: User) -> Result<User> {
        let mut guard = self.user.write()?;
        save_json(self.storage.as_ref(), keys::USER, &user)?;
        info!("Signed in '{}' (anonymous: {})", user.username, user.is_anonymous);
        *guard = Some(user.clone());
        Ok(user)
    }
}
