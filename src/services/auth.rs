//! Mock account service with one-hour sessions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AuthError, PawResult};
use crate::models::{AuthState, LoginCredentials, User};
use crate::storage::keys;
use crate::traits::{KeyValueStore, StoreExt};

pub const DEMO_EMAIL: &str = "demo@pawmatch.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const MIN_PASSWORD_LEN: usize = 6;

/// How long a session stays valid after sign-in.
pub fn session_ttl() -> Duration {
    Duration::hours(1)
}

/// A registered account as persisted under `users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredUser {
    user: User,
    password_sha256: String,
}

fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn demo_user(now: DateTime<Utc>) -> StoredUser {
    StoredUser {
        user: User {
            id: "1".to_string(),
            email: DEMO_EMAIL.to_string(),
            name: "Demo User".to_string(),
            created_at: now,
        },
        password_sha256: hash_password(DEMO_PASSWORD),
    }
}

pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    users: Vec<StoredUser>,
    state: AuthState,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("users", &self.users.len())
            .field("is_authenticated", &self.state.is_authenticated)
            .finish()
    }
}

impl AuthService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> PawResult<Self> {
        Self::new_at(store, Utc::now())
    }

    /// Load accounts and restore the stored session as of `now`.
    ///
    /// An expired session is removed from the store.
    pub fn new_at(store: Arc<dyn KeyValueStore>, now: DateTime<Utc>) -> PawResult<Self> {
        let mut users: Vec<StoredUser> = store.get_item(keys::USERS)?.unwrap_or_default();
        if !users.iter().any(|u| u.user.email == DEMO_EMAIL) {
            users.insert(0, demo_user(now));
        }

        let mut service = Self {
            store,
            users,
            state: AuthState::default(),
        };

        if let Some(stored) = service.store.get_item::<AuthState>(keys::AUTH_STATE)? {
            if stored.is_authenticated {
                if stored.is_expired_at(now) {
                    tracing::info!("stored session expired, signing out");
                    service.store.remove(keys::AUTH_STATE)?;
                } else {
                    service.state = stored;
                }
            }
        }

        Ok(service)
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn sign_in(&mut self, credentials: &LoginCredentials) -> PawResult<User> {
        self.sign_in_at(credentials, Utc::now())
    }

    pub fn sign_in_at(
        &mut self,
        credentials: &LoginCredentials,
        now: DateTime<Utc>,
    ) -> PawResult<User> {
        let digest = hash_password(&credentials.password);
        let user = self
            .users
            .iter()
            .find(|u| u.user.email == credentials.email && u.password_sha256 == digest)
            .map(|u| u.user.clone())
            .ok_or(AuthError::InvalidCredentials)?;

        self.start_session(user.clone(), now)?;
        tracing::info!(user_id = %user.id, "signed in");
        Ok(user)
    }

    pub fn sign_up(&mut self, email: &str, password: &str, name: &str) -> PawResult<User> {
        self.sign_up_at(email, password, name, Utc::now())
    }

    /// Register a new account and sign it in.
    pub fn sign_up_at(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
        now: DateTime<Utc>,
    ) -> PawResult<User> {
        validate_sign_up(email, password, name)?;
        if self.users.iter().any(|u| u.user.email == email) {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.trim().to_string(),
            created_at: now,
        };
        let mut users = self.users.clone();
        users.push(StoredUser {
            user: user.clone(),
            password_sha256: hash_password(password),
        });
        self.store.set_item(keys::USERS, &users)?;
        self.users = users;

        self.start_session(user.clone(), now)?;
        tracing::info!(user_id = %user.id, "account created");
        Ok(user)
    }

    pub fn sign_out(&mut self) -> PawResult<()> {
        self.store.remove(keys::AUTH_STATE)?;
        self.state = AuthState::default();
        tracing::info!("signed out");
        Ok(())
    }

    pub fn check_auth(&mut self) -> PawResult<bool> {
        self.check_auth_at(Utc::now())
    }

    /// Whether a valid session exists at `now`. An expired one is signed out.
    pub fn check_auth_at(&mut self, now: DateTime<Utc>) -> PawResult<bool> {
        if !self.state.is_authenticated {
            return Ok(false);
        }
        if self.state.is_expired_at(now) {
            tracing::info!("session expired");
            // Expired in memory even if the stored copy cannot be removed.
            self.state = AuthState::default();
            self.store.remove(keys::AUTH_STATE)?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Like [`check_auth_at`](Self::check_auth_at) but an error when signed out.
    pub fn require_auth_at(&mut self, now: DateTime<Utc>) -> PawResult<&User> {
        let was_signed_in = self.state.is_authenticated;
        if !self.check_auth_at(now)? {
            let err = if was_signed_in {
                AuthError::SessionExpired
            } else {
                AuthError::NotAuthenticated
            };
            return Err(err.into());
        }
        self.current_user()
            .ok_or_else(|| AuthError::NotAuthenticated.into())
    }

    fn start_session(&mut self, user: User, now: DateTime<Utc>) -> PawResult<()> {
        let token = format!("mock-jwt-token-{}", Uuid::new_v4());
        let state = AuthState::signed_in(user, token, now + session_ttl());
        self.store.set_item(keys::AUTH_STATE, &state)?;
        self.state = state;
        Ok(())
    }
}

fn validate_sign_up(email: &str, password: &str, name: &str) -> Result<(), AuthError> {
    if name.trim().is_empty() {
        return Err(AuthError::InvalidInput {
            field: "name",
            message: "Name is required",
        });
    }
    if !email.contains('@') {
        return Err(AuthError::InvalidInput {
            field: "email",
            message: "Please enter a valid email",
        });
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::InvalidInput {
            field: "password",
            message: "Password must be at least 6 characters",
        });
    }
    Ok(())
}
