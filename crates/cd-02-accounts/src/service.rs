//! Account service - implements [`AccountApi`] over a [`UserStore`].

use crate::domain::credentials::{hash_password, verify_password};
use crate::domain::{check_registration, AccountError, NewUser, Registration, Session, User};
use crate::ports::{AccountApi, SystemTimeSource, TimeSource, UserStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{AccessClaims, TokenSigner, UserId};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default lifetime of an issued access token.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Registers users, checks credentials and issues access tokens.
pub struct AccountService {
    store: Arc<dyn UserStore>,
    signer: TokenSigner,
    token_ttl: Duration,
    clock: Arc<dyn TimeSource>,
}

impl AccountService {
    pub fn new(store: Arc<dyn UserStore>, signer: TokenSigner) -> Self {
        Self {
            store,
            signer,
            token_ttl: DEFAULT_TOKEN_TTL,
            clock: Arc::new(SystemTimeSource),
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    fn issue(&self, user: User) -> Session {
        let now = self.clock.now();
        let expires_unix = unix_secs(now).saturating_add(self.token_ttl.as_secs());
        let access_token = self.signer.sign(AccessClaims {
            user_id: user.id,
            expires_at: expires_unix,
        });
        let expires_at = i64::try_from(expires_unix)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Session {
            access_token,
            expires_at,
            user,
        }
    }
}

fn unix_secs(at: DateTime<Utc>) -> u64 {
    u64::try_from(at.timestamp()).unwrap_or(0)
}

#[async_trait]
impl AccountApi for AccountService {
    async fn register(&self, registration: Registration) -> Result<User, AccountError> {
        let checked = check_registration(registration).inspect_err(|e| {
            debug!("Registration rejected: {e}");
        })?;

        let new_user = NewUser {
            password_hash: hash_password(&checked.password),
            first_name: checked.first_name,
            last_name: checked.last_name,
            email: checked.email,
            username: checked.username,
            created_at: self.clock.now(),
        };

        let user = self.store.insert(new_user).await.map_err(AccountError::from)?;
        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    async fn login(&self, username: &str, password: &str) -> Result<Session, AccountError> {
        let Some(user) = self.store.find_by_username(username).await? else {
            debug!(username, "Login for unknown user");
            return Err(AccountError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login with wrong password");
            return Err(AccountError::InvalidCredentials);
        }
        if !user.is_active {
            warn!(user_id = %user.id, "Login for inactive user");
            return Err(AccountError::InvalidCredentials);
        }

        debug!(user_id = %user.id, "User logged in");
        Ok(self.issue(user))
    }

    async fn authenticate(&self, token: &str) -> Result<User, AccountError> {
        let claims = self.signer.verify(token, unix_secs(self.clock.now()))?;
        match self.store.find(claims.user_id).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(AccountError::InvalidCredentials),
        }
    }

    async fn exists(&self, id: UserId) -> Result<bool, AccountError> {
        Ok(self.store.find(id).await?.is_some())
    }
}
