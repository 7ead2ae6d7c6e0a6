use std::sync::Arc;

use chrono::Duration;
use sea_orm::ConnectionTrait;

use crate::errors::InternalError;
use crate::errors::internal::SessionError;
use crate::providers::{Clock, CryptoProvider};
use crate::stores::UserStore;
use crate::types::db::{SessionToken, user};
use crate::types::internal::Session;

/// Attempts at drawing a token whose digest is not already in use
const MAX_ISSUE_ATTEMPTS: usize = 5;

/// Issues, validates and invalidates session tokens
///
/// A session is the (token digest, expiry) pair on the user row. Expiry is
/// checked lazily on every validation; nothing sweeps stale sessions.
pub struct SessionProvider {
    user_store: Arc<UserStore>,
    crypto_provider: Arc<CryptoProvider>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl SessionProvider {
    pub fn new(
        user_store: Arc<UserStore>,
        crypto_provider: Arc<CryptoProvider>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self {
            user_store,
            crypto_provider,
            clock,
            ttl,
        }
    }

    /// Issue a fresh session for `user`, replacing any previous one
    ///
    /// The old token is overwritten rather than revoked separately.
    pub async fn issue_session(
        &self,
        conn: &impl ConnectionTrait,
        user: user::Model,
    ) -> Result<Session, InternalError> {
        let mut issued = None;
        for _ in 0..MAX_ISSUE_ATTEMPTS {
            let token = self.crypto_provider.generate_session_token();
            let token_hash = self.crypto_provider.hash_session_token(&token);
            if !self.user_store.session_hash_exists(conn, &token_hash).await? {
                issued = Some((token, token_hash));
                break;
            }
            tracing::warn!("Session token collision, drawing a new token");
        }

        let (token, token_hash) = issued.ok_or_else(|| {
            InternalError::crypto("issue_session", "could not draw an unused session token")
        })?;

        let expires_at = self.clock.now() + self.ttl;
        self.user_store
            .set_session(conn, user, Some((token_hash, expires_at.timestamp())))
            .await?;

        Ok(Session {
            token: SessionToken::from(token),
            expires_at,
        })
    }

    /// Resolve a presented token to its user
    ///
    /// Valid only if the token is known and `now < expires_at`; a request at
    /// exactly the expiry instant is rejected.
    pub async fn validate(
        &self,
        conn: &impl ConnectionTrait,
        token: Option<&str>,
    ) -> Result<user::Model, InternalError> {
        let token = token.ok_or(SessionError::MissingToken)?;
        let token_hash = self.crypto_provider.hash_session_token(token);

        let user = self
            .user_store
            .find_by_session_hash(conn, &token_hash)
            .await?
            .ok_or(SessionError::InvalidToken)?;

        let expires_at = user.session_expires_at.ok_or(SessionError::InvalidToken)?;
        if self.clock.now().timestamp() >= expires_at {
            return Err(SessionError::Expired.into());
        }

        Ok(user)
    }

    /// Clear the user's session. Idempotent.
    pub async fn invalidate(
        &self,
        conn: &impl ConnectionTrait,
        user: user::Model,
    ) -> Result<(), InternalError> {
        self.user_store.set_session(conn, user, None).await?;
        Ok(())
    }
}
