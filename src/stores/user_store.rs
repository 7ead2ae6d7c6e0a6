use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::errors::InternalError;
use crate::errors::internal::UserError;
use crate::errors::internal::database::is_unique_violation;
use crate::providers::CryptoProvider;
use crate::types::db::user;

/// UserStore manages user rows, including the session columns
pub struct UserStore {
    crypto_provider: Arc<CryptoProvider>,
}

impl UserStore {
    pub fn new(crypto_provider: Arc<CryptoProvider>) -> Self {
        Self { crypto_provider }
    }

    /// Create a user, deriving the password hash from `password`
    ///
    /// Fails with `UserError::Duplicate` if the email or username is taken.
    pub async fn create_user(
        &self,
        conn: &impl ConnectionTrait,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<user::Model, InternalError> {
        let duplicate = || UserError::Duplicate {
            email: email.to_string(),
            username: username.to_string(),
        };

        let existing = user::Entity::find()
            .filter(
                Condition::any()
                    .add(user::Column::Email.eq(email))
                    .add(user::Column::Username.eq(username)),
            )
            .one(conn)
            .await
            .map_err(|e| InternalError::database("check_user_exists", e))?;
        if existing.is_some() {
            return Err(duplicate().into());
        }

        let password_hash = self.crypto_provider.hash_password(password)?;

        let new_user = user::ActiveModel {
            email: Set(email.to_string()),
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            session_token_hash: Set(None),
            session_expires_at: Set(None),
            created_at: Set(Utc::now().timestamp()),
        };

        new_user.insert(conn).await.map_err(|e| {
            if is_unique_violation(&e) {
                duplicate().into()
            } else {
                InternalError::database("insert_user", e)
            }
        })
    }

    pub async fn find_by_email(
        &self,
        conn: &impl ConnectionTrait,
        email: &str,
    ) -> Result<Option<user::Model>, InternalError> {
        user::Entity::find_by_id(email.to_string())
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_user_by_email", e))
    }

    pub async fn find_by_username(
        &self,
        conn: &impl ConnectionTrait,
        username: &str,
    ) -> Result<Option<user::Model>, InternalError> {
        user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_user_by_username", e))
    }

    /// Find a user by email OR username; `None` when neither is supplied
    pub async fn find_by_email_or_username(
        &self,
        conn: &impl ConnectionTrait,
        email: Option<&str>,
        username: Option<&str>,
    ) -> Result<Option<user::Model>, InternalError> {
        if email.is_none() && username.is_none() {
            return Ok(None);
        }

        let mut condition = Condition::any();
        if let Some(email) = email {
            condition = condition.add(user::Column::Email.eq(email));
        }
        if let Some(username) = username {
            condition = condition.add(user::Column::Username.eq(username));
        }

        user::Entity::find()
            .filter(condition)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_user", e))
    }

    pub async fn find_by_session_hash(
        &self,
        conn: &impl ConnectionTrait,
        token_hash: &str,
    ) -> Result<Option<user::Model>, InternalError> {
        user::Entity::find()
            .filter(user::Column::SessionTokenHash.eq(token_hash))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_user_by_session", e))
    }

    pub async fn session_hash_exists(
        &self,
        conn: &impl ConnectionTrait,
        token_hash: &str,
    ) -> Result<bool, InternalError> {
        let count = user::Entity::find()
            .filter(user::Column::SessionTokenHash.eq(token_hash))
            .count(conn)
            .await
            .map_err(|e| InternalError::database("session_hash_exists", e))?;
        Ok(count > 0)
    }

    /// Write both session columns together
    ///
    /// `Some((hash, expires_at))` installs a session, `None` clears it. The
    /// pair is never written half-set.
    pub async fn set_session(
        &self,
        conn: &impl ConnectionTrait,
        user: user::Model,
        session: Option<(String, i64)>,
    ) -> Result<user::Model, InternalError> {
        let (token_hash, expires_at) = match session {
            Some((hash, expires_at)) => (Some(hash), Some(expires_at)),
            None => (None, None),
        };

        let mut model: user::ActiveModel = user.into();
        model.session_token_hash = Set(token_hash);
        model.session_expires_at = Set(expires_at);

        model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("set_session", e))
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("crypto_provider", &"<crypto_provider>")
            .finish()
    }
}
