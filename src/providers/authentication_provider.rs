use std::sync::Arc;

use sea_orm::ConnectionTrait;

use crate::errors::InternalError;
use crate::errors::internal::LoginError;
use crate::providers::CryptoProvider;
use crate::stores::UserStore;
use crate::types::db::user;

/// Verifies login credentials against the stored password hash
pub struct AuthenticationProvider {
    store: Arc<UserStore>,
    crypto_provider: Arc<CryptoProvider>,
}

impl AuthenticationProvider {
    pub fn new(store: Arc<UserStore>, crypto_provider: Arc<CryptoProvider>) -> Self {
        Self {
            store,
            crypto_provider,
        }
    }

    pub async fn verify_credentials(
        &self,
        conn: &impl ConnectionTrait,
        email: &str,
        password: &str,
    ) -> Result<user::Model, InternalError> {
        let user = self
            .store
            .find_by_email(conn, email)
            .await?
            .ok_or_else(|| LoginError::UnknownEmail { email: email.to_string() })?;

        if self.crypto_provider.verify_password(&user.password_hash, password)? {
            Ok(user)
        } else {
            Err(LoginError::IncorrectPassword.into())
        }
    }
}
