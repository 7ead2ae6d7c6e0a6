use std::sync::Arc;

use crate::app_data::AppData;
use crate::config::DatabaseHandle;
use crate::errors::InternalError;
use crate::errors::internal::{ClubError, RequestError, UserError};
use crate::providers::{AuthenticationProvider, SessionProvider};
use crate::stores::{ClubStore, FavoriteStore, TagStore, UserStore};
use crate::types::dto::clubs::ClubSummary;
use crate::types::dto::users::{
    FavoriteRequest, LoginRequest, LogoutRequest, SessionResponse, SignupRequest, UserProfile,
};
use crate::types::internal::Session;

/// User coordinator that orchestrates profile lookups, favorites and the
/// login/signup/logout session workflows
pub struct UserCoordinator {
    database: DatabaseHandle,
    user_store: Arc<UserStore>,
    club_store: Arc<ClubStore>,
    tag_store: Arc<TagStore>,
    favorite_store: Arc<FavoriteStore>,
    session_provider: Arc<SessionProvider>,
    authentication_provider: Arc<AuthenticationProvider>,
}

impl UserCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            database: app_data.database.clone(),
            user_store: app_data.user_store.clone(),
            club_store: app_data.club_store.clone(),
            tag_store: app_data.tag_store.clone(),
            favorite_store: app_data.favorite_store.clone(),
            session_provider: app_data.session_provider.clone(),
            authentication_provider: app_data.authentication_provider.clone(),
        }
    }

    pub async fn get_user(&self, username: Option<String>) -> Result<UserProfile, InternalError> {
        let username = username.ok_or(UserError::NotFound)?;
        let txn = self.database.begin().await?;

        let user = self
            .user_store
            .find_by_username(&txn, &username)
            .await?
            .ok_or(UserError::NotFound)?;

        DatabaseHandle::commit(txn).await?;
        Ok(UserProfile {
            email: user.email,
            username: user.username,
        })
    }

    /// Add the club to the session owner's favorites. Repeating it is a no-op.
    pub async fn favorite_club(&self, request: FavoriteRequest) -> Result<(), InternalError> {
        let txn = self.database.begin().await?;

        let user = self
            .session_provider
            .validate(&txn, request.session_token.as_deref())
            .await?;
        let code = RequestError::require(request.code, "code")?;
        let club = self
            .club_store
            .find_by_code(&txn, &code)
            .await?
            .ok_or(ClubError::UnknownCode { code })?;

        let added = self
            .favorite_store
            .add_favorite(&txn, &user.email, &club.code)
            .await?;

        DatabaseHandle::commit(txn).await?;
        if added {
            tracing::info!(club = %club.code, user = %user.username, "Club favorited");
        }
        Ok(())
    }

    /// Favorites of the user found by username or email, ordered by code
    pub async fn user_favorites(
        &self,
        username: Option<String>,
        email: Option<String>,
    ) -> Result<Vec<ClubSummary>, InternalError> {
        if username.is_none() && email.is_none() {
            return Err(RequestError::MissingOneOf { fields: "username, email" }.into());
        }

        let txn = self.database.begin().await?;

        let user = self
            .user_store
            .find_by_email_or_username(&txn, email.as_deref(), username.as_deref())
            .await?
            .ok_or(UserError::NotFound)?;

        let clubs = self.favorite_store.list_favorited_by(&txn, &user).await?;
        let mut summaries = Vec::with_capacity(clubs.len());
        for club in clubs {
            let tags = self.tag_store.tags_for_club(&txn, &club).await?;
            summaries.push(ClubSummary {
                code: club.code,
                name: club.name,
                description: club.description,
                tags,
            });
        }

        DatabaseHandle::commit(txn).await?;
        Ok(summaries)
    }

    /// Verify credentials and issue a fresh session, replacing any previous one
    pub async fn login(&self, request: LoginRequest) -> Result<SessionResponse, InternalError> {
        let email = RequestError::require(request.email, "email")?;
        let password = RequestError::require(request.password, "password")?;

        let txn = self.database.begin().await?;

        let user = self
            .authentication_provider
            .verify_credentials(&txn, &email, &password)
            .await?;
        let username = user.username.clone();
        let session = self.session_provider.issue_session(&txn, user).await?;

        DatabaseHandle::commit(txn).await?;
        tracing::info!(user = %username, "User logged in");
        Ok(session_response(session))
    }

    /// Register a user and log them in
    pub async fn signup(&self, request: SignupRequest) -> Result<SessionResponse, InternalError> {
        let email = RequestError::require(request.email, "email")?;
        let username = RequestError::require(request.username, "username")?;
        let password = RequestError::require(request.password, "password")?;

        let txn = self.database.begin().await?;

        let user = self
            .user_store
            .create_user(&txn, &email, &username, &password)
            .await?;
        let session = self.session_provider.issue_session(&txn, user).await?;

        DatabaseHandle::commit(txn).await?;
        tracing::info!(user = %username, "User signed up");
        Ok(session_response(session))
    }

    pub async fn logout(&self, request: LogoutRequest) -> Result<(), InternalError> {
        let txn = self.database.begin().await?;

        let user = self
            .session_provider
            .validate(&txn, request.session_token.as_deref())
            .await?;
        let username = user.username.clone();
        self.session_provider.invalidate(&txn, user).await?;

        DatabaseHandle::commit(txn).await?;
        tracing::info!(user = %username, "User logged out");
        Ok(())
    }
}

fn session_response(session: Session) -> SessionResponse {
    SessionResponse {
        session_token: session.token.into_inner(),
        expires_at: session.expires_at.timestamp(),
    }
}
