use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, param::Query, payload::Json};

use crate::coordinators::UserCoordinator;
use crate::errors::ApiError;
use crate::types::dto::clubs::ClubSummary;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::users::{
    FavoriteRequest, LoginRequest, LogoutRequest, SessionResponse, SignupRequest, UserProfile,
};

/// User profile, favorites and session endpoints
pub struct UserApi {
    user_coordinator: Arc<UserCoordinator>,
}

impl UserApi {
    pub fn new(user_coordinator: Arc<UserCoordinator>) -> Self {
        Self { user_coordinator }
    }
}

#[derive(Tags)]
enum UserTags {
    /// Profiles and favorites
    Users,
    /// Login, signup and logout
    Sessions,
}

#[OpenApi(prefix_path = "/api")]
impl UserApi {
    #[oai(path = "/user", method = "get", tag = "UserTags::Users")]
    async fn get_user(
        &self,
        username: Query<Option<String>>,
    ) -> Result<Json<UserProfile>, ApiError> {
        Ok(Json(self.user_coordinator.get_user(username.0).await?))
    }

    /// Add a club to the caller's favorites
    #[oai(path = "/user/favoriting", method = "post", tag = "UserTags::Users")]
    async fn favorite_club(
        &self,
        body: Json<FavoriteRequest>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        self.user_coordinator.favorite_club(body.0).await?;
        Ok(Json(MessageResponse::new("Club favorited successfully")))
    }

    /// Clubs favorited by the user given by username or email
    #[oai(path = "/user/favorite_clubs", method = "get", tag = "UserTags::Users")]
    async fn favorite_clubs(
        &self,
        username: Query<Option<String>>,
        email: Query<Option<String>>,
    ) -> Result<Json<Vec<ClubSummary>>, ApiError> {
        Ok(Json(self.user_coordinator.user_favorites(username.0, email.0).await?))
    }

    /// Login with email and password to receive a session token
    #[oai(path = "/user/login", method = "post", tag = "UserTags::Sessions")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<SessionResponse>, ApiError> {
        Ok(Json(self.user_coordinator.login(body.0).await?))
    }

    /// Create an account; the response carries a session token like login
    #[oai(path = "/user/signup", method = "post", tag = "UserTags::Sessions")]
    async fn signup(&self, body: Json<SignupRequest>) -> Result<Json<SessionResponse>, ApiError> {
        Ok(Json(self.user_coordinator.signup(body.0).await?))
    }

    #[oai(path = "/user/logout", method = "post", tag = "UserTags::Sessions")]
    async fn logout(&self, body: Json<LogoutRequest>) -> Result<Json<MessageResponse>, ApiError> {
        self.user_coordinator.logout(body.0).await?;
        Ok(Json(MessageResponse::new("Logged out successfully")))
    }
}
