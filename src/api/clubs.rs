use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, param::Query, payload::Json};

use crate::coordinators::ClubCoordinator;
use crate::errors::ApiError;
use crate::types::dto::clubs::{
    ClubDetail, ClubListItem, CreateClubRequest, DeleteClubRequest, ModifyClubRequest,
};
use crate::types::dto::common::MessageResponse;
use crate::types::dto::users::UserProfile;

/// Club catalogue endpoints
pub struct ClubsApi {
    club_coordinator: Arc<ClubCoordinator>,
}

impl ClubsApi {
    pub fn new(club_coordinator: Arc<ClubCoordinator>) -> Self {
        Self { club_coordinator }
    }
}

#[derive(Tags)]
enum ClubTags {
    /// Club queries and session-gated club mutations
    Clubs,
}

#[OpenApi(prefix_path = "/api")]
impl ClubsApi {
    /// List every club with its favorite count
    #[oai(path = "/clubs", method = "get", tag = "ClubTags::Clubs")]
    async fn list_clubs(&self) -> Result<Json<Vec<ClubListItem>>, ApiError> {
        Ok(Json(self.club_coordinator.list_clubs().await?))
    }

    /// Case-insensitive substring search on club names
    #[oai(path = "/clubs/search", method = "get", tag = "ClubTags::Clubs")]
    async fn search_clubs(
        &self,
        string: Query<Option<String>>,
    ) -> Result<Json<Vec<ClubDetail>>, ApiError> {
        Ok(Json(self.club_coordinator.search_clubs(string.0).await?))
    }

    /// Users who favorited the club given by code or name
    #[oai(path = "/clubs/favorite_users", method = "get", tag = "ClubTags::Clubs")]
    async fn favorite_users(
        &self,
        code: Query<Option<String>>,
        name: Query<Option<String>>,
    ) -> Result<Json<Vec<UserProfile>>, ApiError> {
        Ok(Json(self.club_coordinator.club_favoriters(code.0, name.0).await?))
    }

    #[oai(path = "/clubs/create", method = "post", tag = "ClubTags::Clubs")]
    async fn create_club(
        &self,
        body: Json<CreateClubRequest>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        self.club_coordinator.create_club(body.0).await?;
        Ok(Json(MessageResponse::new("Club created successfully")))
    }

    /// Patch the club identified by its code and current name
    #[oai(path = "/clubs/modify", method = "post", tag = "ClubTags::Clubs")]
    async fn modify_club(
        &self,
        body: Json<ModifyClubRequest>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        self.club_coordinator.modify_club(body.0).await?;
        Ok(Json(MessageResponse::new("Club modified successfully")))
    }

    #[oai(path = "/clubs/delete", method = "post", tag = "ClubTags::Clubs")]
    async fn delete_club(
        &self,
        body: Json<DeleteClubRequest>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        self.club_coordinator.delete_club(body.0).await?;
        Ok(Json(MessageResponse::new("Club deleted successfully")))
    }
}
