use std::sync::Arc;

use sea_orm::ConnectionTrait;

use crate::app_data::AppData;
use crate::config::DatabaseHandle;
use crate::errors::InternalError;
use crate::errors::internal::{ClubError, RequestError};
use crate::providers::SessionProvider;
use crate::stores::{ClubStore, FavoriteStore, TagStore};
use crate::types::db::club;
use crate::types::dto::clubs::{
    ClubDetail, ClubListItem, CreateClubRequest, DeleteClubRequest, ModifyClubRequest,
};
use crate::types::dto::users::UserProfile;
use crate::types::internal::{ClubPatch, NewClub};

/// Orchestrates club queries and the session-gated club mutations
///
/// Every operation runs in one transaction. Mutations check the session token
/// before looking at any other field, so a request with a bad token and a
/// missing field reports `Unauthorized`.
pub struct ClubCoordinator {
    database: DatabaseHandle,
    club_store: Arc<ClubStore>,
    tag_store: Arc<TagStore>,
    favorite_store: Arc<FavoriteStore>,
    session_provider: Arc<SessionProvider>,
}

impl ClubCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            database: app_data.database.clone(),
            club_store: app_data.club_store.clone(),
            tag_store: app_data.tag_store.clone(),
            favorite_store: app_data.favorite_store.clone(),
            session_provider: app_data.session_provider.clone(),
        }
    }

    /// Every club with its favorite count, ordered by code
    pub async fn list_clubs(&self) -> Result<Vec<ClubListItem>, InternalError> {
        let txn = self.database.begin().await?;

        let clubs = self.club_store.list_all(&txn).await?;
        let mut items = Vec::with_capacity(clubs.len());
        for club in clubs {
            let favorite_count = self.favorite_store.favorite_count(&txn, &club.code).await?;
            items.push(ClubListItem {
                code: club.code,
                name: club.name,
                favorite_count,
            });
        }

        DatabaseHandle::commit(txn).await?;
        Ok(items)
    }

    /// Clubs whose name contains `query`, ignoring case
    ///
    /// A missing query matches every club.
    pub async fn search_clubs(&self, query: Option<String>) -> Result<Vec<ClubDetail>, InternalError> {
        let txn = self.database.begin().await?;

        let clubs = self
            .club_store
            .search_by_name_substring(&txn, query.as_deref().unwrap_or_default())
            .await?;
        let mut details = Vec::with_capacity(clubs.len());
        for club in clubs {
            details.push(self.club_detail(&txn, club).await?);
        }

        DatabaseHandle::commit(txn).await?;
        Ok(details)
    }

    /// Users who favorited the club found by code or name
    pub async fn club_favoriters(
        &self,
        code: Option<String>,
        name: Option<String>,
    ) -> Result<Vec<UserProfile>, InternalError> {
        if code.is_none() && name.is_none() {
            return Err(RequestError::MissingOneOf { fields: "code, name" }.into());
        }

        let txn = self.database.begin().await?;

        let club = self
            .club_store
            .find_club(&txn, code.as_deref(), name.as_deref())
            .await?
            .ok_or(ClubError::NotFound)?;
        let users = self.favorite_store.list_favorites_of(&txn, &club).await?;

        DatabaseHandle::commit(txn).await?;
        Ok(users
            .into_iter()
            .map(|u| UserProfile {
                email: u.email,
                username: u.username,
            })
            .collect())
    }

    pub async fn create_club(&self, request: CreateClubRequest) -> Result<(), InternalError> {
        let txn = self.database.begin().await?;

        let user = self
            .session_provider
            .validate(&txn, request.session_token.as_deref())
            .await?;
        let new_club = NewClub::from_request(request)?;
        let created = self.club_store.create_club(&txn, new_club).await?;

        DatabaseHandle::commit(txn).await?;
        tracing::info!(club = %created.code, by = %user.username, "Club created");
        Ok(())
    }

    /// Patch the club identified by the (code, name) pair
    ///
    /// An empty patch succeeds without touching the club.
    pub async fn modify_club(&self, request: ModifyClubRequest) -> Result<(), InternalError> {
        let txn = self.database.begin().await?;

        let user = self
            .session_provider
            .validate(&txn, request.session_token.as_deref())
            .await?;
        let code = RequestError::require(request.code, "code")?;
        let name = RequestError::require(request.name, "name")?;
        let patch = ClubPatch::from(RequestError::require(request.new_data, "new_data")?);

        let empty = patch.is_empty();
        let updated = self.club_store.update_club(&txn, &code, &name, patch).await?;

        DatabaseHandle::commit(txn).await?;
        if empty {
            tracing::debug!(club = %updated.code, "Empty patch, club unchanged");
        } else {
            tracing::info!(club = %updated.code, by = %user.username, "Club modified");
        }
        Ok(())
    }

    pub async fn delete_club(&self, request: DeleteClubRequest) -> Result<(), InternalError> {
        let txn = self.database.begin().await?;

        let user = self
            .session_provider
            .validate(&txn, request.session_token.as_deref())
            .await?;
        let code = RequestError::require(request.code, "code")?;
        let name = RequestError::require(request.name, "name")?;

        self.club_store.delete_club(&txn, &code, &name).await?;

        DatabaseHandle::commit(txn).await?;
        tracing::info!(club = %code, by = %user.username, "Club deleted");
        Ok(())
    }

    async fn club_detail(
        &self,
        conn: &impl ConnectionTrait,
        club: club::Model,
    ) -> Result<ClubDetail, InternalError> {
        let tags = self.tag_store.tags_for_club(conn, &club).await?;
        let favorite_count = self.favorite_store.favorite_count(conn, &club.code).await?;
        Ok(ClubDetail {
            code: club.code,
            name: club.name,
            description: club.description,
            tags,
            favorite_count,
        })
    }
}
