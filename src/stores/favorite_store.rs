use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
    ActiveValue::Set,
};

use crate::errors::InternalError;
use crate::types::db::{club, favorite, user};

/// FavoriteStore owns the user-club favorite association
#[derive(Debug, Default)]
pub struct FavoriteStore;

impl FavoriteStore {
    pub fn new() -> Self {
        Self
    }

    /// Record that `user_email` favorites `club_code`
    ///
    /// Idempotent: returns `false` when the link already existed.
    pub async fn add_favorite(
        &self,
        conn: &impl ConnectionTrait,
        user_email: &str,
        club_code: &str,
    ) -> Result<bool, InternalError> {
        let existing = favorite::Entity::find_by_id((club_code.to_string(), user_email.to_string()))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_favorite", e))?;
        if existing.is_some() {
            return Ok(false);
        }

        let link = favorite::ActiveModel {
            club_code: Set(club_code.to_string()),
            user_email: Set(user_email.to_string()),
        };
        favorite::Entity::insert(link)
            .exec_without_returning(conn)
            .await
            .map_err(|e| InternalError::database("insert_favorite", e))?;

        Ok(true)
    }

    /// Users who favorited the club, ordered by username
    pub async fn list_favorites_of(
        &self,
        conn: &impl ConnectionTrait,
        club: &club::Model,
    ) -> Result<Vec<user::Model>, InternalError> {
        club.find_related(user::Entity)
            .order_by_asc(user::Column::Username)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_favorites_of", e))
    }

    /// Clubs the user favorited, ordered by code
    pub async fn list_favorited_by(
        &self,
        conn: &impl ConnectionTrait,
        user: &user::Model,
    ) -> Result<Vec<club::Model>, InternalError> {
        user.find_related(club::Entity)
            .order_by_asc(club::Column::Code)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_favorited_by", e))
    }

    pub async fn favorite_count(
        &self,
        conn: &impl ConnectionTrait,
        club_code: &str,
    ) -> Result<u64, InternalError> {
        favorite::Entity::find()
            .filter(favorite::Column::ClubCode.eq(club_code))
            .count(conn)
            .await
            .map_err(|e| InternalError::database("favorite_count", e))
    }
}
