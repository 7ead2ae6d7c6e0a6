use std::collections::BTreeSet;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::errors::InternalError;
use crate::types::db::{club, club_tag, tag};

/// TagStore owns the tag table and the club-tag association table
///
/// Tags are created on first use and never deleted; a tag whose last club is
/// removed stays behind with a count of zero.
#[derive(Debug, Default)]
pub struct TagStore;

impl TagStore {
    pub fn new() -> Self {
        Self
    }

    /// Insert every tag in `names` that does not exist yet
    pub async fn ensure_tags(
        &self,
        conn: &impl ConnectionTrait,
        names: &BTreeSet<String>,
    ) -> Result<(), InternalError> {
        for name in names {
            let existing = tag::Entity::find_by_id(name.clone())
                .one(conn)
                .await
                .map_err(|e| InternalError::database("find_tag", e))?;

            if existing.is_none() {
                tag::Entity::insert(tag::ActiveModel { name: Set(name.clone()) })
                    .exec_without_returning(conn)
                    .await
                    .map_err(|e| InternalError::database("insert_tag", e))?;
            }
        }

        Ok(())
    }

    /// Replace the tag set of a club with `names`
    ///
    /// Runs inside the caller's transaction, so other requests never see the
    /// club with an empty or half-written tag set.
    pub async fn replace_club_tags(
        &self,
        conn: &impl ConnectionTrait,
        club_code: &str,
        names: &BTreeSet<String>,
    ) -> Result<(), InternalError> {
        self.remove_club_tags(conn, club_code).await?;
        self.ensure_tags(conn, names).await?;

        for name in names {
            let link = club_tag::ActiveModel {
                club_code: Set(club_code.to_string()),
                tag_name: Set(name.clone()),
            };
            club_tag::Entity::insert(link)
                .exec_without_returning(conn)
                .await
                .map_err(|e| InternalError::database("insert_club_tag", e))?;
        }

        Ok(())
    }

    /// Drop every tag association of a club; the tags themselves persist
    pub async fn remove_club_tags(
        &self,
        conn: &impl ConnectionTrait,
        club_code: &str,
    ) -> Result<(), InternalError> {
        club_tag::Entity::delete_many()
            .filter(club_tag::Column::ClubCode.eq(club_code))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("remove_club_tags", e))?;
        Ok(())
    }

    /// Sorted tag names attached to a club
    pub async fn tags_for_club(
        &self,
        conn: &impl ConnectionTrait,
        club: &club::Model,
    ) -> Result<Vec<String>, InternalError> {
        let tags = club
            .find_related(tag::Entity)
            .order_by_asc(tag::Column::Name)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("tags_for_club", e))?;

        Ok(tags.into_iter().map(|t| t.name).collect())
    }

    pub async fn find(
        &self,
        conn: &impl ConnectionTrait,
        name: &str,
    ) -> Result<Option<tag::Model>, InternalError> {
        tag::Entity::find_by_id(name.to_lowercase())
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_tag", e))
    }

    pub async fn list_all(
        &self,
        conn: &impl ConnectionTrait,
    ) -> Result<Vec<tag::Model>, InternalError> {
        tag::Entity::find()
            .order_by_asc(tag::Column::Name)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_tags", e))
    }

    /// Number of distinct clubs associated with the tag
    pub async fn tag_count(
        &self,
        conn: &impl ConnectionTrait,
        name: &str,
    ) -> Result<u64, InternalError> {
        club_tag::Entity::find()
            .filter(club_tag::Column::TagName.eq(name.to_lowercase()))
            .count(conn)
            .await
            .map_err(|e| InternalError::database("tag_count", e))
    }

    /// Clubs carrying the tag, ordered by code
    pub async fn clubs_for_tag(
        &self,
        conn: &impl ConnectionTrait,
        tag: &tag::Model,
    ) -> Result<Vec<club::Model>, InternalError> {
        tag.find_related(club::Entity)
            .order_by_asc(club::Column::Code)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("clubs_for_tag", e))
    }
}
