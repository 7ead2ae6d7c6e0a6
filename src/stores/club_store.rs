use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::errors::InternalError;
use crate::errors::internal::ClubError;
use crate::errors::internal::database::is_unique_violation;
use crate::stores::TagStore;
use crate::types::db::{club, favorite};
use crate::types::internal::club::normalize_code;
use crate::types::internal::{ClubPatch, NewClub};

/// ClubStore owns club rows and keeps their tag associations in step
///
/// Every method takes the caller's connection or transaction; the store
/// never opens one itself.
pub struct ClubStore {
    tag_store: Arc<TagStore>,
}

impl ClubStore {
    pub fn new(tag_store: Arc<TagStore>) -> Self {
        Self { tag_store }
    }

    /// Find a club by code OR name
    ///
    /// Returns `None` when neither is supplied or nothing matches.
    pub async fn find_club(
        &self,
        conn: &impl ConnectionTrait,
        code: Option<&str>,
        name: Option<&str>,
    ) -> Result<Option<club::Model>, InternalError> {
        if code.is_none() && name.is_none() {
            return Ok(None);
        }

        let mut condition = Condition::any();
        if let Some(code) = code {
            condition = condition.add(club::Column::Code.eq(normalize_code(code)));
        }
        if let Some(name) = name {
            condition = condition.add(club::Column::Name.eq(name));
        }

        club::Entity::find()
            .filter(condition)
            .order_by_asc(club::Column::Code)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_club", e))
    }

    pub async fn find_by_code(
        &self,
        conn: &impl ConnectionTrait,
        code: &str,
    ) -> Result<Option<club::Model>, InternalError> {
        club::Entity::find_by_id(normalize_code(code))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_club_by_code", e))
    }

    /// Look up the club identified by the exact (code, name) pair
    async fn find_pair(
        &self,
        conn: &impl ConnectionTrait,
        code: &str,
        name: &str,
    ) -> Result<club::Model, InternalError> {
        match self.find_by_code(conn, code).await? {
            Some(club) if club.name == name => Ok(club),
            _ => Err(ClubError::Mismatch {
                code: code.to_string(),
                name: name.to_string(),
            }
            .into()),
        }
    }

    /// Create a club and attach its tags
    ///
    /// Fails with `ClubError::Duplicate` when the code or the name is taken.
    pub async fn create_club(
        &self,
        conn: &impl ConnectionTrait,
        new_club: NewClub,
    ) -> Result<club::Model, InternalError> {
        let duplicate = || ClubError::Duplicate {
            code: new_club.code.clone(),
            name: new_club.name.clone(),
        };

        if self
            .find_club(conn, Some(&new_club.code), Some(&new_club.name))
            .await?
            .is_some()
        {
            return Err(duplicate().into());
        }

        let model = club::ActiveModel {
            code: Set(new_club.code.clone()),
            name: Set(new_club.name.clone()),
            description: Set(new_club.description.clone()),
        };

        // The unique indexes catch a concurrent create that passed the check above
        let created = model.insert(conn).await.map_err(|e| {
            if is_unique_violation(&e) {
                duplicate().into()
            } else {
                InternalError::database("insert_club", e)
            }
        })?;

        self.tag_store
            .replace_club_tags(conn, &created.code, &new_club.tags)
            .await?;

        Ok(created)
    }

    /// Apply `patch` to the club identified by (code, name)
    ///
    /// The code never changes. A rename onto another club's name fails with
    /// `ClubError::NameConflict`; renaming to the current name is a no-op.
    pub async fn update_club(
        &self,
        conn: &impl ConnectionTrait,
        code: &str,
        name: &str,
        patch: ClubPatch,
    ) -> Result<club::Model, InternalError> {
        let current = self.find_pair(conn, code, name).await?;

        let rename = patch.name.filter(|new_name| *new_name != current.name);
        if let Some(new_name) = &rename {
            let taken = club::Entity::find()
                .filter(club::Column::Name.eq(new_name.as_str()))
                .one(conn)
                .await
                .map_err(|e| InternalError::database("check_club_name", e))?;
            if taken.is_some() {
                return Err(ClubError::NameConflict { name: new_name.clone() }.into());
            }
        }

        let club_code = current.code.clone();
        let mut model: club::ActiveModel = current.clone().into();
        if let Some(new_name) = rename.clone() {
            model.name = Set(new_name);
        }
        if let Some(description) = patch.description {
            model.description = Set(description);
        }

        let updated = if model.is_changed() {
            model.update(conn).await.map_err(|e| {
                if is_unique_violation(&e) {
                    ClubError::NameConflict { name: rename.clone().unwrap_or_default() }.into()
                } else {
                    InternalError::database("update_club", e)
                }
            })?
        } else {
            current
        };

        if let Some(tags) = patch.tags {
            self.tag_store.replace_club_tags(conn, &club_code, &tags).await?;
        }

        Ok(updated)
    }

    /// Delete the club identified by (code, name) with its tag and favorite links
    pub async fn delete_club(
        &self,
        conn: &impl ConnectionTrait,
        code: &str,
        name: &str,
    ) -> Result<(), InternalError> {
        let club = self.find_pair(conn, code, name).await?;

        self.tag_store.remove_club_tags(conn, &club.code).await?;

        favorite::Entity::delete_many()
            .filter(favorite::Column::ClubCode.eq(club.code.as_str()))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("remove_club_favorites", e))?;

        club::Entity::delete_by_id(club.code)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_club", e))?;

        Ok(())
    }

    pub async fn list_all(
        &self,
        conn: &impl ConnectionTrait,
    ) -> Result<Vec<club::Model>, InternalError> {
        club::Entity::find()
            .order_by_asc(club::Column::Code)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_clubs", e))
    }

    /// Case-insensitive substring match on the club name
    ///
    /// Both sides are folded with Unicode lowercasing in-process; SQLite's
    /// `LOWER()` only folds ASCII. `%` and `_` in `query` match literally.
    pub async fn search_by_name_substring(
        &self,
        conn: &impl ConnectionTrait,
        query: &str,
    ) -> Result<Vec<club::Model>, InternalError> {
        let needle = query.to_lowercase();
        let clubs = self.list_all(conn).await?;

        Ok(clubs
            .into_iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Raw association rows of a club
    #[cfg(test)]
    pub async fn tag_links(
        &self,
        conn: &impl ConnectionTrait,
        code: &str,
    ) -> Result<Vec<crate::types::db::club_tag::Model>, InternalError> {
        use crate::types::db::club_tag;

        club_tag::Entity::find()
            .filter(club_tag::Column::ClubCode.eq(normalize_code(code)))
            .all(conn)
            .await
            .map_err(|e| InternalError::database("tag_links", e))
    }
}
