use std::sync::Arc;

use crate::app_data::AppData;
use crate::config::DatabaseHandle;
use crate::errors::InternalError;
use crate::errors::internal::TagError;
use crate::stores::TagStore;
use crate::types::dto::clubs::ClubRef;
use crate::types::dto::tags::{TagClubs, TagCount};

pub struct TagCoordinator {
    database: DatabaseHandle,
    tag_store: Arc<TagStore>,
}

impl TagCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            database: app_data.database.clone(),
            tag_store: app_data.tag_store.clone(),
        }
    }

    /// Every known tag with its club count; unused tags report zero
    pub async fn list_tags(&self) -> Result<Vec<TagCount>, InternalError> {
        let txn = self.database.begin().await?;

        let tags = self.tag_store.list_all(&txn).await?;
        let mut counts = Vec::with_capacity(tags.len());
        for tag in tags {
            let club_count = self.tag_store.tag_count(&txn, &tag.name).await?;
            counts.push(TagCount {
                name: tag.name,
                club_count,
            });
        }

        DatabaseHandle::commit(txn).await?;
        Ok(counts)
    }

    pub async fn tag_search(&self, name: Option<String>) -> Result<TagClubs, InternalError> {
        let name = name.unwrap_or_default();
        let txn = self.database.begin().await?;

        let tag = self
            .tag_store
            .find(&txn, &name)
            .await?
            .ok_or_else(|| TagError::NotFound { name: name.clone() })?;
        let clubs = self.tag_store.clubs_for_tag(&txn, &tag).await?;

        DatabaseHandle::commit(txn).await?;
        Ok(TagClubs {
            name: tag.name,
            clubs: clubs
                .into_iter()
                .map(|c| ClubRef {
                    code: c.code,
                    name: c.name,
                })
                .collect(),
        })
    }
}
