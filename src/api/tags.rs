use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, param::Query, payload::Json};

use crate::coordinators::TagCoordinator;
use crate::errors::ApiError;
use crate::types::dto::tags::{TagClubs, TagCount};

pub struct TagApi {
    tag_coordinator: Arc<TagCoordinator>,
}

impl TagApi {
    pub fn new(tag_coordinator: Arc<TagCoordinator>) -> Self {
        Self { tag_coordinator }
    }
}

#[derive(Tags)]
enum TagTags {
    /// Tag listing and lookup
    Tags,
}

#[OpenApi(prefix_path = "/api")]
impl TagApi {
    /// Every tag with the number of clubs carrying it
    #[oai(path = "/tag", method = "get", tag = "TagTags::Tags")]
    async fn list_tags(&self) -> Result<Json<Vec<TagCount>>, ApiError> {
        Ok(Json(self.tag_coordinator.list_tags().await?))
    }

    /// Clubs carrying the given tag
    #[oai(path = "/tag/search", method = "get", tag = "TagTags::Tags")]
    async fn tag_search(&self, tag: Query<Option<String>>) -> Result<Json<TagClubs>, ApiError> {
        Ok(Json(self.tag_coordinator.tag_search(tag.0).await?))
    }
}
