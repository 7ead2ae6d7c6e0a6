use chrono::Utc;
use poem_openapi::{OpenApi, Tags, payload::{Json, PlainText}};

use crate::types::dto::common::{HealthResponse, MessageResponse};

/// Landing pages and health check
pub struct HealthApi;

/// API tags for service endpoints
#[derive(Tags)]
enum ServiceTags {
    /// Landing and health check endpoints
    Service,
}

#[OpenApi]
impl HealthApi {
    #[oai(path = "/", method = "get", tag = "ServiceTags::Service")]
    async fn index(&self) -> PlainText<&'static str> {
        PlainText("Welcome to Club Review!")
    }

    #[oai(path = "/api", method = "get", tag = "ServiceTags::Service")]
    async fn api_index(&self) -> Json<MessageResponse> {
        Json(MessageResponse::new("Welcome to the Club Review API!"))
    }

    /// Health check endpoint
    ///
    /// Returns the current status of the API service
    #[oai(path = "/api/health", method = "get", tag = "ServiceTags::Service")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
