// API layer - HTTP endpoints
pub mod clubs;
pub mod health;
pub mod tags;
pub mod users;

use std::sync::Arc;

use poem::{Route, endpoint::BoxEndpoint, EndpointExt};
use poem_openapi::OpenApiService;

pub use clubs::ClubsApi;
pub use health::HealthApi;
pub use tags::TagApi;
pub use users::UserApi;

use crate::app_data::AppData;
use crate::coordinators::{ClubCoordinator, TagCoordinator, UserCoordinator};

pub type ApiService = OpenApiService<(HealthApi, ClubsApi, UserApi, TagApi), ()>;

/// Build the OpenAPI service with one coordinator per endpoint group
pub fn api_service(app_data: Arc<AppData>, server_url: &str) -> ApiService {
    let clubs_api = ClubsApi::new(Arc::new(ClubCoordinator::new(app_data.clone())));
    let user_api = UserApi::new(Arc::new(UserCoordinator::new(app_data.clone())));
    let tag_api = TagApi::new(Arc::new(TagCoordinator::new(app_data)));

    OpenApiService::new(
        (HealthApi, clubs_api, user_api, tag_api),
        "Club Review API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url)
}

/// Full route tree: API at the root plus Swagger UI under `/swagger`
pub fn build_routes(app_data: Arc<AppData>, server_url: &str) -> BoxEndpoint<'static> {
    let api_service = api_service(app_data, server_url);
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/swagger", ui)
        .nest("/", api_service)
        .boxed()
}
