// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use poem::endpoint::BoxEndpoint;
use poem::http::StatusCode;
use poem::test::{TestClient, TestResponse};
use serde_json::{Value, json};

use clubreview_backend::AppData;
use clubreview_backend::api::build_routes;
use clubreview_backend::config::Settings;
use clubreview_backend::providers::ManualClock;

pub const TEST_PEPPER: &str = "integration-test-pepper";

/// AppData over a migrated in-memory database, driven by a manual clock
pub async fn setup_test_app() -> (Arc<AppData>, Arc<ManualClock>) {
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let settings = Settings::with_defaults("sqlite::memory:", TEST_PEPPER);

    let app_data = AppData::init(settings, clock.clone())
        .await
        .expect("Failed to initialize AppData");
    app_data.database.migrate().await.expect("Failed to run migrations");

    (Arc::new(app_data), clock)
}

pub type Client = TestClient<BoxEndpoint<'static>>;

/// HTTP client over the full route tree plus the clock behind it
pub async fn setup_test_client() -> (Client, Arc<AppData>, Arc<ManualClock>) {
    let (app_data, clock) = setup_test_app().await;
    let client = TestClient::new(build_routes(app_data.clone(), "http://localhost"));
    (client, app_data, clock)
}

/// Status code and decoded JSON body
pub async fn read(resp: TestResponse) -> (StatusCode, Value) {
    let status = resp.0.status();
    let body = resp
        .0
        .into_body()
        .into_string()
        .await
        .expect("Failed to read body");
    let value = serde_json::from_str(&body).unwrap_or(Value::String(body));
    (status, value)
}

pub async fn post(client: &Client, path: &str, body: Value) -> (StatusCode, Value) {
    read(client.post(path).body_json(&body).send().await).await
}

pub async fn get(client: &Client, path: &str, query: &[(&str, &str)]) -> (StatusCode, Value) {
    let mut request = client.get(path);
    for (key, value) in query {
        request = request.query(*key, value);
    }
    read(request.send().await).await
}

/// Sign up a user and return their session token
pub async fn signup(client: &Client, email: &str, username: &str, password: &str) -> String {
    let (status, body) = post(
        client,
        "/api/user/signup",
        json!({"email": email, "username": username, "password": password}),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "signup failed: {}", body);
    body["session_token"]
        .as_str()
        .expect("signup returns a session token")
        .to_string()
}

pub async fn create_club(
    client: &Client,
    token: &str,
    code: &str,
    name: &str,
    tags: &[&str],
) -> (StatusCode, Value) {
    post(
        client,
        "/api/clubs/create",
        json!({
            "session_token": token,
            "code": code,
            "name": name,
            "description": format!("About {}", name),
            "tags": tags,
        }),
    )
    .await
}
