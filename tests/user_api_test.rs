mod common;

use chrono::Duration;
use poem::http::StatusCode;
use serde_json::json;

use common::{create_club, get, post, setup_test_client, signup};

#[tokio::test]
async fn test_signup_login_scenario() {
    let (client, _app, _clock) = setup_test_client().await;

    signup(&client, "x@d.edu", "x", "p").await;

    let (status, body) = post(
        &client,
        "/api/user/login",
        json!({"email": "x@d.edu", "password": "p"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session_token"].as_str().unwrap().len(), 30);

    let (status, wrong) = post(
        &client,
        "/api/user/login",
        json!({"email": "x@d.edu", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, unknown) = post(
        &client,
        "/api/user/login",
        json!({"email": "nobody@d.edu", "password": "p"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong["message"], unknown["message"]);

    let (status, _) = post(
        &client,
        "/api/user/signup",
        json!({"email": "x@d.edu", "username": "other", "password": "p"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = post(
        &client,
        "/api/user/signup",
        json!({"email": "y@d.edu", "username": "x", "password": "p"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signup_and_login_require_fields() {
    let (client, _app, _clock) = setup_test_client().await;

    let (status, _) = post(
        &client,
        "/api/user/signup",
        json!({"email": "x@d.edu", "password": "p"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&client, "/api/user/login", json!({"email": "x@d.edu"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_invalidates_the_token() {
    let (client, _app, _clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;

    let (status, _) = post(&client, "/api/user/logout", json!({"session_token": token})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post(&client, "/api/user/logout", json!({"session_token": token})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = create_club(&client, &token, "chess", "Chess Club", &[]).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_expires_after_ttl() {
    let (client, _app, clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;

    clock.advance(Duration::hours(24) - Duration::seconds(1));
    let (status, _) = create_club(&client, &token, "chess", "Chess Club", &[]).await;
    assert_eq!(status, StatusCode::OK);

    clock.advance(Duration::seconds(1));
    let (status, _) = create_club(&client, &token, "go", "Go Club", &[]).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Logging in again issues a working token
    let (_, body) = post(
        &client,
        "/api/user/login",
        json!({"email": "x@d.edu", "password": "p"}),
    )
    .await;
    let fresh = body["session_token"].as_str().unwrap();
    let (status, _) = create_club(&client, fresh, "go", "Go Club", &[]).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_user() {
    let (client, _app, _clock) = setup_test_client().await;
    signup(&client, "x@d.edu", "x", "p").await;

    let (status, body) = get(&client, "/api/user", &[("username", "x")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"email": "x@d.edu", "username": "x"}));

    let (status, _) = get(&client, "/api/user", &[("username", "nobody")]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&client, "/api/user", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_favoriting_is_idempotent() {
    let (client, _app, _clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;
    create_club(&client, &token, "chess", "Chess Club", &["Games"]).await;

    for _ in 0..2 {
        let (status, _) = post(
            &client,
            "/api/user/favoriting",
            json!({"session_token": token, "code": "CHESS"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, clubs) = get(&client, "/api/clubs", &[]).await;
    assert_eq!(clubs[0]["favorite_count"], 1);

    let (status, favorites) = get(&client, "/api/user/favorite_clubs", &[("username", "x")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        favorites,
        json!([{
            "code": "chess",
            "name": "Chess Club",
            "description": "About Chess Club",
            "tags": ["games"],
        }])
    );

    let (_, by_email) = get(&client, "/api/user/favorite_clubs", &[("email", "x@d.edu")]).await;
    assert_eq!(by_email, favorites);
}

#[tokio::test]
async fn test_favoriting_failures() {
    let (client, _app, _clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;

    let (status, _) = post(&client, "/api/user/favoriting", json!({"code": "chess"})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = post(&client, "/api/user/favoriting", json!({"session_token": token})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &client,
        "/api/user/favoriting",
        json!({"session_token": token, "code": "nope"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&client, "/api/user/favorite_clubs", &[]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&client, "/api/user/favorite_clubs", &[("username", "nobody")]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
