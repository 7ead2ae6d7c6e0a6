mod common;

use poem::http::StatusCode;
use serde_json::json;

use common::{create_club, get, post, setup_test_client, signup};

#[tokio::test]
async fn test_welcome_and_health() {
    let (client, _app, _clock) = setup_test_client().await;

    let resp = client.get("/").send().await;
    resp.assert_status_is_ok();

    let (status, body) = get(&client, "/api", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Welcome"));

    let (status, body) = get(&client, "/api/health", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_requires_valid_session_before_fields() {
    let (client, _app, _clock) = setup_test_client().await;

    // No token and no fields: the session check comes first
    let (status, body) = post(&client, "/api/clubs/create", json!({})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status_code"], 401);

    let (status, _) = post(
        &client,
        "/api/clubs/create",
        json!({"session_token": "not-a-real-token", "name": "Chess"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = signup(&client, "x@d.edu", "x", "p").await;
    let (status, body) = post(
        &client,
        "/api/clubs/create",
        json!({"session_token": token, "name": "Chess"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("code"));
}

#[tokio::test]
async fn test_duplicate_code_or_name_conflicts() {
    let (client, _app, _clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;

    let (status, _) = create_club(&client, &token, "chess", "Chess Club", &["Games"]).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = create_club(&client, &token, "CHESS", "Other Name", &[]).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = create_club(&client, &token, "other", "Chess Club", &[]).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, clubs) = get(&client, "/api/clubs", &[]).await;
    assert_eq!(clubs.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_and_search_clubs() {
    let (client, _app, _clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;

    create_club(&client, &token, "robo", "Penn Robotics", &["Engineering", "engineering"]).await;
    create_club(&client, &token, "chess", "Chess Club", &["Games"]).await;

    let (status, clubs) = get(&client, "/api/clubs", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        clubs,
        json!([
            {"code": "chess", "name": "Chess Club", "favorite_count": 0},
            {"code": "robo", "name": "Penn Robotics", "favorite_count": 0},
        ])
    );

    let (status, found) = get(&client, "/api/clubs/search", &[("string", "penn")]).await;
    assert_eq!(status, StatusCode::OK);
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["code"], "robo");
    assert_eq!(found[0]["tags"], json!(["engineering"]));
    assert_eq!(found[0]["description"], "About Penn Robotics");

    let (_, none) = get(&client, "/api/clubs/search", &[("string", "zzz")]).await;
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_search_matches_accented_names_in_any_case() {
    let (client, _app, _clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;
    create_club(&client, &token, "ecole", "École Club", &[]).await;

    for query in ["École", "école", "Club", "cole"] {
        let (status, found) = get(&client, "/api/clubs/search", &[("string", query)]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found.as_array().unwrap().len(), 1, "query {:?}", query);
        assert_eq!(found[0]["code"], "ecole");
    }
}

#[tokio::test]
async fn test_modify_with_mismatched_pair_is_rejected_without_changes() {
    let (client, _app, _clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;
    create_club(&client, &token, "chess", "Chess Club", &["games"]).await;

    let (status, _) = post(
        &client,
        "/api/clubs/modify",
        json!({
            "session_token": token,
            "code": "chess",
            "name": "Wrong Name",
            "new_data": {"description": "changed", "tags": ["other"]},
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, found) = get(&client, "/api/clubs/search", &[("string", "chess")]).await;
    assert_eq!(found[0]["description"], "About Chess Club");
    assert_eq!(found[0]["tags"], json!(["games"]));
}

#[tokio::test]
async fn test_modify_ignores_unknown_patch_keys() {
    let (client, _app, _clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;
    create_club(&client, &token, "chess", "Chess Club", &["games"]).await;

    let (status, _) = post(
        &client,
        "/api/clubs/modify",
        json!({
            "session_token": token,
            "code": "chess",
            "name": "Chess Club",
            "new_data": {"foo": "bar", "description": "Kings and queens", "tags": ["Strategy", "GAMES"]},
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, found) = get(&client, "/api/clubs/search", &[("string", "chess")]).await;
    assert_eq!(found[0]["description"], "Kings and queens");
    assert_eq!(found[0]["tags"], json!(["games", "strategy"]));

    // An empty patch is accepted and changes nothing
    let (status, _) = post(
        &client,
        "/api/clubs/modify",
        json!({"session_token": token, "code": "chess", "name": "Chess Club", "new_data": {}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_rename_onto_taken_name_conflicts() {
    let (client, _app, _clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;
    create_club(&client, &token, "chess", "Chess Club", &[]).await;
    create_club(&client, &token, "go", "Go Club", &[]).await;

    let (status, _) = post(
        &client,
        "/api/clubs/modify",
        json!({
            "session_token": token,
            "code": "go",
            "name": "Go Club",
            "new_data": {"name": "Chess Club"},
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_club() {
    let (client, _app, _clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;
    create_club(&client, &token, "chess", "Chess Club", &["games"]).await;

    let (status, _) = post(
        &client,
        "/api/clubs/delete",
        json!({"code": "chess", "name": "Chess Club"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = post(
        &client,
        "/api/clubs/delete",
        json!({"session_token": token, "code": "chess", "name": "Other"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &client,
        "/api/clubs/delete",
        json!({"session_token": token, "code": "chess", "name": "Chess Club"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, clubs) = get(&client, "/api/clubs", &[]).await;
    assert_eq!(clubs, json!([]));

    // The tag outlives its last club
    let (_, tags) = get(&client, "/api/tag", &[]).await;
    assert_eq!(tags, json!([{"name": "games", "club_count": 0}]));
}

#[tokio::test]
async fn test_club_favoriters() {
    let (client, _app, _clock) = setup_test_client().await;
    let alice = signup(&client, "alice@d.edu", "alice", "p").await;
    let bob = signup(&client, "bob@d.edu", "bob", "p").await;
    create_club(&client, &alice, "chess", "Chess Club", &[]).await;

    for token in [&alice, &bob] {
        let (status, _) = post(
            &client,
            "/api/user/favoriting",
            json!({"session_token": token, "code": "chess"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, users) = get(&client, "/api/clubs/favorite_users", &[("name", "Chess Club")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        users,
        json!([
            {"email": "alice@d.edu", "username": "alice"},
            {"email": "bob@d.edu", "username": "bob"},
        ])
    );

    let (status, _) = get(&client, "/api/clubs/favorite_users", &[]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&client, "/api/clubs/favorite_users", &[("code", "nope")]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
