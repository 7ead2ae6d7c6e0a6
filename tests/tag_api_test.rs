mod common;

use poem::http::StatusCode;
use serde_json::json;

use common::{create_club, get, setup_test_client, signup};

#[tokio::test]
async fn test_tags_are_case_folded_and_counted() {
    let (client, _app, _clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;

    create_club(&client, &token, "chess", "Chess Club", &["A", "a", "B"]).await;
    create_club(&client, &token, "go", "Go Club", &["b"]).await;

    let (status, tags) = get(&client, "/api/tag", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        tags,
        json!([
            {"name": "a", "club_count": 1},
            {"name": "b", "club_count": 2},
        ])
    );
}

#[tokio::test]
async fn test_tag_search_round_trip() {
    let (client, _app, _clock) = setup_test_client().await;
    let token = signup(&client, "x@d.edu", "x", "p").await;
    create_club(&client, &token, "chess", "Chess Club", &["Strategy"]).await;
    create_club(&client, &token, "go", "Go Club", &["strategy"]).await;
    create_club(&client, &token, "choir", "Choir", &["music"]).await;

    let (status, body) = get(&client, "/api/tag/search", &[("tag", "STRATEGY")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "name": "strategy",
            "clubs": [
                {"code": "chess", "name": "Chess Club"},
                {"code": "go", "name": "Go Club"},
            ],
        })
    );
}

#[tokio::test]
async fn test_tag_search_misses() {
    let (client, _app, _clock) = setup_test_client().await;

    let (status, body) = get(&client, "/api/tag/search", &[("tag", "nothing")]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status_code"], 404);

    let (status, _) = get(&client, "/api/tag/search", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
