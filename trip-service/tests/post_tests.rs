mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_post_success() {
    let app = TestApp::spawn().await;
    let (host_token, _) = app.user_token("alice");
    let trip_id = app.create_trip(&host_token, "Sailing the Cyclades").await;

    let (author_token, author_id) = app.user_token("bob");

    let response = app
        .post(&format!("/api/trips/{}/posts", trip_id))
        .bearer_auth(&author_token)
        .json(&json!({
            "body": "Anchored off Naxos tonight"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["trip_id"], trip_id.as_str());
    // The author is the verified caller from the credential.
    assert_eq!(body["author_id"], author_id.as_str());
    assert_eq!(body["body"], "Anchored off Naxos tonight");
}

#[tokio::test]
async fn test_create_post_unknown_trip() {
    let app = TestApp::spawn().await;
    let (token, _) = app.user_token("alice");

    let response = app
        .post(&format!("/api/trips/{}/posts", uuid::Uuid::new_v4()))
        .bearer_auth(&token)
        .json(&json!({
            "body": "hello"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_post_requires_credential() {
    let app = TestApp::spawn().await;
    let (token, _) = app.user_token("alice");
    let trip_id = app.create_trip(&token, "Sailing the Cyclades").await;

    let response = app
        .post(&format!("/api/trips/{}/posts", trip_id))
        .json(&json!({
            "body": "anonymous chatter"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_trip_posts_newest_first_with_limit() {
    let app = TestApp::spawn().await;
    let (token, _) = app.user_token("alice");
    let trip_id = app.create_trip(&token, "Sailing the Cyclades").await;

    for body in ["first", "second", "third"] {
        let response = app
            .post(&format!("/api/trips/{}/posts", trip_id))
            .bearer_auth(&token)
            .json(&json!({ "body": body }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .get(&format!("/api/trips/{}/posts?limit=2", trip_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 2);
}

#[tokio::test]
async fn test_empty_post_body_rejected() {
    let app = TestApp::spawn().await;
    let (token, _) = app.user_token("alice");
    let trip_id = app.create_trip(&token, "Sailing the Cyclades").await;

    let response = app
        .post(&format!("/api/trips/{}/posts", trip_id))
        .bearer_auth(&token)
        .json(&json!({ "body": "" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
