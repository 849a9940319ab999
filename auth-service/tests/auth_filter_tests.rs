mod common;

use common::TestApp;
use reqwest::StatusCode;

#[tokio::test]
async fn test_health_without_credentials() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_me_without_credentials() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Authentication required");
}

#[tokio::test]
async fn test_me_with_valid_token() {
    let app = TestApp::spawn().await;
    let token = app.create_token("alice@example.com");

    let response = app
        .get_authenticated("/api/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["subject"], "alice@example.com");
    assert_eq!(body["data"]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_me_with_non_bearer_scheme() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/me")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_lowercase_bearer_scheme() {
    let app = TestApp::spawn().await;
    let token = app.create_token("alice@example.com");

    let response = app
        .get("/api/me")
        .header("Authorization", format!("bearer {}", token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_foreign_signature() {
    let app = TestApp::spawn().await;
    let token = app.create_foreign_token("alice@example.com");

    let response = app
        .get_authenticated("/api/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_expired_token() {
    let app = TestApp::spawn().await;
    let token = app.create_expired_token("alice@example.com");

    let response = app
        .get_authenticated("/api/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_unknown_subject() {
    let app = TestApp::spawn().await;
    let token = app.create_token("mallory@example.com");

    let response = app
        .get_authenticated("/api/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_malformed_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/api/me", "garbage")
        .send()
        .await
        .expect("Failed to execute request");

    // A malformed token is indistinguishable from no token at all, it
    // never takes the server down.
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let followup = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(followup.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_directory_scopes_authentication() {
    let app = TestApp::spawn_with_identities(vec!["solo@example.com".to_string()]).await;
    let known = app.create_token("solo@example.com");
    let unknown = app.create_token("alice@example.com");

    let response = app
        .get_authenticated("/api/me", &known)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .get_authenticated("/api/me", &unknown)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
