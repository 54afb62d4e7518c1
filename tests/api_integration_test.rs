use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use portal::config::{ApiSettings, MockSettings, ServerSettings, Settings, StorageSettings};
use serde_json::{json, Value};
use std::path::PathBuf;
use tower::util::ServiceExt;

fn settings(mock: MockSettings) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        api: ApiSettings {
            levels_url: "http://127.0.0.1:1/levels".to_string(),
            assignments_url: "http://127.0.0.1:1/assignments".to_string(),
        },
        storage: StorageSettings {
            path: PathBuf::from("portal-data.json"),
        },
        mock,
    }
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_levels_endpoint() {
    let app = portal::create_app(&settings(MockSettings::default()));
    let request = Request::builder()
        .uri("/api/tools/candidates/levels")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "levels": ["Junior", "Middle", "Senior"] }));
}

#[tokio::test]
async fn test_levels_endpoint_configured_to_fail() {
    let app = portal::create_app(&settings(MockSettings {
        fail_levels: true,
        ..MockSettings::default()
    }));
    let request = Request::builder()
        .uri("/api/tools/candidates/levels")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_assignment_accepted() {
    let app = portal::create_app(&settings(MockSettings::default()));
    let request = post_json(
        "/api/tools/candidates/assignments",
        json!({
            "name": "Test Name",
            "email": "test@test.io",
            "assignment_description": "Test description",
            "github_repo_url": "https://test.io",
            "candidate_level": "Junior",
        }),
    );

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), Value::Null);
}

#[tokio::test]
async fn test_assignment_rejected_with_errors() {
    let app = portal::create_app(&settings(MockSettings::default()));
    let request = post_json(
        "/api/tools/candidates/assignments",
        json!({ "name": "Test Name", "assignment_description": "Test" }),
    );

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body,
        json!({
            "errors": [
                "Email is required",
                "Description must be at least 10 characters",
                "GitHub URL is required",
                "Level is required",
            ]
        })
    );
}

#[tokio::test]
async fn test_null_body_rejected() {
    let app = portal::create_app(&settings(MockSettings::default()));
    let (status, body) = send(app, post_json("/api/tools/candidates/assignments", Value::Null)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["errors"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_ui() {
    let app = portal::create_app(&settings(MockSettings::default()));
    let request = Request::builder()
        .uri("/thank-you")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(app, request).await;
    // 404 only when the UI bundle has not been built
    assert!(status == StatusCode::OK || status == StatusCode::NOT_FOUND);
}
