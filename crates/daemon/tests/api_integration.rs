//! End-to-end tests of the HTTP surface, driving the router directly with
//! tower without binding a socket.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::util::ServiceExt;

use share_manager::http_server;
use share_manager::{Mounter, MounterError, ShareManager, ServiceState, Volume};

struct StubMounter;

#[async_trait]
impl Mounter for StubMounter {
    async fn mount(&self, _volume: &Volume, _mount_path: &Path) -> Result<(), MounterError> {
        Ok(())
    }
    async fn unmount(&self, _mount_path: &Path) -> Result<(), MounterError> {
        Ok(())
    }
    async fn trim(&self, _mount_path: &Path) -> Result<(), MounterError> {
        Ok(())
    }
    async fn is_mount_point(&self, _path: &Path) -> bool {
        true
    }
}

fn app() -> axum::Router {
    let manager = Arc::new(ShareManager::new(
        Volume::new("pvc-api"),
        PathBuf::from("/export"),
        Arc::new(StubMounter),
    ));
    http_server::app(ServiceState::with_manager(manager))
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_livez() {
    let response = app()
        .oneshot(Request::get("/_status/livez").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_version_reports_build_info() {
    let response = app()
        .oneshot(
            Request::get("/_status/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_mount_lifecycle_over_http() {
    let app = app();

    // Fresh share reports unmounted.
    let response = app
        .clone()
        .oneshot(Request::get("/api/v0/share").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["share"]["status"], "unmounted");

    // Mount succeeds and reports the export path.
    let response = app.clone().oneshot(post("/api/v0/share/mount")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["mounted"], true);
    assert_eq!(json["mount_path"], "/export/pvc-api");

    // Second mount conflicts.
    let response = app.clone().oneshot(post("/api/v0/share/mount")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Trim of the managed volume succeeds and leaves the share mounted.
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v0/share/trim",
            serde_json::json!({"volume": "pvc-api"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(Request::get("/api/v0/share").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["share"]["status"], "mounted");

    // Unmount succeeds; a second unmount conflicts.
    let response = app
        .clone()
        .oneshot(post("/api/v0/share/unmount"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(post("/api/v0/share/unmount")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_trim_unknown_volume_is_not_found() {
    let app = app();
    app.clone().oneshot(post("/api/v0/share/mount")).await.unwrap();

    let response = app
        .oneshot(post_json(
            "/api/v0/share/trim",
            serde_json::json!({"volume": "nope"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trim_before_mount_conflicts() {
    let response = app()
        .oneshot(post_json(
            "/api/v0/share/trim",
            serde_json::json!({"volume": "pvc-api"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
