//! Non-API paths: asset delegation and SPA index fallback.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

mod common;
use common::{body_string, router, test_config, StubAssets};

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn stub() -> Arc<StubAssets> {
    Arc::new(StubAssets::with_files(&[
        ("/index.html", "<html>app</html>"),
        ("/static/app.js", "console.log(1)"),
    ]))
}

#[tokio::test]
async fn existing_asset_is_returned_unchanged() {
    let assets = stub();
    let app = router(test_config(), assets.clone());

    let resp = app.oneshot(get("/static/app.js")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "console.log(1)");
    assert_eq!(assets.requested(), vec!["/static/app.js"]);
}

#[tokio::test]
async fn missing_file_with_extension_is_plain_404() {
    let assets = stub();
    let app = router(test_config(), assets.clone());

    let resp = app.oneshot(get("/static/logo.png")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(resp).await, "Not found");
    assert_eq!(assets.requested(), vec!["/static/logo.png"]);
}

#[tokio::test]
async fn extensionless_get_falls_back_to_index() {
    let assets = stub();
    let app = router(test_config(), assets.clone());

    let resp = app.oneshot(get("/dashboard")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "<html>app</html>");
    assert_eq!(assets.requested(), vec!["/dashboard", "/index.html"]);
}

#[tokio::test]
async fn index_fallback_result_is_returned_as_is() {
    // No index document in the store: the second lookup's 404 is the answer.
    let assets = Arc::new(StubAssets::default());
    let app = router(test_config(), assets.clone());

    let resp = app.oneshot(get("/dashboard/settings")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(assets.requested(), vec!["/dashboard/settings", "/index.html"]);
}

#[tokio::test]
async fn non_get_miss_is_not_retried() {
    let assets = stub();
    let app = router(test_config(), assets.clone());

    let req = Request::builder()
        .method("POST")
        .uri("/dashboard")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(resp).await, "Not found");
    assert_eq!(assets.requested(), vec!["/dashboard"]);
}

#[tokio::test]
async fn disabled_fallback_is_plain_404() {
    let assets = stub();
    let mut config = test_config();
    config.assets.spa_fallback = false;
    let app = router(config, assets.clone());

    let resp = app.oneshot(get("/dashboard")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(assets.requested(), vec!["/dashboard"]);
}

#[tokio::test]
async fn api_paths_never_reach_assets() {
    let assets = stub();
    let app = router(test_config(), assets.clone());

    let resp = app.oneshot(get("/api/index.html")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(assets.requested().is_empty());
}
