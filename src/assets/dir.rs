use std::convert::Infallible;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use super::AssetService;

/// Serves files from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
    serve: ServeDir,
}

impl DirAssets {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            serve: ServeDir::new(&root),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl AssetService for DirAssets {
    async fn fetch(&self, request: Request<Body>) -> Response {
        let result: Result<_, Infallible> = self.serve.clone().oneshot(request).await;
        match result {
            Ok(response) => response.map(Body::new),
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::fs;
    use tempfile::TempDir;

    fn scratch_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("static")).unwrap();
        fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();
        fs::write(dir.path().join("static/app.js"), "console.log(1)").unwrap();
        dir
    }

    fn get(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_serves_existing_file() {
        let dir = scratch_dir();
        let assets = DirAssets::new(dir.path());

        let response = assets.fetch(get("/static/app.js")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"console.log(1)");
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = scratch_dir();
        let assets = DirAssets::new(dir.path());

        let response = assets.fetch(get("/static/logo.png")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
