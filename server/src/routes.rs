use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::{extract::State, http::header, response::IntoResponse, routing::get, Router};
use backend::manifest::WebManifest;
use backend::PortalConfig;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::debug;

#[derive(Clone)]
struct AppState {
    manifest: Arc<str>,
}

/// Static host for one deployment of the portal.
///
/// Everything lives under the configured base path: the generated web manifest
/// and the built bundle, with unknown paths answered by `index.html`. Requests
/// outside the base path get a 404.
pub fn router(config: &PortalConfig, dist_dir: &Path) -> Result<Router> {
    let state = AppState {
        manifest: WebManifest::for_config(config).to_json()?.into(),
    };

    let index = ServeFile::new(dist_dir.join("index.html"));
    let bundle = ServeDir::new(dist_dir).fallback(index.clone());
    let deployment = Router::new()
        .route("/manifest.json", get(manifest))
        .fallback_service(bundle);

    // A nested router's fallback doesn't see `{base}/`; that's the app's start_url
    let app = match config.base_path.as_str() {
        "" => deployment,
        base => Router::new()
            .route_service(&format!("{}/", base), index)
            .nest(base, deployment),
    };

    Ok(app.with_state(state).layer(TraceLayer::new_for_http()))
}

async fn manifest(State(state): State<AppState>) -> impl IntoResponse {
    debug!("Serving web manifest");
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        state.manifest.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use backend::PortalVariant;
    use tempfile::TempDir;
    use tower::util::ServiceExt; // for `oneshot`

    const INDEX: &str = "<!DOCTYPE html><title>portal</title>";

    fn dist_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('portal')").unwrap();
        dir
    }

    fn deployment(base_path: &str) -> PortalConfig {
        PortalConfig {
            base_path: base_path.to_string(),
            ..PortalConfig::for_variant(PortalVariant::Grooming)
        }
    }

    async fn get_path(app: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_manifest_at_root() {
        let dist = dist_dir();
        let app = router(&deployment(""), dist.path()).unwrap();

        let (status, body) = get_path(app, "/manifest.json").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["theme_color"], "#38BDF8");
        assert_eq!(json["start_url"], "/");
    }

    #[tokio::test]
    async fn test_bundle_and_spa_fallback_under_base_path() {
        let dist = dist_dir();
        let app = router(&deployment("/west-ashley"), dist.path()).unwrap();

        let (status, body) = get_path(app.clone(), "/west-ashley/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("portal"));

        let (status, body) = get_path(app.clone(), "/west-ashley/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);

        let (status, body) = get_path(app.clone(), "/west-ashley").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);

        let (status, body) = get_path(app, "/west-ashley/visits/today").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_manifest_under_base_path() {
        let dist = dist_dir();
        let app = router(&deployment("/west-ashley"), dist.path()).unwrap();

        let (status, body) = get_path(app, "/west-ashley/manifest.json").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["scope"], "/west-ashley/");
        assert_eq!(json["icons"][0]["src"], "/west-ashley/icon-192x192.png");
    }

    #[tokio::test]
    async fn test_paths_outside_base_are_not_found() {
        let dist = dist_dir();
        let app = router(&deployment("/west-ashley"), dist.path()).unwrap();

        let (status, _) = get_path(app.clone(), "/app.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get_path(app, "/manifest.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
