//! Router
//!
//! Every client-side route gets `index.html`; anything else is looked up in
//! the site directory and falls back to `index.html` with a 404 status so
//! the frontend can render its "Page not found" view.

use axum::{Router, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use exergy_core::Route;

use crate::handlers::health_check;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let index = state.index_path();

    let mut router = Router::new().route("/health", get(health_check));
    for route in Route::ALL {
        router = router.route_service(route.path(), ServeFile::new(&index));
    }

    let assets = ServeDir::new(state.site_dir()).not_found_service(ServeFile::new(&index));

    router
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body></body></html>";

    /// Scratch site directory with an index and one asset
    fn site_fixture() -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let dir = std::env::temp_dir().join(format!(
            "exergy-site-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), INDEX).unwrap();
        std::fs::write(dir.join("style.css"), "body { margin: 0; }").unwrap();
        dir
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_pages_serve_index() {
        let state = AppState::new(site_fixture());

        for path in ["/", "/solutions"] {
            let (status, body) = fetch(router(state.clone()), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, INDEX);
        }
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let (status, body) = fetch(router(AppState::new(site_fixture())), "/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("margin"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_with_index() {
        let (status, body) = fetch(router(AppState::new(site_fixture())), "/company").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = fetch(router(AppState::new(site_fixture())), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["site_built"], true);
    }

    #[tokio::test]
    async fn test_health_reports_missing_build() {
        let state = AppState::new(std::env::temp_dir().join("exergy-site-missing"));
        let (_, body) = fetch(router(state), "/health").await;

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["site_built"], false);
    }
}
