//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/`.
//! Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Personas
        .route("/personas", get(handlers::personas::list_personas))
        .route("/classify", post(handlers::personas::classify_message))
        // Group
        .route("/assign", post(handlers::group::assign))
        .route("/assignment", get(handlers::group::get_assignment))
        .route("/reply", post(handlers::group::reply))
        // History
        .route("/history", get(handlers::history::get_history))
        .route(
            "/history/{account}",
            get(handlers::history::get_account_history),
        )
        .route("/log", get(handlers::history::get_chat_log));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_version() {
        let axum::Json(body) = health_check().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn router_builds_with_state() {
        let dir = tempfile::tempdir().unwrap();
        let _router = build_router(crate::state::testing::offline_state(dir.path()));
    }
}
