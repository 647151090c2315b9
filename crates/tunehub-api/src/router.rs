//! Route definitions for the TuneHub HTTP server.

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let share_path = normalize_share_path(&state.config.assets.share_path);

    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route(&share_path, get(handlers::share::missing_share_id))
        .route(
            &format!("{share_path}/"),
            get(handlers::share::missing_share_id),
        )
        .route(
            &format!("{share_path}/{{*id}}"),
            get(handlers::share::handle_share),
        )
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Gives the share path exactly one leading slash and no trailing slash.
/// The root path is not allowed and falls back to `/share`.
pub fn normalize_share_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/share".to_string()
    } else {
        format!("/{trimmed}")
    }
}
