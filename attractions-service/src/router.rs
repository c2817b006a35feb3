//! Route table and fallbacks

use axum::{
    http::{Method, Uri},
    middleware,
    routing::{get, get_service},
    Router,
};
use tower_http::services::ServeFile;

use crate::{
    error::Error,
    extract::{has_malformed_id, route_not_found},
    handlers,
    health::{health, readiness},
    middleware::log_requests,
    state::AppState,
};

/// Build the application router
///
/// `{id}` segments only match digits; see [`crate::extract::AttractionId`].
/// Unmatched paths get a 404 and known paths with another method a 405, both
/// as JSON error bodies. Every request, fallbacks included, passes through
/// [`log_requests`].
pub fn router(state: AppState) -> Router {
    let robots = ServeFile::new(&state.config().static_files.robots_txt);

    Router::new()
        .route("/attractions", get(handlers::list_attractions))
        .route("/attractions/{id}", get(handlers::get_attraction))
        .route(
            "/attractions/{id}/{column}",
            get(handlers::get_attraction_field),
        )
        .route("/search", get(handlers::search_attractions))
        .route("/robots.txt", get_service(robots))
        .route("/health", get(health))
        .route("/ready", get(readiness))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn not_found(uri: Uri) -> Error {
    route_not_found(uri.path())
}

async fn method_not_allowed(method: Method, uri: Uri) -> Error {
    // `{id}` only matches digits, so these paths have no route to refuse
    if has_malformed_id(uri.path()) {
        return route_not_found(uri.path());
    }
    tracing::info!("405 Method Not Allowed: {} {}", method, uri.path());
    Error::MethodNotAllowed(format!("405 method not allowed: {} {}", method, uri.path()))
}
