//! Request logging middleware

use axum::{extract::Request, middleware::Next, response::Response};

/// Log method and URI of every dispatched request, then continue
///
/// Observes only; the request reaches the matched handler (or fallback)
/// unchanged.
pub async fn log_requests(request: Request, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        uri = %request.uri(),
        "Request - Method: {}, URI: {}",
        request.method(),
        request.uri()
    );
    next.run(request).await
}
