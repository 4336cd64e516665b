//! Health check endpoint, used by load balancers and monitoring systems.

use axum::http::StatusCode;

/// Liveness probe. Does not touch the database.
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
