//! HTTP interface over the bakery data.
//!
//! ```text
//! GET  /health
//! GET  /api/users
//! GET  /api/products
//! GET  /api/pickup-locations
//! GET  /api/orders?state=&from=&limit=
//! GET  /api/orders/:id
//! POST /api/orders/:id/state      {"state": "...", "changed_by": "<email>"}
//! ```

pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use crate::errors::Result;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/users", get(handlers::users::list_users))
        .route("/api/products", get(handlers::catalog::list_products))
        .route(
            "/api/pickup-locations",
            get(handlers::catalog::list_pickup_locations),
        )
        .route("/api/orders", get(handlers::orders::list_orders))
        .route("/api/orders/:id", get(handlers::orders::get_order))
        .route("/api/orders/:id/state", post(handlers::orders::change_state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `router` on `listener` until Ctrl-C is received.
///
/// # Errors
/// Returns an error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::order::create_order;
    use crate::test_utils::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn app_with_order() -> (Router, i64) {
        let fixture = setup_with_catalog().await.unwrap();
        let order = create_order(
            &fixture.db,
            test_new_order(
                fixture.product.id,
                fixture.location.id,
                fixture.barista.id,
                test_datetime(2024, 3, 1, 9, 0),
            ),
        )
        .await
        .unwrap();
        (router(AppState::new(fixture.db)), order.id)
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _) = app_with_order().await;
        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_catalog_endpoints() {
        let (app, _) = app_with_order().await;

        let response = app.clone().oneshot(get_request("/api/products")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body[0]["name"], "Test Bun");
        assert_eq!(body[0]["price"], 250);

        let response = app
            .oneshot(get_request("/api/pickup-locations"))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body[0]["name"], "Test Store");
    }

    #[tokio::test]
    async fn test_users_hide_password_hash() {
        let (app, _) = app_with_order().await;
        let response = app.oneshot(get_request("/api/users")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body[0]["email"], "barista@test.local");
        assert_eq!(body[0]["role"], "barista");
        assert!(body[0].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_order_listing_and_details() {
        let (app, order_id) = app_with_order().await;

        let response = app
            .clone()
            .oneshot(get_request("/api/orders?state=new&from=2024-03-01"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], order_id);

        let response = app
            .clone()
            .oneshot(get_request("/api/orders?state=delivered"))
            .await
            .unwrap();
        assert_eq!(json_body(response).await, json!([]));

        let response = app
            .oneshot(get_request(&format!("/api/orders/{order_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["order"]["state"], "new");
        assert_eq!(body["customer"]["full_name"], "Test Customer");
        assert_eq!(body["history"][0]["message"], "Order placed");
    }

    #[tokio::test]
    async fn test_unknown_order_is_404() {
        let (app, _) = app_with_order().await;
        let response = app.oneshot(get_request("/api/orders/999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_change_state_endpoint() {
        let (app, order_id) = app_with_order().await;
        let uri = format!("/api/orders/{order_id}/state");

        let request = json!({ "state": "cancelled", "changed_by": "barista@test.local" });
        let response = app.clone().oneshot(post_json(&uri, &request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["state"], "cancelled");

        // cancelled is final
        let request = json!({ "state": "ready", "changed_by": "barista@test.local" });
        let response = app.clone().oneshot(post_json(&uri, &request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["code"], "INVALID_TRANSITION");

        let request = json!({ "state": "ready", "changed_by": "nobody@test.local" });
        let response = app.oneshot(post_json(&uri, &request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_requests_are_json_400() {
        let (app, order_id) = app_with_order().await;

        let request = json!({ "state": "baked", "changed_by": "barista@test.local" });
        let response = app
            .clone()
            .oneshot(post_json(&format!("/api/orders/{order_id}/state"), &request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["code"], "VALIDATION_ERROR");

        let response = app
            .clone()
            .oneshot(get_request("/api/orders/not-a-number"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["code"], "VALIDATION_ERROR");

        let response = app
            .oneshot(get_request("/api/orders?from=yesterday"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].is_string());
    }
}
