use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::server::{api_key_auth, AppState};
use crate::triggers::send_order_email;

use super::health::{health, stats};
use super::metrics::prometheus_metrics;

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health, stats & metrics
        .route("/health", get(health))
        .route("/stats", get(stats))
        .route("/metrics", get(prometheus_metrics))
        // Order email endpoints
        .nest(
            "/api/v1",
            Router::new()
                .route("/order-emails", post(send_order_email))
                .route_layer(middleware::from_fn_with_state(state, api_key_auth)),
        )
}
