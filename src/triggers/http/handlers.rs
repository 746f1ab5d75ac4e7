//! HTTP order email handlers

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::AppState;

use super::models::SendOrderEmailResponse;

/// Compose an order email and start its dispatch.
///
/// The body is taken as raw JSON so that the composer's own contract
/// checks produce the validation errors.
#[tracing::instrument(name = "http.send_order_email", skip(state, payload))]
pub async fn send_order_email(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<SendOrderEmailResponse>> {
    let outcome = state.composer.compose(payload)?;

    Ok(Json(SendOrderEmailResponse::from(&outcome)))
}
