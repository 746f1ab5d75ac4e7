//! Request and response models for the order email API

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::composer::ComposeOutcome;

/// Response for `POST /api/v1/order-emails`
///
/// `dispatched` only says a dispatch was started; delivery is not awaited.
#[derive(Debug, Serialize)]
pub struct SendOrderEmailResponse {
    pub request_id: Uuid,
    /// Slug derived from the action or workflow status
    pub slug: String,
    /// Template sent, empty when the event produces no email
    pub template: String,
    pub dispatched: bool,
    pub timestamp: DateTime<Utc>,
}

impl From<&ComposeOutcome> for SendOrderEmailResponse {
    fn from(outcome: &ComposeOutcome) -> Self {
        Self {
            request_id: outcome.request_id,
            slug: outcome.decision.slug.to_string(),
            template: outcome.decision.template_id().to_string(),
            dispatched: outcome.dispatched(),
            timestamp: Utc::now(),
        }
    }
}
