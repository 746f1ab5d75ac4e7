use async_trait::async_trait;
use thiserror::Error;

use crate::composer::EmailDispatchRequest;

/// Dispatch-specific error type
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Email endpoint unreachable: {0}")]
    Transport(String),

    #[error("Email endpoint rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Result type for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;

/// What the email endpoint answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub status: u16,
    pub body: String,
}

/// Hands composed requests to the email-sending endpoint
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    /// Submit one request. Delivery itself is not confirmed.
    async fn send(&self, request: &EmailDispatchRequest) -> DispatchResult<DispatchOutcome>;

    /// Name used in logs
    fn name(&self) -> &'static str;
}
