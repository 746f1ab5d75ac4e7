//! HTTP email dispatcher

use async_trait::async_trait;
use reqwest::Client;

use crate::composer::EmailDispatchRequest;
use crate::config::EmailConfig;

use super::types::{DispatchError, DispatchOutcome, DispatchResult, EmailDispatcher};

/// Longest response body kept for logs
const MAX_LOGGED_BODY: usize = 512;

/// Posts requests as JSON to the configured email endpoint
#[derive(Clone)]
pub struct HttpEmailDispatcher {
    client: Client,
    endpoint: String,
    origin: String,
}

impl HttpEmailDispatcher {
    pub fn new(config: &EmailConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &EmailConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            origin: config.origin.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailDispatcher for HttpEmailDispatcher {
    async fn send(&self, request: &EmailDispatchRequest) -> DispatchResult<DispatchOutcome> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("origin", &self.origin)
            .json(request)
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        let status = response.status();
        let mut body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    status = status.as_u16(),
                    error = %e,
                    "Failed to read email endpoint response body"
                );
                String::new()
            }
        };
        truncate_body(&mut body);

        if status.is_success() {
            Ok(DispatchOutcome {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(DispatchError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

fn truncate_body(body: &mut String) {
    if body.len() > MAX_LOGGED_BODY {
        let mut cut = MAX_LOGGED_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_body_short() {
        let mut body = "ok".to_string();
        truncate_body(&mut body);
        assert_eq!(body, "ok");
    }

    #[test]
    fn test_truncate_body_respects_char_boundary() {
        let mut body = "é".repeat(MAX_LOGGED_BODY);
        truncate_body(&mut body);
        assert!(body.len() <= MAX_LOGGED_BODY);
        assert!(body.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_uses_configured_endpoint() {
        let config = EmailConfig {
            endpoint: "http://localhost:9999/send".to_string(),
            ..Default::default()
        };
        let dispatcher = HttpEmailDispatcher::new(&config);
        assert_eq!(dispatcher.endpoint(), "http://localhost:9999/send");
        assert_eq!(dispatcher.name(), "http");
    }
}
