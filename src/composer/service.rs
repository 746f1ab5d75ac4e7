use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::EmailConfig;
use crate::dispatch::EmailDispatcher;
use crate::metrics::{ComposeMetrics, DispatchMetrics};
use crate::order::ComposeInput;
use crate::template::{classify, TemplateDecision};

use super::fields::extract_fields;
use super::request::{Contact, EmailDispatchRequest};
use super::types::{ComposeError, ComposeResult, ComposerStats, ComposerStatsSnapshot};

/// A fully assembled email, not yet dispatched
#[derive(Debug, Clone)]
pub struct PreparedEmail {
    pub decision: TemplateDecision,
    pub request: EmailDispatchRequest,
}

/// Result of a compose call
#[derive(Debug)]
pub struct ComposeOutcome {
    /// Identifier used to correlate dispatch logs
    pub request_id: Uuid,
    pub decision: TemplateDecision,
    pub request: EmailDispatchRequest,
    /// Background dispatch task, `None` when no email applies.
    /// Dropping it detaches the task.
    pub dispatch: Option<JoinHandle<()>>,
}

impl ComposeOutcome {
    pub fn dispatched(&self) -> bool {
        self.dispatch.is_some()
    }
}

/// Turns order events into email dispatch requests
pub struct OrderEmailComposer {
    sender: Contact,
    product_image_base_url: String,
    dispatcher: Arc<dyn EmailDispatcher>,
    stats: Arc<ComposerStats>,
}

impl OrderEmailComposer {
    pub fn new(config: &EmailConfig, dispatcher: Arc<dyn EmailDispatcher>) -> Self {
        Self {
            sender: Contact::sender(config),
            product_image_base_url: config.product_image_base_url.clone(),
            dispatcher,
            stats: Arc::new(ComposerStats::default()),
        }
    }

    /// Get composer statistics
    pub fn stats(&self) -> ComposerStatsSnapshot {
        self.stats.snapshot()
    }

    /// Classify and extract without any side effect
    pub fn prepare(&self, input: &ComposeInput) -> ComposeResult<PreparedEmail> {
        let order = &input.data_for_email.order;

        let decision = classify(
            input.action.as_deref(),
            &order.workflow.status,
            order.tracking().is_some(),
        );

        let dynamic_data = extract_fields(order, &self.product_image_base_url)?;

        let to = Contact::new(&order.email, &dynamic_data.full_name);
        let request = EmailDispatchRequest::new(
            decision.template_id(),
            to,
            self.sender.clone(),
            dynamic_data,
        );

        Ok(PreparedEmail { decision, request })
    }

    /// Validate a raw payload, compose it and start dispatch if a template applies
    pub fn compose(&self, raw: serde_json::Value) -> ComposeResult<ComposeOutcome> {
        let input = ComposeInput::from_value(raw).inspect_err(|e| self.record_rejected(e))?;
        self.compose_input(&input)
    }

    /// Compose an already validated input.
    ///
    /// Must be called within a Tokio runtime when a template applies, since
    /// the dispatch runs as a spawned task.
    #[tracing::instrument(
        name = "composer.compose",
        skip(self, input),
        fields(
            order_number = %input.data_for_email.order.reference_id,
            status = %input.data_for_email.order.workflow.status,
            action = ?input.action,
        )
    )]
    pub fn compose_input(&self, input: &ComposeInput) -> ComposeResult<ComposeOutcome> {
        let request_id = Uuid::new_v4();
        let prepared = self.prepare(input).inspect_err(|e| self.record_rejected(e))?;
        let PreparedEmail { decision, request } = prepared;

        ComposeMetrics::record_composed(decision.template_id());

        if !decision.should_dispatch() {
            self.stats.skipped.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(
                request_id = %request_id,
                slug = %decision.slug,
                "No template applies, skipping dispatch"
            );
            return Ok(ComposeOutcome {
                request_id,
                decision,
                request,
                dispatch: None,
            });
        }

        self.stats.composed.fetch_add(1, Ordering::Relaxed);
        tracing::info!(
            request_id = %request_id,
            slug = %decision.slug,
            template = %decision.template_id(),
            "Order email composed"
        );

        let handle = self.spawn_dispatch(request_id, request.clone());

        Ok(ComposeOutcome {
            request_id,
            decision,
            request,
            dispatch: Some(handle),
        })
    }

    fn spawn_dispatch(&self, request_id: Uuid, request: EmailDispatchRequest) -> JoinHandle<()> {
        let dispatcher = Arc::clone(&self.dispatcher);
        let stats = Arc::clone(&self.stats);
        let span = tracing::info_span!(
            "composer.dispatch",
            request_id = %request_id,
            template = %request.template,
            dispatcher = dispatcher.name(),
        );

        tokio::spawn(
            async move {
                let started = Instant::now();
                match dispatcher.send(&request).await {
                    Ok(outcome) => {
                        DispatchMetrics::record_success(started.elapsed());
                        stats.dispatched.fetch_add(1, Ordering::Relaxed);
                        tracing::info!(
                            status = outcome.status,
                            body = %outcome.body,
                            "Order email dispatched"
                        );
                    }
                    Err(e) => {
                        DispatchMetrics::record_failure(started.elapsed());
                        stats.dispatch_failed.fetch_add(1, Ordering::Relaxed);
                        tracing::error!(error = %e, "Order email dispatch failed");
                    }
                }
            }
            .instrument(span),
        )
    }

    fn record_rejected(&self, error: &ComposeError) {
        self.stats.rejected.fetch_add(1, Ordering::Relaxed);
        ComposeMetrics::record_rejected(error.reason());
        tracing::warn!(error = %error, "Order email input rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{DispatchOutcome, DispatchResult};
    use async_trait::async_trait;
    use serde_json::json;

    struct NoopDispatcher;

    #[async_trait]
    impl EmailDispatcher for NoopDispatcher {
        async fn send(&self, _request: &EmailDispatchRequest) -> DispatchResult<DispatchOutcome> {
            Ok(DispatchOutcome {
                status: 200,
                body: String::new(),
            })
        }

        fn name(&self) -> &'static str {
            "noop"
        }
    }

    fn composer() -> OrderEmailComposer {
        OrderEmailComposer::new(&EmailConfig::default(), Arc::new(NoopDispatcher))
    }

    fn input(status: &str) -> ComposeInput {
        ComposeInput::from_value(json!({
            "fromShop": {},
            "to": "jane@example.com",
            "dataForEmail": {
                "order": {
                    "email": "jane@example.com",
                    "referenceId": "R-7",
                    "updatedAt": "2024-03-01",
                    "workflow": { "status": status },
                    "shipping": [{
                        "address": { "fullName": "Jane Doe" },
                        "invoice": { "shipping": 0, "subtotal": 1, "total": 1 }
                    }],
                    "payments": [{ "address": {}, "displayName": "Cash" }]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_prepare_assembles_contacts() {
        let prepared = composer().prepare(&input("new")).unwrap();
        let vars = &prepared.request.template_vars;

        assert_eq!(prepared.request.template, "orderConfirmed");
        assert_eq!(vars.to, Contact::new("jane@example.com", "Jane Doe"));
        assert_eq!(vars.from, Contact::new("orders@askbella.com.au", "askbella"));
        assert_eq!(vars.reply_to, vars.from);
    }

    #[test]
    fn test_no_template_does_not_spawn() {
        // Runs outside a runtime: a spawn here would panic
        let composer = composer();
        let outcome = composer.compose_input(&input("canceled")).unwrap();

        assert!(!outcome.dispatched());
        assert_eq!(outcome.request.template, "");
        assert_eq!(composer.stats().skipped, 1);
        assert_eq!(composer.stats().composed, 0);
    }

    #[tokio::test]
    async fn test_dispatch_counts_success() {
        let composer = composer();
        let outcome = composer.compose_input(&input("new")).unwrap();

        outcome.dispatch.expect("dispatch started").await.unwrap();

        let stats = composer.stats();
        assert_eq!(stats.composed, 1);
        assert_eq!(stats.dispatched, 1);
        assert_eq!(stats.dispatch_failed, 0);
    }

    #[test]
    fn test_rejected_input_counted() {
        let composer = composer();
        let err = composer.compose(json!({ "to": "x" })).unwrap_err();

        assert_eq!(err.reason(), "validation");
        assert_eq!(composer.stats().rejected, 1);
    }
}
