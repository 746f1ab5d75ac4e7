//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use order_email_service::composer::{EmailDispatchRequest, OrderEmailComposer};
use order_email_service::config::EmailConfig;
use order_email_service::dispatch::{
    DispatchError, DispatchOutcome, DispatchResult, EmailDispatcher,
};

pub const IMAGE_BASE: &str = "https://images.test/";

/// Email config pointing at test values
pub fn email_config(endpoint: &str) -> EmailConfig {
    EmailConfig {
        endpoint: endpoint.to_string(),
        origin: "https://shop.test".to_string(),
        sender_email: "orders@shop.test".to_string(),
        sender_name: "Test Shop".to_string(),
        product_image_base_url: IMAGE_BASE.to_string(),
    }
}

/// A complete, valid compose payload
pub fn full_input(action: Option<&str>, status: &str, tracking: Value) -> Value {
    let mut input = json!({
        "fromShop": { "_id": "shop-1", "name": "Test Shop" },
        "to": "jane@example.com",
        "language": "en",
        "dataForEmail": {
            "order": {
                "email": "jane@example.com",
                "referenceId": "ORD-1001",
                "updatedAt": "2024-05-02T09:30:00.000Z",
                "workflow": { "status": status },
                "shipping": [{
                    "address": {
                        "fullName": "Jane Mary Doe",
                        "address1": "12 Harbour St",
                        "city": "Sydney",
                        "region": "NSW",
                        "postal": "2000",
                        "phone": "+61 400 000 000"
                    },
                    "shipmentMethod": { "label": "Standard Post" },
                    "items": [
                        {
                            "title": "Linen Shirt",
                            "price": { "amount": 19.5 },
                            "metafields": [
                                { "key": "productImage", "value": "shirt-old.jpg" },
                                { "key": "size", "value": "M" },
                                { "key": "productImage", "value": "shirt.jpg" }
                            ]
                        },
                        {
                            "title": "Gift Card",
                            "price": { "amount": 50 },
                            "metafields": []
                        }
                    ],
                    "invoice": { "shipping": 9.95, "subtotal": 69.5, "total": 74.45 },
                    "tracking": tracking
                }],
                "payments": [{
                    "address": {
                        "address1": "1 Billing Rd",
                        "city": "Melbourne",
                        "region": "",
                        "postal": "3000"
                    },
                    "displayName": "Visa 4242"
                }],
                "discounts": [{ "amount": 5 }]
            }
        }
    });

    if let Some(action) = action {
        input["action"] = json!(action);
    }
    input
}

/// Dispatcher recording every request it receives
#[derive(Default)]
pub struct RecordingDispatcher {
    sent: Mutex<Vec<EmailDispatchRequest>>,
}

impl RecordingDispatcher {
    pub fn sent(&self) -> Vec<EmailDispatchRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailDispatcher for RecordingDispatcher {
    async fn send(&self, request: &EmailDispatchRequest) -> DispatchResult<DispatchOutcome> {
        self.sent.lock().unwrap().push(request.clone());
        Ok(DispatchOutcome {
            status: 200,
            body: "queued".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Dispatcher that always fails
pub struct FailingDispatcher;

#[async_trait]
impl EmailDispatcher for FailingDispatcher {
    async fn send(&self, _request: &EmailDispatchRequest) -> DispatchResult<DispatchOutcome> {
        Err(DispatchError::Transport("connection refused".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

pub fn recording_composer() -> (OrderEmailComposer, Arc<RecordingDispatcher>) {
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let composer = OrderEmailComposer::new(&email_config("http://unused.test"), dispatcher.clone());
    (composer, dispatcher)
}
