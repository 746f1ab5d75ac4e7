//! Template classification types

use std::fmt;

use serde::Serialize;

/// Lifecycle actions that select their own template slug
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Shipped,
    Refunded,
    ItemRefund,
}

impl OrderAction {
    /// Parse the wire value. Unknown actions return `None` and fall
    /// through to the workflow status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "shipped" => Some(OrderAction::Shipped),
            "refunded" => Some(OrderAction::Refunded),
            "itemRefund" => Some(OrderAction::ItemRefund),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderAction::Shipped => "shipped",
            OrderAction::Refunded => "refunded",
            OrderAction::ItemRefund => "itemRefund",
        }
    }
}

/// Hierarchical template name (`orders/<name>`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateSlug(String);

impl TemplateSlug {
    pub const PREFIX: &'static str = "orders/";

    /// Slug for an action, or `orders/<status>` when there is none
    pub fn derive(action: Option<OrderAction>, workflow_status: &str) -> Self {
        let name = match action {
            Some(action) => action.as_str(),
            None => workflow_status,
        };
        TemplateSlug(format!("{}{}", Self::PREFIX, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outbound templates known to the email endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmailTemplate {
    OrderShipped,
    OrderConfirmed,
}

impl EmailTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailTemplate::OrderShipped => "orderShipped",
            EmailTemplate::OrderConfirmed => "orderConfirmed",
        }
    }
}

impl fmt::Display for EmailTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying an order event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDecision {
    /// Informational slug derived from the action or workflow status
    pub slug: TemplateSlug,
    /// Template to send, `None` when the event produces no email
    pub template: Option<EmailTemplate>,
}

impl TemplateDecision {
    /// Identifier sent to the endpoint; empty when no email applies
    pub fn template_id(&self) -> &'static str {
        self.template.map(|t| t.as_str()).unwrap_or("")
    }

    pub fn should_dispatch(&self) -> bool {
        self.template.is_some()
    }
}
