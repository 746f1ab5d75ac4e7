//! Template selection for order events

use super::types::{EmailTemplate, OrderAction, TemplateDecision, TemplateSlug};

/// Workflow status that, together with tracking, means the order has shipped
pub const PROCESSING_STATUS: &str = "processing";

/// Slug of a newly placed order
pub const NEW_ORDER_SLUG: &str = "orders/new";

/// Decide which template (if any) applies to an order event.
///
/// The shipped email is gated on the *current* workflow status and the
/// presence of tracking, never on `action`. `action` only feeds the slug,
/// which in turn only matters for the `orders/new` check.
pub fn classify(action: Option<&str>, workflow_status: &str, has_tracking: bool) -> TemplateDecision {
    let slug = TemplateSlug::derive(action.and_then(OrderAction::parse), workflow_status);

    let template = if workflow_status == PROCESSING_STATUS && has_tracking {
        Some(EmailTemplate::OrderShipped)
    } else if slug.as_str() == NEW_ORDER_SLUG {
        Some(EmailTemplate::OrderConfirmed)
    } else {
        None
    };

    TemplateDecision { slug, template }
}
