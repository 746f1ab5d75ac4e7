//! Email template selection.
//!
//! An order event is first mapped to a slug (`orders/<name>`) from its
//! action or workflow status, then to one of the concrete templates the
//! email endpoint renders:
//!
//! | condition | template |
//! |-----------|----------|
//! | status `processing` and tracking present | `orderShipped` |
//! | slug `orders/new` | `orderConfirmed` |
//! | anything else | none, no email is sent |

mod classify;
mod types;

pub use classify::{classify, NEW_ORDER_SLUG, PROCESSING_STATUS};
pub use types::{EmailTemplate, OrderAction, TemplateDecision, TemplateSlug};
