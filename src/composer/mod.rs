//! Order email composition.
//!
//! This module provides:
//! - Field extraction turning an order into flat template variables
//! - Assembly of the outbound [`EmailDispatchRequest`]
//! - [`OrderEmailComposer`], which ties classification, extraction and
//!   background dispatch together
//!
//! # Example
//!
//! ```ignore
//! let composer = OrderEmailComposer::new(&settings.email, dispatcher);
//!
//! let outcome = composer.compose(payload)?;
//! if outcome.dispatched() {
//!     tracing::info!(template = %outcome.request.template, "sent");
//! }
//! ```

mod fields;
mod request;
mod service;
mod types;

pub use fields::{
    extract_fields, first_name, format_money, product_image_url, DynamicData, ProductLine,
    PRODUCT_IMAGE_KEY,
};
pub use request::{Contact, EmailDispatchRequest, TemplateVars};
pub use service::{ComposeOutcome, OrderEmailComposer, PreparedEmail};
pub use types::{ComposeError, ComposeResult, ComposerStats, ComposerStatsSnapshot};
