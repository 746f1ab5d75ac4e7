//! HTTP order email trigger
//!
//! Callers POST the order event payload; the response reports the chosen
//! template and whether a dispatch was started.

mod handlers;
mod models;

pub use handlers::send_order_email;
pub use models::SendOrderEmailResponse;
