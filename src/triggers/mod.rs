mod http;

pub use http::{send_order_email, SendOrderEmailResponse};
