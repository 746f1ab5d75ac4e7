// Infrastructure
pub mod config;
pub mod error;
pub mod metrics;
pub mod telemetry;

// Domain layer (business logic)
pub mod composer;
pub mod dispatch;
pub mod order;
pub mod template;

// Application layer
pub mod api;
pub mod server;
pub mod triggers;
