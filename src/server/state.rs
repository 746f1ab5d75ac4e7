use std::sync::Arc;
use std::time::Instant;

use crate::composer::OrderEmailComposer;
use crate::config::Settings;
use crate::dispatch::{EmailDispatcher, HttpEmailDispatcher};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub composer: Arc<OrderEmailComposer>,
    pub started_at: Instant,
}

impl AppState {
    /// State dispatching through the configured HTTP endpoint
    pub fn new(settings: Settings) -> Self {
        let dispatcher = Arc::new(HttpEmailDispatcher::new(&settings.email));
        tracing::info!(endpoint = %dispatcher.endpoint(), "HTTP email dispatcher ready");
        Self::with_dispatcher(settings, dispatcher)
    }

    pub fn with_dispatcher(settings: Settings, dispatcher: Arc<dyn EmailDispatcher>) -> Self {
        let composer = Arc::new(OrderEmailComposer::new(&settings.email, dispatcher));

        Self {
            settings: Arc::new(settings),
            composer,
            started_at: Instant::now(),
        }
    }
}
