//! Application State

use std::sync::Arc;

use dialog_core::IntentRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Intent handlers the bot serves
    pub registry: Arc<IntentRegistry>,
}

impl AppState {
    pub fn new(registry: IntentRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
