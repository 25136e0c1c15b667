//! Intent Dispatch
//!
//! Handlers are registered under the intent name they serve. The registry
//! routes each request by `currentIntent.name` and refuses anything it does
//! not know.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DialogError, Result};
use crate::request::ConversationRequest;
use crate::response::DialogResponse;

/// Business logic for one intent - implement to add a new intent
pub trait IntentHandler: Send + Sync {
    /// Intent name this handler answers to
    fn intent_name(&self) -> &str;

    /// Produce the dialog action for one turn
    fn handle(&self, request: ConversationRequest) -> Result<DialogResponse>;
}

/// Registry for available intent handlers
pub struct IntentRegistry {
    handlers: HashMap<String, Arc<dyn IntentHandler>>,
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a new handler, replacing any previous one for the same intent
    pub fn register<H: IntentHandler + 'static>(&mut self, handler: H) {
        self.handlers
            .insert(handler.intent_name().to_owned(), Arc::new(handler));
    }

    /// Register a shared handler
    pub fn register_boxed(&mut self, handler: Arc<dyn IntentHandler>) {
        self.handlers
            .insert(handler.intent_name().to_owned(), handler);
    }

    /// Get a handler by intent name
    pub fn get(&self, name: &str) -> Option<Arc<dyn IntentHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Route a request to its intent handler
    pub fn dispatch(&self, request: ConversationRequest) -> Result<DialogResponse> {
        tracing::debug!(
            intent = %request.intent_name(),
            source = %request.invocation_source,
            user_id = request.user_id.as_deref().unwrap_or("-"),
            bot = request.bot_name().unwrap_or("-"),
            "Dispatching dialog request"
        );

        let Some(handler) = self.handlers.get(request.intent_name()) else {
            tracing::warn!(intent = %request.intent_name(), "Unsupported intent");
            return Err(DialogError::UnsupportedIntent(request.current_intent.name));
        };

        handler.handle(request)
    }

    /// Registered intent names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
