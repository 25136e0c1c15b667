//! # portfolio-advisor
//!
//! Dialog fulfillment for a robo-advisor bot. The bot collects four slots
//! (first name, age, investment amount, risk level) and answers with a fixed
//! bond/equity split.
//!
//! ## Dialog
//!
//! ```text
//! ┌──────────────────┐  invalid slot   ┌──────────────────────────────┐
//! │  DialogCodeHook  │────────────────▶│ ElicitSlot (slot cleared)    │
//! │  validate turn   │                 └──────────────────────────────┘
//! │                  │  all valid      ┌──────────────────────────────┐
//! │                  │────────────────▶│ Delegate (platform continues)│
//! └──────────────────┘                 └──────────────────────────────┘
//! ┌──────────────────┐                 ┌──────────────────────────────┐
//! │  any other source│────────────────▶│ Close (Fulfilled + split)    │
//! └──────────────────┘                 └──────────────────────────────┘
//! ```
//!
//! ## Recommendation Table
//!
//! ```text
//! None      │ ████████████████████ bonds 100%
//! Very Low  │ ████████████████░░░░ bonds  80%  equities 20%
//! Low       │ ████████████░░░░░░░░ bonds  60%  equities 40%
//! Medium    │ ████████░░░░░░░░░░░░ bonds  40%  equities 60%
//! High      │ ████░░░░░░░░░░░░░░░░ bonds  20%  equities 80%
//! otherwise │ ░░░░░░░░░░░░░░░░░░░░             equities 100%
//! ```

use std::sync::LazyLock;

use dialog_core::{ConversationRequest, DialogError, DialogResponse, IntentRegistry, Result};

pub mod coercion;
pub mod intents;
pub mod model;
pub mod recommendation;
pub mod validation;

pub use coercion::{coerce_int, Coerced};
pub use intents::{RecommendPortfolioHandler, RECOMMEND_PORTFOLIO};
pub use model::{Allocation, PortfolioSlots, RiskLevel};
pub use recommendation::recommend;
pub use validation::{validate, ValidationRules};

static REGISTRY: LazyLock<IntentRegistry> = LazyLock::new(registry);

/// Registry with every intent this bot serves
pub fn registry() -> IntentRegistry {
    let mut registry = IntentRegistry::new();
    registry.register(RecommendPortfolioHandler::new());
    registry
}

/// Entry point: answer one dialog turn
pub fn handle(request: ConversationRequest) -> Result<DialogResponse> {
    REGISTRY.dispatch(request)
}

/// Entry point for hosts that pass the raw event
pub fn handle_value(event: serde_json::Value) -> Result<serde_json::Value> {
    let request: ConversationRequest =
        serde_json::from_value(event).map_err(DialogError::MalformedRequest)?;
    let response = handle(request)?;
    Ok(serde_json::to_value(response)?)
}
