//! Intent Handlers
//!
//! Domain handlers that implement `dialog_core::IntentHandler`.

mod recommend_portfolio;

pub use recommend_portfolio::{RecommendPortfolioHandler, INTENT_NAME as RECOMMEND_PORTFOLIO};
