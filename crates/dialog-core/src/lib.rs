//! # dialog-core
//!
//! Protocol layer for slot-filling conversational bots: the request the
//! platform sends on every turn, the three dialog actions it understands in
//! return, and an intent registry that routes each request to its handler.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     IntentRegistry                          │
//! │  ┌──────────────────┐  ┌────────────────┐  ┌─────────────┐  │
//! │  │ Conversation     │  │ IntentHandler  │  │ Dialog      │  │
//! │  │ Request          │──│ (by name)      │──│ Response    │  │
//! │  └──────────────────┘  └────────────────┘  └─────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers never build raw JSON. They return one of the typed dialog actions
//! (`ElicitSlot`, `Delegate`, `Close`) through the builders in [`response`].

pub mod error;
pub mod intent;
pub mod message;
pub mod request;
pub mod response;

pub use error::{DialogError, Result};
pub use intent::{IntentHandler, IntentRegistry};
pub use message::{ContentType, Message};
pub use request::{ConversationRequest, CurrentIntent, InvocationSource, SessionAttributes, Slots};
pub use response::{DialogAction, DialogResponse, FulfillmentState, ValidationResult};
