//! Dialog Responses
//!
//! The three dialog actions the platform understands, plus the
//! validation-result record handlers use to decide between them.
//! Builders here are pure assembly; no business rules live in this module.

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::request::{SessionAttributes, Slots};

/// Outcome reported with a `Close` action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// What the platform should do next
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum DialogAction {
    /// Re-prompt the user for one slot
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: Message,
    },
    /// Let the platform pick the next step itself
    Delegate { slots: Slots },
    /// End the conversation
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

impl DialogAction {
    /// Wire name of the action
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ElicitSlot { .. } => "ElicitSlot",
            Self::Delegate { .. } => "Delegate",
            Self::Close { .. } => "Close",
        }
    }
}

/// Full response returned to the platform
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    /// Echo of the request's session attributes
    pub session_attributes: Option<SessionAttributes>,

    pub dialog_action: DialogAction,
}

/// Ask the user again for `slot_to_elicit`
pub fn elicit_slot(
    session_attributes: Option<SessionAttributes>,
    intent_name: impl Into<String>,
    slots: Slots,
    slot_to_elicit: impl Into<String>,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message,
        },
    }
}

/// Hand control back to the platform
pub fn delegate(session_attributes: Option<SessionAttributes>, slots: Slots) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}

/// Terminate the conversation
pub fn close(
    session_attributes: Option<SessionAttributes>,
    fulfillment_state: FulfillmentState,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}

/// Verdict of a slot validation pass
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,

    /// Slot that failed, `null` when valid
    pub violated_slot: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

impl ValidationResult {
    /// Generic builder; the message is omitted when no content is given
    pub fn new(
        is_valid: bool,
        violated_slot: Option<String>,
        message_content: Option<String>,
    ) -> Self {
        Self {
            is_valid,
            violated_slot,
            message: message_content.map(Message::plain_text),
        }
    }

    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            violated_slot: None,
            message: None,
        }
    }

    pub fn invalid(violated_slot: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(false, Some(violated_slot.into()), Some(content.into()))
    }
}
