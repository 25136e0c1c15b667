//! Conversation Requests
//!
//! The event the platform sends on every dialog turn. Only
//! `invocationSource`, `currentIntent` and `sessionAttributes` drive
//! behaviour; the rest of the envelope is kept for log context.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Slot name -> value. A `None` value is a slot the user has not filled yet.
pub type Slots = BTreeMap<String, Option<String>>;

/// Opaque key-value state the platform persists between turns
pub type SessionAttributes = BTreeMap<String, String>;

/// Why the platform invoked the handler
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationSource {
    /// Slots are still being collected; validate what we have
    DialogCodeHook,
    /// All slots are filled; produce the final answer
    FulfillmentCodeHook,
    /// Anything else the platform may send, kept verbatim
    #[serde(untagged)]
    Other(String),
}

impl InvocationSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::DialogCodeHook => "DialogCodeHook",
            Self::FulfillmentCodeHook => "FulfillmentCodeHook",
            Self::Other(source) => source,
        }
    }
}

impl std::fmt::Display for InvocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bot that produced the request
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BotInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// The intent the user is currently pursuing
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    /// Intent name, used for dispatch
    pub name: String,

    /// Slot values collected so far
    #[serde(default)]
    pub slots: Slots,

    /// `None`, `Confirmed` or `Denied`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,

    /// Per-slot resolution details, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_details: Option<serde_json::Value>,
}

impl CurrentIntent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Slots::new(),
            confirmation_status: None,
            slot_details: None,
        }
    }

    /// Set a slot value (builder style)
    pub fn with_slot(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        self.slots.insert(name.into(), value.map(str::to_owned));
        self
    }

    /// Value of a slot, `None` if missing or unfilled
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(Option::as_deref)
    }
}

/// A single dialog turn from the platform
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRequest {
    pub invocation_source: InvocationSource,

    pub current_intent: CurrentIntent,

    /// Forwarded unchanged into every response, `null` included
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,

    /// `Text` or `Voice`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_attributes: Option<BTreeMap<String, String>>,
}

impl ConversationRequest {
    /// Create a request with no session attributes or envelope metadata
    pub fn new(invocation_source: InvocationSource, current_intent: CurrentIntent) -> Self {
        Self {
            invocation_source,
            current_intent,
            session_attributes: None,
            message_version: None,
            user_id: None,
            input_transcript: None,
            output_dialog_mode: None,
            bot: None,
            request_attributes: None,
        }
    }

    pub fn with_session_attributes(mut self, attributes: SessionAttributes) -> Self {
        self.session_attributes = Some(attributes);
        self
    }

    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    pub fn is_dialog_code_hook(&self) -> bool {
        self.invocation_source == InvocationSource::DialogCodeHook
    }

    pub fn bot_name(&self) -> Option<&str> {
        self.bot.as_ref().map(|b| b.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_request() {
        let request: ConversationRequest = serde_json::from_value(json!({
            "invocationSource": "DialogCodeHook",
            "sessionAttributes": {"visits": "2"},
            "currentIntent": {
                "name": "RecommendPortfolio",
                "slots": {"firstName": "Ana", "age": null}
            }
        }))
        .unwrap();

        assert!(request.is_dialog_code_hook());
        assert_eq!(request.intent_name(), "RecommendPortfolio");
        assert_eq!(request.current_intent.slot("firstName"), Some("Ana"));
        assert_eq!(request.current_intent.slot("age"), None);
        assert_eq!(request.current_intent.slot("riskLevel"), None);
        assert_eq!(
            request.session_attributes.unwrap().get("visits").map(String::as_str),
            Some("2")
        );
    }

    #[test]
    fn test_parse_full_envelope() {
        let request: ConversationRequest = serde_json::from_value(json!({
            "messageVersion": "1.0",
            "invocationSource": "FulfillmentCodeHook",
            "userId": "user-42",
            "inputTranscript": "medium",
            "outputDialogMode": "Text",
            "bot": {"name": "RoboAdvisor", "alias": "$LATEST", "version": "$LATEST"},
            "sessionAttributes": null,
            "requestAttributes": null,
            "currentIntent": {
                "name": "RecommendPortfolio",
                "slots": {"riskLevel": "Medium"},
                "slotDetails": {"riskLevel": {"resolutions": [], "originalValue": "medium"}},
                "confirmationStatus": "None"
            }
        }))
        .unwrap();

        assert_eq!(request.invocation_source, InvocationSource::FulfillmentCodeHook);
        assert_eq!(request.bot_name(), Some("RoboAdvisor"));
        assert_eq!(request.user_id.as_deref(), Some("user-42"));
        assert!(request.session_attributes.is_none());
        assert!(request.current_intent.slot_details.is_some());
    }

    #[test]
    fn test_unknown_invocation_source_kept_verbatim() {
        let source: InvocationSource = serde_json::from_value(json!("SomethingNew")).unwrap();
        assert_eq!(source, InvocationSource::Other("SomethingNew".into()));
        assert_eq!(source.to_string(), "SomethingNew");
        assert_eq!(serde_json::to_value(&source).unwrap(), json!("SomethingNew"));
    }

    #[test]
    fn test_missing_current_intent_rejected() {
        let result = serde_json::from_value::<ConversationRequest>(json!({
            "invocationSource": "DialogCodeHook"
        }));
        assert!(result.is_err());
    }
}
