//! Bot Messages
//!
//! Text shown to the user by the platform, attached to `ElicitSlot` and
//! `Close` actions and to failed validation results.

use serde::{Deserialize, Serialize};

/// Format of a message's content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    /// Plain text, the only format this bot emits
    PlainText,
    /// Speech Synthesis Markup Language
    #[serde(rename = "SSML")]
    Ssml,
    /// Platform-side composite message group
    CustomPayload,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlainText => write!(f, "PlainText"),
            Self::Ssml => write!(f, "SSML"),
            Self::CustomPayload => write!(f, "CustomPayload"),
        }
    }
}

/// A message the platform relays to the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    /// Create a plain text message
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}
