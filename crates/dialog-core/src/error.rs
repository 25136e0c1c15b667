//! Error Types

use thiserror::Error;

/// Result type alias for dialog operations
pub type Result<T> = std::result::Result<T, DialogError>;

/// Failures that abort an invocation.
///
/// A slot that fails validation is not an error: it is answered with an
/// `ElicitSlot` re-prompt. Everything here means no response is produced.
#[derive(Error, Debug)]
pub enum DialogError {
    /// No handler is registered for the requested intent
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    /// Raw event did not match the request shape
    #[error("Malformed request: {0}")]
    MalformedRequest(#[source] serde_json::Error),

    /// Response could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DialogError {
    /// Whether the failure was caused by the request rather than the handler
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedIntent(_) | Self::MalformedRequest(_)
        )
    }

    /// Stable machine-readable code for hosts
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedIntent(_) => "UNSUPPORTED_INTENT",
            Self::MalformedRequest(_) => "MALFORMED_REQUEST",
            Self::Serialization(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedIntent(name) => {
                format!("The bot does not know how to handle '{name}'.")
            }
            Self::MalformedRequest(_) => "The request could not be understood.".into(),
            Self::Serialization(_) => "An unexpected error occurred.".into(),
        }
    }
}
