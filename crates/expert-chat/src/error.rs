//! Errors a user of the page can run into.

use expert_chat_core::error::ChatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpertChatError {
    /// A setting is missing or malformed. Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The submitted form cannot be sent as is.
    #[error("{0}")]
    Validation(String),

    /// The completion call failed for whatever reason.
    #[error("the LLM request failed: {0}")]
    Service(#[from] ChatError),
}

