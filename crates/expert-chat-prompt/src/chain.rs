//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](expert_chat_core::template::IntoPrompt).
//!
//! ```text
//! ┌────────────────┐    IntoPrompt     ┌────────────────┐
//! │ StaticFragment │ ─────────────────►│ Vec<Message>   │
//! ├────────────────┤                   ├────────────────┤
//! │ StaticFragment │ ─────────────────►│ Vec<Message>   │
//! └────────────────┘                   └────────────────┘
//!            ▲                                  │
//!            └──────── PromptChain::build() ◄───┘
//! ```
//!
//! ```rust
//! use expert_chat_prompt::chain::PromptChain;
//! use expert_chat_prompt::fragments::StaticFragment;
//! use expert_chat_core::generic::{GenericMessage, GenericRole};
//!
//! let messages: Vec<GenericMessage> = PromptChain::new()
//!     .with(StaticFragment::new("You are a helpful bot.", GenericRole::System))
//!     .with(StaticFragment::new("Convert the text to uppercase.", GenericRole::User))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! ```
use expert_chat_core::template::IntoPrompt;

/// Accumulates messages produced by [`IntoPrompt`] implementors, in order.
///
/// The only way to obtain the result is [`Self::build`].
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
