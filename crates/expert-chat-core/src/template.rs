//! Turning values into an ordered list of chat messages.
//!
//! [`IntoPrompt`] is the single seam between prompt composition and a
//! backend: `expert-chat-prompt`'s fragments implement it and its
//! `PromptChain` concatenates them in order.

/// Converts a value into a series of chat messages.
///
/// The `Message` type is an associated type so a back-end can require its
/// own richer struct without dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

