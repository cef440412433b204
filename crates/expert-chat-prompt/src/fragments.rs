//! A minimal fragment that injects a fixed string into the prompt.
//!
//! ```rust
//! use expert_chat_prompt::fragments::StaticFragment;
//! use expert_chat_core::generic::GenericRole;
//!
//! let sys_msg = StaticFragment::new(
//!     "You are a multilingual proof-reading engine.",
//!     GenericRole::System,
//! );
//! ```
//!
//! The `From<&str>` impl defaults to `GenericRole::System` since system
//! instructions are the most common static fragments.

use expert_chat_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

/// A borrowed string bundled with an LLM chat role.
pub struct StaticFragment<'a>((&'a str, GenericRole));

/// Shorthand for `StaticFragment::new(value, GenericRole::System)`.
impl<'a> From<&'a str> for StaticFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self((value, GenericRole::System))
    }
}

impl<'a> StaticFragment<'a> {
    /// Create a new fragment with explicit role.
    pub fn new(value: &'a str, role: GenericRole) -> Self {
        Self((value, role))
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(self.0.0.to_string(), self.0.1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_defaults_to_system() {
        let messages = StaticFragment::from("be brief").into_prompt();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, GenericRole::System);
        assert_eq!(messages[0].text(), Some("be brief"));
    }

    #[test]
    fn explicit_role_is_kept() {
        let messages = StaticFragment::new("  spaced  ", GenericRole::User).into_prompt();
        assert_eq!(messages[0].role, GenericRole::User);
        assert_eq!(messages[0].text(), Some("  spaced  "));
    }
}
