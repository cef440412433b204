//! Model identifiers used throughout the **expert-chat** workspace.
//!
//! Application code picks an enum variant instead of typing literal strings
//! such as `"gpt-4o-mini"`; each provider crate maps the variants onto its own
//! naming scheme.
//!
//! ```rust
//! use expert_chat_core::model::{Model, OpenAiModel};
//! assert_eq!(Model::from(OpenAiModel::Gpt4oMini),
//!            Model::OpenAi(OpenAiModel::Gpt4oMini));
//! ```

/// Universal identifier for an LLM model.
///
/// * `OpenAi` – models with a dedicated variant.
/// * `Custom` – any provider model name not covered by an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in OpenAI models (chat completion API).
    OpenAi(OpenAiModel),
    /// Raw model ID passed through to the provider unchanged.
    Custom(&'static str),
}

/// Models with first-class support in the OpenAI back-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt4oMini,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
