//! # `expert-chat` – ask an expert persona
//!
//! A single HTML form: pick a cooking or travel expert, type a question,
//! and the answer of an OpenAI chat model is rendered below the form.
//!
//! | Crate                    | What it provides                                                       |
//! |--------------------------|------------------------------------------------------------------------|
//! | **`expert-chat-core`**   | Provider-agnostic messages, models, errors and the `ChatClient`        |
//! | **`expert-chat-prompt`** | `PromptChain`, `StaticFragment` and the expert personas                |
//! | **`expert-chat-openai`** | HTTP adapter for OpenAI's `chat/completions`                           |
//! | **`expert-chat`**        | Settings, the [`Consultant`], the submit flow and the axum page        |
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use expert_chat::{Consultant, ChatClient, flow, openai::OpenAiAdapterBuilder};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = OpenAiAdapterBuilder::new_from_env().build()?;
//!     let consultant = Consultant::new(ChatClient::new(backend));
//!     let answer = flow::submit(&consultant, Some("cooking-expert"), "How do I make an omelet?").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
pub mod config;
pub mod consultant;
pub mod error;
pub mod flow;
pub mod page;
pub mod web;

pub use config::Settings;
pub use consultant::Consultant;
pub use error::ExpertChatError;

pub use expert_chat_core::*;
pub use expert_chat_openai as openai;
pub use expert_chat_prompt as prompt;
