//! OpenAI backend for **expert-chat**.
//!
//! [`OpenAiAdapter`] implements
//! [`ChatCompletionProvider`](expert_chat_core::provider::ChatCompletionProvider)
//! on top of the non-streaming `POST /v1/chat/completions` endpoint.
//!
//! ```rust,no_run
//! use expert_chat_openai::OpenAiAdapterBuilder;
//!
//! let backend = OpenAiAdapterBuilder::new_from_env()
//!     .build()
//!     .expect("OPENAI_API_KEY must be set");
//! ```
mod adapter;
mod client;
mod model_map;
mod provider_impl_chat;

pub mod api_v1;
pub mod error;

pub use adapter::{API_KEY_ENV, BASE_URL_ENV, OpenAiAdapter, OpenAiAdapterBuilder};

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenAiClient};
pub use model_map::GPT4_O_MINI;
pub use reqwest::Url;
