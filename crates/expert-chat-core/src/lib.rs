//! Provider-agnostic building blocks shared by every crate in the
//! **expert-chat** workspace.
//!
//! * [`generic`] – chat messages and roles independent of any provider.
//! * [`model`] – logical model identifiers.
//! * [`provider`] – the [`ChatCompletionProvider`](provider::ChatCompletionProvider)
//!   trait a backend implements, plus its request parameters.
//! * [`client`] – a cheap-to-clone handle that shares one backend.
//! * [`error`] – the unified [`ChatError`](error::ChatError).
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod template;

pub use client::ChatClient;
