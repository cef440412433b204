//! Prompt composition for **expert-chat**.
//!
//! * [`chain::PromptChain`] lines up fragments into one message list.
//! * [`fragments::StaticFragment`] wraps fixed text with a chat role.
//! * [`persona`] holds the expert personas and their instruction preambles.
pub mod chain;
pub mod fragments;
pub mod persona;

pub use persona::{Expert, GENERAL_PREAMBLE, select_preamble};
