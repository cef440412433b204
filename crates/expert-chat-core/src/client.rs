//! Lightweight client that shares a single concrete backend.
//!
//! The client is **generic over the backend type `B`**, so the message type
//! a caller produces is checked against what the backend expects at compile
//! time and no dynamic dispatch shows up in user code.
//!
//! Any backend crate (e.g. `expert-chat-openai`) just implements
//! [`ChatCompletionProvider`] and the same client works out of the box.
use std::{future::Future, pin::Pin, sync::Arc};

use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

/// A client bound to a single provider.
///
/// Cloning only bumps the reference count of the backend, so one client can
/// be handed to every concurrent request handler.
#[derive(Debug)]
pub struct ChatClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for ChatClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> ChatClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}

impl<B: ChatCompletionProvider> ChatCompletionProvider for ChatClient<B> {
    type Message = B::Message;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        self.backend.chat_complete(params)
    }
}
