//! Sends one question plus an instruction preamble to the model.

use expert_chat_core::{
    ChatClient,
    error::{ChatError, Result},
    generic::{GenericMessage, GenericRole},
    model::{Model, OpenAiModel},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};
use expert_chat_prompt::{chain::PromptChain, fragments::StaticFragment};

/// Answers are expected to be reproducible.
pub const TEMPERATURE: f64 = 0.0;

pub const MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4oMini);

/// Completion invoker bound to a shared [`ChatClient`].
///
/// Every call to [`Self::invoke`] is exactly one request to the backend:
/// no history is kept and nothing is cached.
pub struct Consultant<B> {
    client: ChatClient<B>,
}

impl<B> Clone for Consultant<B> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<B> Consultant<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(client: ChatClient<B>) -> Self {
        Self { client }
    }

    /// The two-message request for `user_text`, in order: instruction, then
    /// question.
    pub fn request(user_text: &str, instruction: &str) -> ChatCompleteParameters<GenericMessage> {
        let messages = PromptChain::new()
            .with(StaticFragment::new(instruction, GenericRole::System))
            .with(StaticFragment::new(user_text, GenericRole::User))
            .build();

        ChatCompleteParameters::new(messages, MODEL).with_temperature(TEMPERATURE)
    }

    /// Ask the model and return its complete answer.
    ///
    /// `user_text` is forwarded verbatim; rejecting blank input is up to the
    /// caller. A reply without text is an error, not an empty answer.
    pub async fn invoke(&self, user_text: &str, instruction: &str) -> Result<String> {
        let response = self
            .client
            .chat_complete(Self::request(user_text, instruction))
            .await?;

        if let Some(usage) = response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "completion usage"
            );
        }

        response
            .content
            .content
            .ok_or_else(|| ChatError::Invalid("the model replied without any text".into()))
    }
}

#[cfg(test)]
mod tests {
    use std::{future::Future, pin::Pin};

    use expert_chat_core::generic::GenericChatCompletionResponse;

    use super::*;

    struct Reverse;

    struct Silent;

    impl ChatCompletionProvider for Silent {
        type Message = GenericMessage;

        fn chat_complete<'p, M>(
            &self,
            _params: ChatCompleteParameters<M>,
        ) -> Pin<
            Box<
                dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>>
                    + Send
                    + 'p,
            >,
        >
        where
            M: Into<Self::Message> + Clone + Send + Sync + 'p,
        {
            Box::pin(async move {
                Ok(GenericChatCompletionResponse {
                    content: GenericMessage {
                        content: None,
                        role: GenericRole::Assistant,
                    },
                    usage: None,
                })
            })
        }
    }

    impl ChatCompletionProvider for Reverse {
        type Message = GenericMessage;

        fn chat_complete<'p, M>(
            &self,
            params: ChatCompleteParameters<M>,
        ) -> Pin<
            Box<
                dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>>
                    + Send
                    + 'p,
            >,
        >
        where
            M: Into<Self::Message> + Clone + Send + Sync + 'p,
        {
            Box::pin(async move {
                let question = params
                    .into_messages()
                    .into_iter()
                    .map(Into::<GenericMessage>::into)
                    .find(|m| m.role == GenericRole::User)
                    .and_then(|m| m.content)
                    .unwrap_or_default();

                Ok(GenericChatCompletionResponse {
                    content: GenericMessage::new(
                        question.chars().rev().collect(),
                        GenericRole::Assistant,
                    ),
                    usage: None,
                })
            })
        }
    }

    #[test]
    fn request_is_instruction_then_question() {
        let params = Consultant::<Reverse>::request("  How do I make an omelet?", "be a chef");

        assert_eq!(params.temperature(), Some(0.0));
        assert_eq!(params.model(), Model::OpenAi(OpenAiModel::Gpt4oMini));

        let messages = params.into_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, GenericRole::System);
        assert_eq!(messages[0].text(), Some("be a chef"));
        assert_eq!(messages[1].role, GenericRole::User);
        assert_eq!(messages[1].text(), Some("  How do I make an omelet?"));
    }

    #[tokio::test]
    async fn invoke_returns_the_answer_text() {
        let consultant = Consultant::new(ChatClient::new(Reverse));
        let answer = consultant.invoke("abc", "anything").await.unwrap();
        assert_eq!(answer, "cba");
    }

    #[tokio::test]
    async fn reply_without_text_is_an_error() {
        let consultant = Consultant::new(ChatClient::new(Silent));
        let err = consultant.invoke("abc", "anything").await.unwrap_err();
        assert!(matches!(err, ChatError::Invalid(_)));
    }
}
