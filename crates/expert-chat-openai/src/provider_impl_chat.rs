use std::{future::Future, pin::Pin, sync::Arc};

use expert_chat_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage, GenericRole, GenericUsageReport},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::try_from(params)?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                model = %request.model,
                messages = request.messages.len(),
                temperature = ?request.temperature,
                "sending chat completion"
            );

            let response = client.chat_completion(request).await?;
            let usage: Option<GenericUsageReport> = response.usage.map(Into::into);

            let Some(first_choice) = response.choices.into_iter().next() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            match &first_choice.finish_reason {
                None | Some(FinishReason::Stop) | Some(FinishReason::Length) => {}
                Some(other) => {
                    return Err(OpenAiError::Format(format!(
                        "unhandled finish reason on API: {other:?}"
                    ))
                    .into());
                }
            }

            let Some(text) = first_choice.message.content else {
                let reason = first_choice
                    .message
                    .refusal
                    .unwrap_or_else(|| "response has no textual content".into());
                return Err(OpenAiError::Format(reason).into());
            };

            #[cfg(feature = "tracing")]
            if let Some(usage) = &usage {
                tracing::debug!(
                    prompt_tokens = usage.prompt_tokens,
                    completion_tokens = usage.completion_tokens,
                    total_tokens = usage.total_tokens,
                    "chat completion finished"
                );
            }

            Ok(GenericChatCompletionResponse {
                content: GenericMessage::new(text, GenericRole::Assistant),
                usage,
            })
        })
    }
}
