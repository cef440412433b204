use std::{env, sync::Arc, time::Duration};

use expert_chat_core::error::{ChatError, Result};

use crate::client::{DEFAULT_TIMEOUT, OpenAiClient};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Wires the HTTP client [`OpenAiClient`] into a value that implements
/// [`expert_chat_core::provider::ChatCompletionProvider`].
///
/// * stores the API key and base URL inside the client,
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * is built through [`OpenAiAdapterBuilder`].
#[derive(Debug)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    pub fn client(&self) -> &OpenAiClient {
        &self.client
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// ```rust,no_run
/// use std::time::Duration;
/// use expert_chat_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .with_timeout(Duration::from_secs(10))
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `OPENAI_API_KEY` and, if present, `OPENAI_BASE_URL`.
    ///
    /// Never fails. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            base_url: env::var(BASE_URL_ENV).ok(),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`ChatError::Invalid`] – if the API key is missing or blank.
    /// * [`ChatError::Backend`] – if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ChatError::Invalid(format!("missing env variable: `{API_KEY_ENV}`")))?;

        let client = OpenAiClient::with_timeout(
            api_key,
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            self.base_url,
        )
        .map_err(ChatError::from)?;

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_a_key() {
        let err = OpenAiAdapterBuilder::new().build().unwrap_err();
        assert!(matches!(err, ChatError::Invalid(msg) if msg.contains(API_KEY_ENV)));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = OpenAiAdapterBuilder::new()
            .with_api_key("   ")
            .build()
            .unwrap_err();
        assert!(matches!(err, ChatError::Invalid(_)));
    }

    #[test]
    fn base_url_override_reaches_the_client() {
        let adapter = OpenAiAdapterBuilder::new()
            .with_api_key("sk-test")
            .with_base_url("http://localhost:1234/v1")
            .build()
            .unwrap();
        assert_eq!(adapter.client().base_url(), "http://localhost:1234/v1");
    }
}
