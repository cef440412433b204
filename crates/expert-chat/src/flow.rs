//! What happens when the form is submitted.
//!
//! ```text
//! Idle ──submit──► Validating ──blank──► Invalid
//!                      │
//!                      └──► Invoking ──ok──► Answered
//!                               └──err──► Failed
//! ```
//!
//! Every state but `Idle` is reached from a single submit and is left again
//! by the next one.

use expert_chat_core::{generic::GenericMessage, provider::ChatCompletionProvider};
use expert_chat_prompt::{Expert, select_preamble};

use crate::{consultant::Consultant, error::ExpertChatError};

pub const EMPTY_QUESTION: &str = "Please enter a question.";

/// Validate `question`, pick the preamble for `role` and ask the model.
///
/// A blank question fails with [`ExpertChatError::Validation`] before any
/// request is made.
pub async fn submit<B>(
    consultant: &Consultant<B>,
    role: Option<&str>,
    question: &str,
) -> Result<String, ExpertChatError>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    if question.trim().is_empty() {
        return Err(ExpertChatError::Validation(EMPTY_QUESTION.to_string()));
    }

    let instruction = select_preamble(role);
    Ok(consultant.invoke(question, instruction).await?)
}

/// Result of the last submit, as shown below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answered(String),
    Invalid(String),
    Failed(String),
}

impl From<Result<String, ExpertChatError>> for Outcome {
    fn from(result: Result<String, ExpertChatError>) -> Self {
        match result {
            Ok(answer) => Outcome::Answered(answer),
            Err(err @ ExpertChatError::Validation(_)) => Outcome::Invalid(err.to_string()),
            Err(err) => Outcome::Failed(err.to_string()),
        }
    }
}

/// Everything the page needs to render itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Checked radio button, if the submitted tag was a known one.
    pub expert: Option<Expert>,
    pub question: String,
    pub outcome: Option<Outcome>,
}

impl Default for View {
    /// Fresh page: first expert checked, empty question, nothing to show.
    fn default() -> Self {
        Self {
            expert: Some(Expert::ALL[0]),
            question: String::new(),
            outcome: None,
        }
    }
}

/// Run one submit and turn it into the next [`View`].
pub async fn handle<B>(consultant: &Consultant<B>, role: Option<&str>, question: String) -> View
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    let expert = role.and_then(Expert::from_tag);
    tracing::info!(
        expert = role.unwrap_or("<none>"),
        question_len = question.chars().count(),
        "form submitted"
    );

    let outcome = Outcome::from(submit(consultant, role, &question).await);
    match &outcome {
        Outcome::Answered(answer) => {
            tracing::info!(answer_len = answer.chars().count(), "answer received")
        }
        Outcome::Invalid(reason) => tracing::info!(reason = %reason, "submit rejected"),
        Outcome::Failed(reason) => tracing::warn!(error = %reason, "completion failed"),
    }

    View {
        expert,
        question,
        outcome: Some(outcome),
    }
}
