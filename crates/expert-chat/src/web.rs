//! The axum surface: `GET /` shows the form, `POST /` submits it.

use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::get,
};
use expert_chat_core::{generic::GenericMessage, provider::ChatCompletionProvider};
use serde::Deserialize;

use crate::{
    consultant::Consultant,
    flow::{self, View},
    page,
};

/// Shared by every request handler.
pub struct AppState<B> {
    pub consultant: Consultant<B>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            consultant: self.consultant.clone(),
        }
    }
}

/// Fields of the submitted form. Both may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct AskForm {
    pub expert: Option<String>,
    #[serde(default)]
    pub question: String,
}

pub fn router<B>(state: AppState<B>) -> Router
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    Router::new()
        .route("/", get(show_form).post(submit_form::<B>))
        .with_state(state)
}

async fn show_form() -> Html<String> {
    Html(page::render(&View::default()))
}

async fn submit_form<B>(State(state): State<AppState<B>>, Form(form): Form<AskForm>) -> Html<String>
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    let view = flow::handle(&state.consultant, form.expert.as_deref(), form.question).await;
    Html(page::render(&view))
}
