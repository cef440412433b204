//! The page, driven through the router with a scripted backend.

use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use expert_chat::{
    ChatClient, Consultant,
    generic::{GenericChatCompletionResponse, GenericMessage, GenericRole},
    page::ANSWER_HEADING,
    prompt::{Expert, GENERAL_PREAMBLE},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
    web::{AppState, router},
};
use expert_chat_core::error::{ChatError, Result};
use tower::ServiceExt;

#[derive(Default)]
struct Script {
    questions: Mutex<Vec<Vec<(GenericRole, String)>>>,
    fail: Mutex<bool>,
}

#[derive(Clone, Default)]
struct Scripted(Arc<Script>);

impl ChatCompletionProvider for Scripted {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let script = Arc::clone(&self.0);
        Box::pin(async move {
            let messages: Vec<(GenericRole, String)> = params
                .into_messages()
                .into_iter()
                .map(Into::<GenericMessage>::into)
                .map(|m| (m.role, m.content.unwrap_or_default()))
                .collect();
            script.questions.lock().unwrap().push(messages);

            if *script.fail.lock().unwrap() {
                return Err(ChatError::Backend("upstream returned 429".into()));
            }
            Ok(GenericChatCompletionResponse {
                content: GenericMessage::new(
                    "1. Beat the eggs.\n2. Cook <gently>.".into(),
                    GenericRole::Assistant,
                ),
                usage: None,
            })
        })
    }
}

fn app() -> (Router, Arc<Script>) {
    let scripted = Scripted::default();
    let script = Arc::clone(&scripted.0);
    let state = AppState {
        consultant: Consultant::new(ChatClient::new(scripted)),
    };
    (router(state), script)
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post(form: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap()
}

#[tokio::test]
async fn get_renders_the_empty_form() {
    let (app, script) = app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    for expert in Expert::ALL {
        assert!(html.contains(&format!("value=\"{}\"", expert.tag())));
    }
    assert!(html.contains("name=\"question\""));
    assert!(!html.contains(ANSWER_HEADING));
    assert!(script.questions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn submit_shows_the_answer() {
    let (app, script) = app();

    let response = app
        .oneshot(post("expert=cooking-expert&question=How+do+I+make+an+omelet%3F"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(ANSWER_HEADING));
    assert!(html.contains("1. Beat the eggs.\n2. Cook &lt;gently&gt;."));
    assert!(html.contains("value=\"How do I make an omelet?\""));
    assert!(html.contains("value=\"cooking-expert\" checked>"));

    let calls = script.questions.lock().unwrap();
    assert_eq!(
        *calls,
        vec![vec![
            (GenericRole::System, Expert::Cooking.preamble().to_string()),
            (GenericRole::User, "How do I make an omelet?".to_string()),
        ]]
    );
}

#[tokio::test]
async fn blank_question_is_rejected_without_a_call() {
    let (app, script) = app();

    let response = app
        .oneshot(post("expert=travel-expert&question=+++"))
        .await
        .unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Please enter a question."));
    assert!(!html.contains(ANSWER_HEADING));
    assert!(script.questions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_expert_uses_the_general_preamble() {
    let (app, script) = app();

    app.oneshot(post("question=hello")).await.unwrap();

    let calls = script.questions.lock().unwrap();
    assert_eq!(
        calls[0][0],
        (GenericRole::System, GENERAL_PREAMBLE.to_string())
    );
}

#[tokio::test]
async fn service_failure_is_shown_and_the_next_submit_works() {
    let (app, script) = app();
    *script.fail.lock().unwrap() = true;

    let html = body_text(
        app.clone()
            .oneshot(post("expert=travel-expert&question=Kyoto"))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("upstream returned 429"));
    assert!(!html.contains(ANSWER_HEADING));

    *script.fail.lock().unwrap() = false;
    let html = body_text(
        app.oneshot(post("expert=travel-expert&question=Kyoto"))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains(ANSWER_HEADING));
    assert_eq!(script.questions.lock().unwrap().len(), 2);
}
