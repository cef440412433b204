//! `expert-chat` binary: serves the form on `EXPERT_CHAT_BIND`.

use anyhow::Context;
use expert_chat::{
    ChatClient, Consultant, Settings,
    openai::OpenAiAdapterBuilder,
    web::{self, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    tracing::debug!(?settings, "settings loaded");

    let mut backend = OpenAiAdapterBuilder::new()
        .with_api_key(settings.api_key.clone())
        .with_timeout(settings.timeout);
    if let Some(base_url) = &settings.base_url {
        backend = backend.with_base_url(base_url.clone());
    }
    let backend = backend.build().context("building the OpenAI client")?;

    let state = AppState {
        consultant: Consultant::new(ChatClient::new(backend)),
    };
    let app = web::router(state);

    let listener = tokio::net::TcpListener::bind(settings.bind)
        .await
        .with_context(|| format!("binding {}", settings.bind))?;
    tracing::info!(address = %settings.bind, "expert-chat listening");

    axum::serve(listener, app)
        .await
        .context("serving HTTP")?;
    Ok(())
}
