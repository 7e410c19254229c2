pub mod handlers;
pub mod pages;
pub mod types;

use crate::{Result, config::Config, llm::OpenAiClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the application router over the given state. Kept separate from
/// [`run`] so tests can drive it with a fake LLM client.
pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/how-it-works", get(pages::how_it_works))
        .route("/examples", get(pages::examples))
        .route("/sitemap.xml", get(pages::sitemap))
        .route("/api/check-idea", post(handlers::check_idea))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let llm = OpenAiClient::new(&config.llm);
    let state = handlers::AppState {
        llm: Arc::new(llm),
        config: Arc::new(config),
    };

    let app = router(state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
