pub mod error;
pub mod handlers;

use crate::adapters::{ElasticsearchIndex, OpenAiClassifier};
use crate::core::gateway::ClassificationGateway;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ClassificationGateway>,
}

impl AppState {
    pub fn new(gateway: ClassificationGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

/// Constructs the process-wide backend clients from configuration.
pub fn build_gateway<C: ConfigProvider>(config: &C) -> Result<ClassificationGateway> {
    let classifier = OpenAiClassifier::from_config(config)?;
    tracing::info!(
        "🤖 Classifier: {} via {}",
        classifier.model(),
        config.openai_base_url()
    );

    let gateway = ClassificationGateway::new(Arc::new(classifier));

    if !config.indexing_enabled() {
        tracing::info!("Document indexing disabled");
        return Ok(gateway);
    }

    let index = ElasticsearchIndex::from_config(config)?;
    tracing::info!(
        "📚 Document indexing enabled: {}/{}",
        config.index_url(),
        config.index_name()
    );
    Ok(gateway.with_index(Arc::new(index), config.index_name()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/categories", get(handlers::categories))
        .route(
            "/create_influencer_persona",
            post(handlers::create_influencer_persona),
        )
        .route("/create_advert", post(handlers::create_advert))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}
