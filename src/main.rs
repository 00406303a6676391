use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use radialog::application::ports::{ConversationRepository, InferenceBackend};
use radialog::application::services::{InferenceClient, LookupPolicy, ReportSessionService};
use radialog::infrastructure::detection::DetectionServiceFactory;
use radialog::infrastructure::llm::InferenceBackendFactory;
use radialog::infrastructure::observability::{TracingConfig, init_tracing};
use radialog::infrastructure::persistence::InMemoryConversationRepository;
use radialog::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let backend = InferenceBackendFactory::create(&settings.inference)
        .context("Failed to create inference backend")?;
    tracing::info!(
        provider = %settings.inference.provider,
        backend = backend.name(),
        model = %settings.inference.model,
        "Inference backend resolved"
    );

    let detection_service = DetectionServiceFactory::create(&settings.detection)
        .context("Failed to create detection service")?;

    let repository: Arc<dyn ConversationRepository> =
        Arc::new(InMemoryConversationRepository::new());
    let lookup_policy = if settings.session.strict_conversation_lookup {
        LookupPolicy::Strict
    } else {
        LookupPolicy::CreateOnMiss
    };

    let session_service = Arc::new(ReportSessionService::new(
        repository,
        InferenceClient::new(backend),
        lookup_policy,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        session_service,
        detection_service,
        settings: Arc::new(settings),
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
