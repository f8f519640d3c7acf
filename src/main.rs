//! catalog-advisor server binary.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog_advisor::adapters::http::{app_router, AppState};
use catalog_advisor::adapters::recommendation::{
    DisabledRecommendationService, HttpRecommendationConfig, HttpRecommendationService,
};
use catalog_advisor::adapters::storage::{
    FileProductRepository, FileQuestionRepository, InMemoryFlowSessionStore, LocalImageStorage,
};
use catalog_advisor::config::{AppConfig, RecommendationConfig, ServerConfig};
use catalog_advisor::ports::RecommendationService;

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if server.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn recommendation_service(
    config: &RecommendationConfig,
) -> Result<Arc<dyn RecommendationService>, Box<dyn Error>> {
    if !config.enabled {
        tracing::warn!("recommendation service disabled; consultations end with the fallback notice");
        return Ok(Arc::new(DisabledRecommendationService));
    }

    let mut http = HttpRecommendationConfig::new(config.base_url.clone()).with_timeout(config.timeout());
    if let Some(key) = config.api_key.as_ref().filter(|_| config.has_api_key()) {
        http = http.with_api_key(key.clone());
    }
    tracing::info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "recommendation service configured");
    Ok(Arc::new(HttpRecommendationService::new(http)?))
}

async fn wait_for_shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    tokio::fs::create_dir_all(&config.storage.data_dir).await?;
    tokio::fs::create_dir_all(&config.storage.uploads_dir).await?;

    let sessions = InMemoryFlowSessionStore::with_idle_ttl(config.storage.session_idle_ttl());
    let (stop_sweeper, sweeper_shutdown) = watch::channel(false);
    let sweeper = {
        let sessions = sessions.clone();
        let every = config.storage.session_sweep_interval();
        tokio::spawn(async move { sessions.run_sweeper(every, sweeper_shutdown).await })
    };

    let state = AppState::new(
        Arc::new(FileQuestionRepository::new(&config.storage.data_dir)),
        Arc::new(FileProductRepository::new(&config.storage.data_dir)),
        Arc::new(LocalImageStorage::new(
            &config.storage.uploads_dir,
            config.storage.max_upload_bytes,
        )),
        Arc::new(sessions),
        recommendation_service(&config.recommendation)?,
    );

    let app = app_router(
        state,
        &config.server,
        &config.storage.uploads_dir,
        config.storage.max_upload_bytes,
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        data_dir = %config.storage.data_dir.display(),
        "catalog-advisor listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    // A send error only means the sweeper already exited.
    let _ = stop_sweeper.send(true);
    if let Err(e) = sweeper.await {
        tracing::warn!(error = %e, "session sweeper ended abnormally");
    }
    tracing::info!("server stopped");
    Ok(())
}
