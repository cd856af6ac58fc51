//! Concept Studio HTTP server.

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

use concept_studio::adapters::{
    app_router, ApiDependencies, GeminiConfig, GeminiProvider, JsonSchemaValidator,
    WordHtmlRenderer,
};
use concept_studio::config::{AppConfig, ConfigError};
use concept_studio::ports::AIError;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("model provider setup failed: {0}")]
    Provider(#[from] AIError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config);

    let provider = GeminiProvider::new(GeminiConfig::from_settings(&config.ai)?)?;
    let deps = ApiDependencies {
        provider: Arc::new(provider),
        validator: Arc::new(JsonSchemaValidator::new()),
        renderer: Arc::new(WordHtmlRenderer::new()),
        temperature: config.ai.temperature,
    };
    let app = app_router(deps, &config.server);

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, model = %config.ai.model, environment = ?config.server.environment, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured level.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = if config.is_production() {
        fmt().json().with_env_filter(filter).try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };
    if let Err(e) = result {
        eprintln!("tracing already initialised: {}", e);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
