//! ArchitectIQ HTTP server.
//!
//! Loads configuration from the environment, wires the calculator and serves
//! the scoring API until Ctrl+C or SIGTERM.

use std::error::Error;
use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use architectiq::adapters::{
    build_app, FailoverCalculator, LocalCalculator, MiddlewareSettings, RemoteCalculator,
    RemoteCalculatorConfig, ScoringAppState,
};
use architectiq::config::AppConfig;
use architectiq::domain::scoring::lookup_tables::COEFFICIENT_SET_VERSION;
use architectiq::domain::scoring::ScoringEngine;
use architectiq::ports::PivotCalculator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let engine = ScoringEngine::new(config.engine.options());
    let calculator = build_calculator(&config, engine)?;
    info!(
        calculator = calculator.name(),
        coefficients = COEFFICIENT_SET_VERSION,
        context_normalization = config.engine.context_normalization,
        "scoring engine ready"
    );

    let state = ScoringAppState::new(calculator, engine);
    let settings = MiddlewareSettings {
        cors_origins: config.server.allowed_origins(),
        request_timeout: config.server.request_timeout(),
    };
    let app = build_app(state, &settings);

    let addr = config.server.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "ArchitectIQ listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}

fn build_calculator(
    config: &AppConfig,
    engine: ScoringEngine,
) -> Result<Arc<dyn PivotCalculator>, Box<dyn Error + Send + Sync>> {
    let local = LocalCalculator::new(engine);

    match &config.remote.base_url {
        Some(base_url) => {
            let remote = RemoteCalculator::new(
                RemoteCalculatorConfig::new(base_url.clone())
                    .with_timeout(config.remote.timeout()),
            )?;
            info!(%base_url, timeout_ms = config.remote.timeout_ms, "remote calculator enabled");
            Ok(Arc::new(FailoverCalculator::new(remote, local)))
        }
        None => Ok(Arc::new(local)),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
