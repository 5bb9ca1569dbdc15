mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use viewcount_core::{CounterStore, ViewCounter};
use viewcount_gateway::{App, AppState};
use viewcount_storage::{InMemoryCounterStore, RedisCounterStore};
use viewcount_telemetry::TelemetryConfig;

use crate::cli::{StorageBackendArg, CLI};

const SERVICE_NAME: &str = "viewcount-gateway";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    let _telemetry = viewcount_telemetry::init(&TelemetryConfig {
        service_name: SERVICE_NAME.to_string(),
        log_format: config.log_format.into(),
        otlp_endpoint: config.otlp_endpoint.clone(),
    })?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    let store = view_counters_binding(&config).await?;
    if store.is_none() {
        warn!("no VIEW_COUNTERS binding configured; view requests will fail");
    }

    let state = AppState::new(ViewCounter::from_binding(store));
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn view_counters_binding(config: &CLI) -> anyhow::Result<Option<Arc<dyn CounterStore>>> {
    let store: Option<Arc<dyn CounterStore>> = match config.storage {
        StorageBackendArg::None => None,
        StorageBackendArg::InMemory => Some(Arc::new(InMemoryCounterStore::new())),
        StorageBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("redis url is required when storage backend is redis")?;
            let store = RedisCounterStore::connect(redis_url).await?;
            Some(Arc::new(store))
        }
    };
    Ok(store)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
