//! Weather image API service.
//!
//! Accepts station images with sensor metadata, stores the enriched
//! records in Redis and lists them back.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use weather_image_api::{build_router, server, AppState, Config};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = Config::parse();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(threads) = config.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(config))
}

async fn async_main(config: Config) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.level())
        .with_target(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;
    info!("Prometheus metrics exporter initialized");

    info!(
        unique_keys = config.unique_keys,
        memory_store = config.memory_store,
        max_upload_mb = config.max_upload_mb,
        "Starting weather image API"
    );

    let state = Arc::new(AppState::from_config(&config).await?);
    let app = build_router(state, Some(prometheus_handle), config.max_upload_bytes());

    server::serve(app, config.listen_addr()?).await
}
