//! Application state and shared resources.

use std::sync::Arc;

use tracing::info;

use ingestion::{QueryService, StationTimestampKeys, UniqueSuffixKeys, UploadService};
use storage::{MemoryRecordStore, RecordStore, RedisRecordStore};
use weather_common::WeatherResult;

use crate::config::Config;
use crate::metrics::MetricsCollector;

/// Shared application state.
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub upload: UploadService,
    pub query: QueryService,
    pub metrics: MetricsCollector,
}

impl AppState {
    /// Connect the configured store and build the services over it.
    pub async fn from_config(config: &Config) -> WeatherResult<Self> {
        let store: Arc<dyn RecordStore> = if config.memory_store {
            info!("Using in-memory record store");
            Arc::new(MemoryRecordStore::new())
        } else {
            info!(redis_url = %config.redis_url, "Connecting to Redis record store");
            Arc::new(RedisRecordStore::connect(&config.redis_url).await?)
        };

        Ok(Self::with_store(store, config.unique_keys))
    }

    /// Build the services over an existing store.
    pub fn with_store(store: Arc<dyn RecordStore>, unique_keys: bool) -> Self {
        let upload = if unique_keys {
            UploadService::new(store.clone()).with_key_strategy(Arc::new(UniqueSuffixKeys))
        } else {
            UploadService::new(store.clone()).with_key_strategy(Arc::new(StationTimestampKeys))
        };

        Self {
            query: QueryService::new(store.clone()),
            upload,
            store,
            metrics: MetricsCollector::new(),
        }
    }
}
