//! Upload and query orchestration over a record store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use storage::RecordStore;
use weather_common::{ProcessedRecord, WeatherError, WeatherResult};

use crate::assembler::assemble_record;
use crate::inspect::inspect_image;
use crate::keys::{KeyStrategy, StationTimestampKeys, RECORD_SCAN_PATTERN};
use crate::metadata::validate_metadata;

/// Validates, enriches and persists uploads.
///
/// Writes at most once per call, and only after every check passed.
#[derive(Clone)]
pub struct UploadService {
    store: Arc<dyn RecordStore>,
    keys: Arc<dyn KeyStrategy>,
}

impl UploadService {
    /// Create an upload service using `weather_entry:{station}:{time}` keys.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            keys: Arc::new(StationTimestampKeys),
        }
    }

    /// Replace the key derivation strategy.
    pub fn with_key_strategy(mut self, keys: Arc<dyn KeyStrategy>) -> Self {
        self.keys = keys;
        self
    }

    /// Handle one upload, processed at the current UTC time.
    pub async fn handle_upload(
        &self,
        raw_metadata_json: &str,
        image_bytes: &[u8],
    ) -> WeatherResult<ProcessedRecord> {
        self.handle_upload_at(raw_metadata_json, image_bytes, Utc::now())
            .await
    }

    /// Handle one upload, processed at `now`.
    #[instrument(skip_all, fields(image_bytes = image_bytes.len()))]
    pub async fn handle_upload_at(
        &self,
        raw_metadata_json: &str,
        image_bytes: &[u8],
        now: DateTime<Utc>,
    ) -> WeatherResult<ProcessedRecord> {
        let raw: Value = serde_json::from_str(raw_metadata_json)
            .map_err(|e| WeatherError::MalformedInput(e.to_string()))?;

        let observation = validate_metadata(&raw)?;
        let image = inspect_image(image_bytes)?;
        let record = assemble_record(observation, image, now);

        let key = self.keys.record_key(&record);
        let value = serde_json::to_string(&record).map_err(|e| {
            error!(key = %key, error = %e, "Failed to serialize record");
            WeatherError::Internal("failed to serialize record".to_string())
        })?;

        self.store.set(&key, &value).await.map_err(|e| {
            error!(key = %key, error = %e, "Failed to store record");
            WeatherError::Internal("failed to store record".to_string())
        })?;

        info!(
            key = %key,
            station_id = %record.station_id,
            width = record.image.width,
            height = record.image.height,
            format = %record.image.format,
            "Stored weather entry"
        );

        Ok(record)
    }
}

/// Reads every stored record back.
#[derive(Clone)]
pub struct QueryService {
    store: Arc<dyn RecordStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// List all stored records, in no particular order.
    ///
    /// Keys that disappear between the scan and the fetch are skipped. Any
    /// store failure fails the whole call.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> WeatherResult<Vec<ProcessedRecord>> {
        let keys = self.store.scan(RECORD_SCAN_PATTERN).await.map_err(|e| {
            error!(error = %e, "Failed to scan weather entries");
            WeatherError::Internal("failed to list records".to_string())
        })?;

        let values = try_join_all(keys.iter().map(|key| self.store.get(key)))
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch weather entries");
                WeatherError::Internal("failed to fetch records".to_string())
            })?;

        let mut records = Vec::with_capacity(values.len());
        for (key, value) in keys.iter().zip(values) {
            let Some(json) = value else {
                debug!(key = %key, "Entry vanished before fetch");
                continue;
            };

            let record: ProcessedRecord = serde_json::from_str(&json).map_err(|e| {
                error!(key = %key, error = %e, "Stored entry is not a valid record");
                WeatherError::Internal("failed to decode stored record".to_string())
            })?;
            records.push(record);
        }

        debug!(count = records.len(), "Listed weather entries");
        Ok(records)
    }
}
