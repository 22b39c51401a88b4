//! Key-value store interface consumed by the upload and query services.

use async_trait::async_trait;

use weather_common::WeatherResult;

/// Key-value service holding serialized records.
///
/// Every method is a single store primitive; callers never assume a
/// transaction spans more than one call.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> WeatherResult<()>;

    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> WeatherResult<Option<String>>;

    /// List keys matching a Redis-style glob `pattern`.
    ///
    /// Order is unspecified.
    async fn scan(&self, pattern: &str) -> WeatherResult<Vec<String>>;
}
