//! Redis-backed record store.

use std::collections::HashSet;

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use tracing::debug;

use weather_common::{WeatherError, WeatherResult};

use crate::record_store::RecordStore;

/// Keys requested per SCAN round trip.
const SCAN_BATCH: usize = 100;

/// Redis record store client.
///
/// The multiplexed connection is cheap to clone, so concurrent requests
/// each take their own handle instead of sharing a lock.
#[derive(Clone)]
pub struct RedisRecordStore {
    conn: MultiplexedConnection,
}

impl RedisRecordStore {
    /// Connect to Redis.
    pub async fn connect(redis_url: &str) -> WeatherResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| WeatherError::StoreError(format!("Redis connection failed: {}", e)))?;

        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| WeatherError::StoreError(format!("Redis connection failed: {}", e)))?;

        Ok(Self { conn })
    }
}

/// Append the keys of one SCAN batch that have not been seen yet.
///
/// SCAN may report a key more than once across a full iteration.
fn merge_batch(seen: &mut HashSet<String>, keys: &mut Vec<String>, batch: Vec<String>) {
    for key in batch {
        if seen.insert(key.clone()) {
            keys.push(key);
        }
    }
}

#[async_trait]
impl RecordStore for RedisRecordStore {
    async fn set(&self, key: &str, value: &str) -> WeatherResult<()> {
        let mut conn = self.conn.clone();

        let _: () = conn
            .set(key, value)
            .await
            .map_err(|e| WeatherError::StoreError(format!("SET failed: {}", e)))?;

        Ok(())
    }

    async fn get(&self, key: &str) -> WeatherResult<Option<String>> {
        let mut conn = self.conn.clone();

        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| WeatherError::StoreError(format!("GET failed: {}", e)))?;

        Ok(value)
    }

    async fn scan(&self, pattern: &str) -> WeatherResult<Vec<String>> {
        let mut conn = self.conn.clone();
        let mut cursor: u64 = 0;
        let mut seen = HashSet::new();
        let mut keys = Vec::new();

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .map_err(|e| WeatherError::StoreError(format!("SCAN failed: {}", e)))?;

            merge_batch(&mut seen, &mut keys, batch);

            if next == 0 {
                break;
            }
            cursor = next;
        }

        debug!(pattern = %pattern, count = keys.len(), "Scanned Redis keys");
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_merge_batch_drops_repeats_across_batches() {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();

        merge_batch(&mut seen, &mut keys, batch(&["weather_entry:S1:a", "weather_entry:S2:b"]));
        merge_batch(&mut seen, &mut keys, batch(&["weather_entry:S2:b", "weather_entry:S3:c"]));

        assert_eq!(
            keys,
            vec!["weather_entry:S1:a", "weather_entry:S2:b", "weather_entry:S3:c"]
        );
    }

    #[test]
    fn test_merge_batch_drops_repeats_within_batch() {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();

        merge_batch(&mut seen, &mut keys, batch(&["k", "k", "k"]));
        merge_batch(&mut seen, &mut keys, Vec::new());

        assert_eq!(keys, vec!["k"]);
    }

    /// Runs against a live server: `REDIS_URL=redis://localhost:6379/15 cargo test -- --ignored`
    #[tokio::test]
    #[ignore]
    async fn test_scan_against_live_redis() {
        let Ok(url) = std::env::var("REDIS_URL") else {
            return;
        };
        let store = RedisRecordStore::connect(&url).await.unwrap();
        let prefix = format!("scan_test_{}", std::process::id());

        for i in 0..250 {
            store.set(&format!("{}:{}", prefix, i), "{}").await.unwrap();
        }

        let mut keys = store.scan(&format!("{}:*", prefix)).await.unwrap();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(total, 250);
        assert_eq!(keys.len(), 250);
        assert_eq!(store.get(&format!("{}:0", prefix)).await.unwrap().as_deref(), Some("{}"));
    }
}
