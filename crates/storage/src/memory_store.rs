//! In-memory record store for tests and local runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use weather_common::WeatherResult;

use crate::pattern::glob_match;
use crate::record_store::RecordStore;

/// Record store backed by a process-local map.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn set(&self, key: &str, value: &str) -> WeatherResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> WeatherResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn scan(&self, pattern: &str) -> WeatherResult<Vec<String>> {
        let entries = self.entries.read().await;
        Ok(entries
            .keys()
            .filter(|key| glob_match(pattern, key))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryRecordStore::new();
        store.set("weather_entry:S1:t", "{}").await.unwrap();

        assert_eq!(store.get("weather_entry:S1:t").await.unwrap().as_deref(), Some("{}"));
        assert_eq!(store.get("missing").await.unwrap(), None);
        assert!(!store.is_empty().await);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryRecordStore::new();
        store.set("k", "first").await.unwrap();
        store.set("k", "second").await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_scan_filters_by_pattern() {
        let store = MemoryRecordStore::new();
        store.set("weather_entry:S1:a", "1").await.unwrap();
        store.set("weather_entry:S2:b", "2").await.unwrap();
        store.set("session:xyz", "3").await.unwrap();

        let mut keys = store.scan("weather_entry:*").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["weather_entry:S1:a", "weather_entry:S2:b"]);
    }
}
