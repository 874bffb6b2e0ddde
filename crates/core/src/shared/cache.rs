use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::{sync::Mutex, time::sleep};

use crate::metadata::RddDocument;

#[derive(Clone)]
pub enum CacheValue {
    RddDocument(RddDocument),
}

impl CacheValue {
    pub fn to_rdd_document(&self) -> RddDocument {
        match self {
            CacheValue::RddDocument(document) => document.clone(),
        }
    }
}

struct CacheEntry {
    value: CacheValue,
    expiration_time: Instant,
}

pub struct Cache {
    cache: Arc<Mutex<HashMap<String, CacheEntry>>>,
}

impl Cache {
    pub async fn new() -> Self {
        let cache = Cache { cache: Arc::new(Mutex::new(HashMap::new())) };

        // Discard expired entries every 30 seconds
        cache.start_expiration_thread(Duration::from_secs(30)).await;

        cache
    }

    pub async fn insert(&self, key: String, value: CacheValue) {
        self.insert_with_expiry(key, value, Duration::from_secs(60 * 10)).await
    }

    pub async fn insert_with_expiry(
        &self,
        key: String,
        value: CacheValue,
        expiration_duration: Duration,
    ) {
        let expiration_time = Instant::now() + expiration_duration;
        let entry = CacheEntry { value, expiration_time };

        self.cache.lock().await.insert(key, entry);
    }

    pub async fn get(&self, key: &str) -> Option<CacheValue> {
        let cache = self.cache.lock().await;
        if let Some(entry) = cache.get(key) {
            if entry.expiration_time > Instant::now() {
                return Some(entry.value.clone());
            }
        }
        None
    }

    pub async fn delete(&self, key: &str) -> Option<CacheValue> {
        self.cache.lock().await.remove(key).map(|entry| entry.value)
    }

    async fn start_expiration_thread(&self, cleanup_interval: Duration) {
        let cache_ref = Arc::clone(&self.cache);
        tokio::spawn(async move {
            loop {
                sleep(cleanup_interval).await;
                let mut cache = cache_ref.lock().await;
                cache.retain(|_, entry| entry.expiration_time > Instant::now());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::RddEntry;
    use serde_json::json;

    fn document() -> RddDocument {
        vec![RddEntry::new(json!({ "name": "feed" }))]
    }

    #[tokio::test]
    async fn returns_fresh_entries() {
        let cache = Cache::new().await;

        cache
            .insert_with_expiry(
                "https://example.com/rdd.json".to_string(),
                CacheValue::RddDocument(document()),
                Duration::from_secs(60),
            )
            .await;

        let cached = cache.get("https://example.com/rdd.json").await;
        assert_eq!(cached.map(|value| value.to_rdd_document()), Some(document()));
    }

    #[tokio::test]
    async fn ignores_expired_entries() {
        let cache = Cache::new().await;

        cache
            .insert_with_expiry(
                "https://example.com/rdd.json".to_string(),
                CacheValue::RddDocument(document()),
                Duration::from_secs(0),
            )
            .await;

        assert!(cache.get("https://example.com/rdd.json").await.is_none());
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let cache = Cache::new().await;

        cache.insert("key".to_string(), CacheValue::RddDocument(document())).await;

        assert!(cache.delete("key").await.is_some());
        assert!(cache.get("key").await.is_none());
    }
}
