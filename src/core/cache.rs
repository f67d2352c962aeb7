use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

struct CacheEntry<V> {
    value: V,
    expires_at: Option<Instant>,
}

/// Process-local cache shared by data providers. Entries may carry a TTL.
#[derive(Clone)]
pub struct Cache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    inner: Arc<Mutex<HashMap<K, CacheEntry<V>>>>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Send + Sync + std::fmt::Debug,
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.lock().await;
        let now = Instant::now();
        if cache
            .get(key)
            .is_some_and(|entry| entry.expires_at.is_some_and(|at| at <= now))
        {
            debug!("Cache entry expired for key: {:?}", key);
            cache.remove(key);
            return None;
        }

        let value = cache.get(key).map(|entry| entry.value.clone());
        if value.is_some() {
            debug!("Cache HIT for key: {:?}", key);
        } else {
            debug!("Cache MISS for key: {:?}", key);
        }
        value
    }

    pub async fn put(&self, key: K, value: V, ttl: Option<Duration>) {
        let expires_at = ttl.map(|duration| Instant::now() + duration);
        let mut cache = self.inner.lock().await;
        debug!("Cache PUT for key: {:?}", key);
        cache.insert(key, CacheEntry { value, expires_at });
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: Eq + Hash + Send + Sync + std::fmt::Debug,
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_get_put() {
        let cache = Cache::<String, i32>::new();

        assert!(cache.get(&"acme".to_string()).await.is_none());

        cache.put("acme".to_string(), 123, None).await;
        assert_eq!(cache.get(&"acme".to_string()).await, Some(123));

        assert!(cache.get(&"globex".to_string()).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_entry_expires() {
        let cache = Cache::<String, i32>::new();
        cache
            .put("acme".to_string(), 1, Some(Duration::from_millis(0)))
            .await;
        assert!(cache.get(&"acme".to_string()).await.is_none());

        cache
            .put("acme".to_string(), 2, Some(Duration::from_secs(60)))
            .await;
        assert_eq!(cache.get(&"acme".to_string()).await, Some(2));
    }
}
