//! Cache stores used by the caching decorator.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use beerbox_types::{CacheError, CacheStore};
use dashmap::DashMap;

/// Cached value entry.
#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    value: f64,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Process-local cache store.
///
/// Expiry is checked lazily on read: an expired entry is dropped when it is
/// next read, there is no background sweep.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    entries: DashMap<String, CacheEntry>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<f64>, CacheError> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if entry.is_live(now) {
                return Ok(Some(entry.value));
            }
        } else {
            return Ok(None);
        }

        // Expired: remove unless a concurrent writer refreshed it meanwhile.
        self.entries.remove_if(key, |_, entry| !entry.is_live(now));
        Ok(None)
    }

    async fn set(&self, key: &str, value: f64, ttl: Duration) -> Result<(), CacheError> {
        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| CacheError::Backend(format!("ttl {:?} out of range", ttl)))?;
        self.entries
            .insert(key.to_string(), CacheEntry { value, expires_at });
        Ok(())
    }
}

#[cfg(feature = "redis")]
pub use self::redis_store::RedisCacheStore;

#[cfg(feature = "redis")]
mod redis_store {
    use std::time::Duration;

    use async_trait::async_trait;
    use beerbox_types::{CacheError, CacheStore};
    use redis::AsyncCommands;
    use redis::aio::MultiplexedConnection;

    fn backend(err: redis::RedisError) -> CacheError {
        CacheError::Backend(err.to_string())
    }

    /// Redis-backed cache store. Entries expire server-side via `PSETEX`.
    #[derive(Clone)]
    pub struct RedisCacheStore {
        conn: MultiplexedConnection,
    }

    impl RedisCacheStore {
        /// Opens a multiplexed connection and checks it with `PING`.
        pub async fn connect(url: &str) -> Result<Self, CacheError> {
            let client = redis::Client::open(url).map_err(backend)?;
            let mut conn = client
                .get_multiplexed_tokio_connection()
                .await
                .map_err(backend)?;
            let _: String = redis::cmd("PING")
                .query_async(&mut conn)
                .await
                .map_err(backend)?;
            Ok(Self { conn })
        }
    }

    #[async_trait]
    impl CacheStore for RedisCacheStore {
        async fn get(&self, key: &str) -> Result<Option<f64>, CacheError> {
            let mut conn = self.conn.clone();
            conn.get(key).await.map_err(backend)
        }

        async fn set(&self, key: &str, value: f64, ttl: Duration) -> Result<(), CacheError> {
            let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
            let mut conn = self.conn.clone();
            conn.pset_ex::<_, _, ()>(key, value, millis)
                .await
                .map_err(backend)
        }
    }
}


#[cfg(all(test, feature = "redis"))]
mod redis_tests {
    use std::time::Duration;

    use beerbox_types::CacheStore;

    use super::RedisCacheStore;

    async fn connect() -> RedisCacheStore {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into());
        RedisCacheStore::connect(&url).await.unwrap()
    }

    #[tokio::test]
    #[ignore = "needs a running redis server (REDIS_URL)"]
    async fn test_redis_round_trip_and_expiry() {
        let store = connect().await;
        let key = format!("currency:TEST/{}", std::process::id());

        assert_eq!(store.get(&key).await.unwrap(), None);

        store.set(&key, 20.38, Duration::from_millis(300)).await.unwrap();
        assert_eq!(store.get(&key).await.unwrap(), Some(20.38));

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(store.get(&key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_redis_connect_failure_is_backend_error() {
        let err = RedisCacheStore::connect("redis://127.0.0.1:1").await.err().unwrap();
        assert!(matches!(err, beerbox_types::CacheError::Backend(_)));
    }
}
