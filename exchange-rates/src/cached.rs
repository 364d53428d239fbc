//! TTL caching decorator for rate providers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use beerbox_types::{CacheStore, RateError, RatePair, RateProvider};
use tracing::{debug, instrument, warn};

/// Default time-to-live of a cached quote.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5);

/// Wraps a rate provider with a cache-aside lookup.
///
/// A live entry is returned without calling the wrapped provider. Otherwise
/// the wrapped provider is called and a successful quote is written back with
/// the TTL fixed at construction. Cache failures are logged and ignored.
pub struct CachedRateProvider<P> {
    inner: P,
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl<P: RateProvider> CachedRateProvider<P> {
    /// Wraps `inner` with the default five-second TTL.
    pub fn new(inner: P, store: Arc<dyn CacheStore>) -> Self {
        Self::with_ttl(inner, store, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(inner: P, store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { inner, store, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: RateProvider> RateProvider for CachedRateProvider<P> {
    #[instrument(skip(self), fields(pair = %pair))]
    async fn get_rate(&self, pair: &RatePair) -> Result<f64, RateError> {
        let key = pair.cache_key();

        match self.store.get(&key).await {
            Ok(Some(quote)) => {
                debug!("Cache hit");
                return Ok(quote);
            }
            Ok(None) => debug!("Cache miss"),
            Err(e) => warn!(error = %e, "Cache read failed, resolving upstream"),
        }

        let quote = self.inner.get_rate(pair).await?;

        if let Err(e) = self.store.set(&key, quote, self.ttl).await {
            warn!(error = %e, "Cache write failed");
        }

        Ok(quote)
    }
}
