//! Exchange rate ports.
//!
//! `RateProvider` is implemented by the in-memory table, the remote API client
//! and the caching decorator. `CacheStore` is the key/value store the
//! decorator writes through.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::RatePair;
use crate::error::{CacheError, RateError};

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Get the exchange rate for an ordered pair.
    /// Returns how many units of `pair.target` you get for 1 unit of `pair.source`.
    async fn get_rate(&self, pair: &RatePair) -> Result<f64, RateError>;
}

#[async_trait::async_trait]
impl<P: RateProvider + ?Sized> RateProvider for Arc<P> {
    async fn get_rate(&self, pair: &RatePair) -> Result<f64, RateError> {
        (**self).get_rate(pair).await
    }
}

/// Port trait for the store behind the rate cache.
#[async_trait::async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the live value for `key`, or `None` on a miss or an expired entry.
    async fn get(&self, key: &str) -> Result<Option<f64>, CacheError>;

    /// Stores `value` under `key` for `ttl`, replacing any previous entry.
    async fn set(&self, key: &str, value: f64, ttl: Duration) -> Result<(), CacheError>;
}
