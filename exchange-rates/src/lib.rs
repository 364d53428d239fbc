//! Exchange rate providers for the beerbox pricing service.
//!
//! Everything here implements [`beerbox_types::RateProvider`]:
//!
//! - [`MemoryRateProvider`] - fixed table, for tests and offline operation
//! - [`RemoteRateProvider`] - currencylayer-style REST API
//! - [`CachedRateProvider`] - TTL cache in front of any other provider
//!
//! [`ProviderFactory`] assembles them from [`beerbox_types::ProviderKind`]
//! selectors at startup.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use beerbox_types::{RatePair, RateProvider};
//! use exchange_rates::{CachedRateProvider, MemoryCacheStore, MemoryRateProvider};
//!
//! # async fn run() {
//! let table = MemoryRateProvider::new([(RatePair::new("USD", "MXN"), 20.38)]);
//! let cached = CachedRateProvider::new(table, Arc::new(MemoryCacheStore::new()));
//!
//! let quote = cached.get_rate(&RatePair::new("USD", "MXN")).await.unwrap();
//! assert_eq!(quote, 20.38);
//! # }
//! ```

mod cached;
mod factory;
mod memory;
mod remote;
mod store;

pub use cached::{CachedRateProvider, DEFAULT_CACHE_TTL};
pub use factory::{ProviderFactory, RateSource, RateSourceSettings};
pub use memory::MemoryRateProvider;
pub use remote::RemoteRateProvider;
#[cfg(feature = "redis")]
pub use store::RedisCacheStore;
pub use store::MemoryCacheStore;
