//! Selector-driven construction of rate providers and cache stores.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use beerbox_types::{AssemblyError, CacheStore, ProviderKind, RateError, RatePair, RateProvider};
use tokio::sync::OnceCell;
use tracing::info;

use crate::cached::{CachedRateProvider, DEFAULT_CACHE_TTL};
use crate::memory::MemoryRateProvider;
use crate::remote::RemoteRateProvider;
use crate::store::MemoryCacheStore;

/// Settings the factory needs to build the non-memory variants.
#[derive(Debug, Clone)]
pub struct RateSourceSettings {
    /// Base URL of the remote rate source, including any access key
    pub api_url: Option<String>,
    /// Redis connection URL for the `redis` cache store
    pub redis_url: Option<String>,
    /// Time-to-live of cached quotes
    pub cache_ttl: Duration,
}

impl Default for RateSourceSettings {
    fn default() -> Self {
        Self {
            api_url: None,
            redis_url: None,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

/// A concrete rate provider chosen at startup.
pub enum RateSource {
    Memory(MemoryRateProvider),
    Remote(RemoteRateProvider),
    Cached(Box<CachedRateProvider<RateSource>>),
}

impl RateSource {
    /// Short name for logs.
    pub fn describe(&self) -> &'static str {
        match self {
            RateSource::Memory(_) => "memory",
            RateSource::Remote(_) => "api",
            RateSource::Cached(cached) => match cached.inner() {
                RateSource::Memory(_) => "cached memory",
                RateSource::Remote(_) => "cached api",
                RateSource::Cached(_) => "cached",
            },
        }
    }
}

#[async_trait]
impl RateProvider for RateSource {
    async fn get_rate(&self, pair: &RatePair) -> Result<f64, RateError> {
        match self {
            RateSource::Memory(p) => p.get_rate(pair).await,
            RateSource::Remote(p) => p.get_rate(pair).await,
            RateSource::Cached(p) => p.get_rate(pair).await,
        }
    }
}

fn unsupported(kind: ProviderKind, component: &'static str) -> AssemblyError {
    AssemblyError::UnsupportedSelector {
        selector: kind.to_string(),
        component,
    }
}

/// Builds rate providers and cache stores from [`ProviderKind`] selectors.
///
/// The HTTP client and the cache store are created at most once per factory
/// and shared by everything it builds.
pub struct ProviderFactory {
    settings: RateSourceSettings,
    http: OnceCell<reqwest::Client>,
    cache: OnceCell<(ProviderKind, Arc<dyn CacheStore>)>,
}

impl ProviderFactory {
    pub fn new(settings: RateSourceSettings) -> Self {
        Self {
            settings,
            http: OnceCell::new(),
            cache: OnceCell::new(),
        }
    }

    /// Shared HTTP client for remote sources.
    pub async fn http_client(&self) -> Result<&reqwest::Client, AssemblyError> {
        self.http
            .get_or_try_init(|| async {
                reqwest::Client::builder()
                    .build()
                    .map_err(|e| AssemblyError::Init(format!("http client: {}", e)))
            })
            .await
    }

    /// Builds an uncached rate provider.
    ///
    /// Supports `Memory` and `RemoteApi`.
    pub async fn build(&self, kind: ProviderKind) -> Result<RateSource, AssemblyError> {
        match kind {
            ProviderKind::Memory => Ok(RateSource::Memory(MemoryRateProvider::default())),
            ProviderKind::RemoteApi => {
                let url = self
                    .settings
                    .api_url
                    .clone()
                    .ok_or(AssemblyError::MissingSetting("CURRENCY_API_URL"))?;
                let http = self.http_client().await?.clone();
                Ok(RateSource::Remote(RemoteRateProvider::new(url, http)))
            }
            other => Err(unsupported(other, "rate provider factory")),
        }
    }

    /// Builds a provider of `kind` wrapped by the cache store of `cache_kind`.
    pub async fn build_cached(
        &self,
        kind: ProviderKind,
        cache_kind: ProviderKind,
    ) -> Result<RateSource, AssemblyError> {
        let store = self.cache_store(cache_kind).await?;
        let inner = self.build(kind).await?;
        Ok(RateSource::Cached(Box::new(CachedRateProvider::with_ttl(
            inner,
            store,
            self.settings.cache_ttl,
        ))))
    }

    /// Shared cache store of the given kind.
    ///
    /// Supports `Memory` and, with the `redis` feature, `Redis`. The first
    /// successful call fixes the store; asking for another kind afterwards
    /// is an error.
    pub async fn cache_store(
        &self,
        kind: ProviderKind,
    ) -> Result<Arc<dyn CacheStore>, AssemblyError> {
        let (opened, store) = self
            .cache
            .get_or_try_init(|| async {
                Ok::<_, AssemblyError>((kind, self.open_cache_store(kind).await?))
            })
            .await?;

        if *opened != kind {
            return Err(AssemblyError::Init(format!(
                "cache store already initialized as {}, cannot open {}",
                opened, kind
            )));
        }
        Ok(store.clone())
    }

    async fn open_cache_store(
        &self,
        kind: ProviderKind,
    ) -> Result<Arc<dyn CacheStore>, AssemblyError> {
        match kind {
            ProviderKind::Memory => {
                info!("Using in-memory rate cache");
                Ok(Arc::new(MemoryCacheStore::new()))
            }
            ProviderKind::Redis => self.open_redis().await,
            other => Err(unsupported(other, "cache store factory")),
        }
    }

    #[cfg(feature = "redis")]
    async fn open_redis(&self) -> Result<Arc<dyn CacheStore>, AssemblyError> {
        let url = self
            .settings
            .redis_url
            .as_deref()
            .ok_or(AssemblyError::MissingSetting("REDIS_URL"))?;
        let store = crate::store::RedisCacheStore::connect(url)
            .await
            .map_err(|e| AssemblyError::Init(format!("redis: {}", e)))?;
        info!("Using redis rate cache");
        Ok(Arc::new(store))
    }

    #[cfg(not(feature = "redis"))]
    async fn open_redis(&self) -> Result<Arc<dyn CacheStore>, AssemblyError> {
        Err(AssemblyError::UnsupportedSelector {
            selector: ProviderKind::Redis.to_string(),
            component: "cache store factory (built without the `redis` feature)",
        })
    }
}

impl Default for ProviderFactory {
    fn default() -> Self {
        Self::new(RateSourceSettings::default())
    }
}
