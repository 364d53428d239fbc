//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use beerbox_types::ProviderKind;
use exchange_rates::{DEFAULT_CACHE_TTL, RateSourceSettings};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub product_storage: ProviderKind,
    pub database_url: Option<String>,
    pub rate_provider: ProviderKind,
    pub currency_api_url: Option<String>,
    /// Cache store in front of the rate provider, `None` for no cache
    pub rate_cache: Option<ProviderKind>,
    pub redis_url: Option<String>,
    pub rate_cache_ttl: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a port number: {}", e))?,
            None => 8080,
        };

        let product_storage = match var("PRODUCT_STORAGE") {
            Some(s) => s.parse()?,
            None => ProviderKind::Memory,
        };

        let rate_provider = match var("RATE_PROVIDER") {
            Some(s) => s.parse()?,
            None => ProviderKind::Memory,
        };

        let rate_cache = var("RATE_CACHE")
            .map(|s| s.parse::<ProviderKind>())
            .transpose()?;

        let rate_cache_ttl = match var("RATE_CACHE_TTL_SECS") {
            Some(secs) => Duration::from_secs(secs.trim().parse().map_err(|e| {
                anyhow::anyhow!("RATE_CACHE_TTL_SECS must be a whole number of seconds: {}", e)
            })?),
            None => DEFAULT_CACHE_TTL,
        };

        Ok(Self {
            port,
            product_storage,
            database_url: var("DATABASE_URL"),
            rate_provider,
            currency_api_url: var("CURRENCY_API_URL"),
            rate_cache,
            redis_url: var("REDIS_URL"),
            rate_cache_ttl,
        })
    }

    /// Settings for the rate provider factory.
    pub fn rate_settings(&self) -> RateSourceSettings {
        RateSourceSettings {
            api_url: self.currency_api_url.clone(),
            redis_url: self.redis_url.clone(),
            cache_ttl: self.rate_cache_ttl,
        }
    }
}
