//! Fixed in-memory rate table.

use std::collections::HashMap;

use async_trait::async_trait;
use beerbox_types::{RateError, RatePair, RateProvider};

/// Sample table used by default: enough to price the sample products offline.
const SAMPLE_RATES: &[(&str, &str, f64)] = &[
    ("USD", "MXN", 20.38),
    ("MXN", "USD", 0.049),
    ("USD", "USD", 1.0),
    ("MXN", "MXN", 1.0),
];

/// Rate provider backed by a table seeded once at construction.
///
/// Never touches network or disk. Lookups are exact on the ordered pair.
#[derive(Debug, Clone)]
pub struct MemoryRateProvider {
    rates: HashMap<RatePair, f64>,
}

impl MemoryRateProvider {
    /// Creates a table from `(pair, quote)` entries.
    pub fn new(rates: impl IntoIterator<Item = (RatePair, f64)>) -> Self {
        Self {
            rates: rates.into_iter().collect(),
        }
    }

    /// Creates a table with no entries; every lookup is a miss.
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for MemoryRateProvider {
    fn default() -> Self {
        SAMPLE_RATES
            .iter()
            .map(|&(source, target, quote)| (RatePair::new(source, target), quote))
            .collect()
    }
}

impl FromIterator<(RatePair, f64)> for MemoryRateProvider {
    fn from_iter<I: IntoIterator<Item = (RatePair, f64)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[async_trait]
impl RateProvider for MemoryRateProvider {
    async fn get_rate(&self, pair: &RatePair) -> Result<f64, RateError> {
        self.rates
            .get(pair)
            .copied()
            .ok_or_else(|| RateError::RateNotFound(pair.clone()))
    }
}
