//! Ordered currency pair used as a rate lookup and cache key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered (source, target) currency pair.
///
/// Codes are compared verbatim: no case folding, no trimming. The quote for
/// `(A, B)` says nothing about `(B, A)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RatePair {
    pub source: String,
    pub target: String,
}

impl RatePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Key used by currencylayer-style sources in their `quotes` map, e.g. `USDMXN`.
    pub fn quote_key(&self) -> String {
        format!("{}{}", self.source, self.target)
    }

    /// Key used in cache stores, e.g. `currency:USD/MXN`.
    pub fn cache_key(&self) -> String {
        format!("currency:{}/{}", self.source, self.target)
    }
}

impl fmt::Display for RatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_ordered() {
        assert_ne!(RatePair::new("USD", "MXN"), RatePair::new("MXN", "USD"));
        assert_ne!(
            RatePair::new("USD", "MXN").cache_key(),
            RatePair::new("MXN", "USD").cache_key()
        );
    }

    #[test]
    fn test_no_case_folding() {
        assert_ne!(RatePair::new("usd", "MXN"), RatePair::new("USD", "MXN"));
    }

    #[test]
    fn test_quote_key_concatenates() {
        assert_eq!(RatePair::new("USD", "MXN").quote_key(), "USDMXN");
    }

    #[test]
    fn test_cache_keys_do_not_collide_across_code_lengths() {
        let a = RatePair::new("AB", "C");
        let b = RatePair::new("A", "BC");
        assert_eq!(a.quote_key(), b.quote_key());
        assert_ne!(a.cache_key(), b.cache_key());
    }
}
