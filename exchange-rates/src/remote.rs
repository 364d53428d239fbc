//! Rate provider backed by a currencylayer-style REST API.
//!
//! One GET per lookup: `<base_url>?source=<source>&currencies=<target>`.
//! Query parameters already on the base URL (an access key, typically) are kept.

use std::collections::HashMap;

use async_trait::async_trait;
use beerbox_types::{RateError, RatePair, RateProvider};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Payload returned by the rate source.
#[derive(Debug, Deserialize)]
struct CurrencyInfo {
    success: bool,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    quotes: HashMap<String, f64>,
    #[serde(default)]
    error: Option<UpstreamError>,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    info: Option<String>,
}

impl UpstreamError {
    fn describe(&self) -> String {
        match (&self.info, self.code) {
            (Some(info), _) => info.clone(),
            (None, Some(code)) => format!("error code {}", code),
            (None, None) => "unspecified error".to_string(),
        }
    }
}

/// Remote rate provider. Does not retry.
#[derive(Debug, Clone)]
pub struct RemoteRateProvider {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteRateProvider {
    /// Creates a provider that sends requests through `http`.
    ///
    /// Pass the process-wide client so connections are pooled.
    pub fn new(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RateProvider for RemoteRateProvider {
    #[instrument(skip(self), fields(pair = %pair))]
    async fn get_rate(&self, pair: &RatePair) -> Result<f64, RateError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("source", pair.source.as_str()),
                ("currencies", pair.target.as_str()),
            ])
            .send()
            .await
            .map_err(|e| RateError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RateError::Transport(format!(
                "unexpected code '{}'",
                status.as_u16()
            )));
        }

        let info: CurrencyInfo = response
            .json()
            .await
            .map_err(|e| RateError::Transport(format!("invalid payload: {}", e)))?;

        if !info.success {
            let reason = info
                .error
                .as_ref()
                .map(UpstreamError::describe)
                .unwrap_or_else(|| "unspecified error".to_string());
            return Err(RateError::UpstreamRejected(reason));
        }

        debug!(source = ?info.source, quotes = info.quotes.len(), "Rate source answered");

        let key = pair.quote_key();
        info.quotes
            .get(&key)
            .copied()
            .ok_or_else(|| RateError::RateNotFound(pair.clone()))
    }
}
