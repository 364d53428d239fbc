//! # Beerbox Client SDK
//!
//! A typed Rust client for the Beerbox API.

use beerbox_types::{CreateProductRequest, PricingResult, Product, ProductId};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

/// Beerbox API client.
pub struct BeerboxClient {
    base_url: String,
    http: Client,
}

impl BeerboxClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Client::new())
    }

    /// Creates a client that reuses an existing `reqwest::Client`.
    pub fn with_http_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Creates a new beer.
    pub async fn create_beer(&self, req: &CreateProductRequest) -> Result<Product, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/beers", self.base_url))
            .json(req)
            .send()
            .await?;
        handle_response(resp).await
    }

    /// Gets a beer by ID.
    pub async fn get_beer(&self, id: ProductId) -> Result<Product, ClientError> {
        self.get(&format!("/api/beers/{}", id), &[]).await
    }

    /// Lists all beers.
    pub async fn list_beers(&self) -> Result<Vec<Product>, ClientError> {
        self.get("/api/beers", &[]).await
    }

    /// Prices a box of beers.
    ///
    /// Omitted parameters fall back to the server defaults (six units, USD).
    pub async fn box_price(
        &self,
        id: ProductId,
        currency: Option<&str>,
        quantity: Option<i64>,
    ) -> Result<PricingResult, ClientError> {
        let mut query = Vec::new();
        if let Some(currency) = currency {
            query.push(("currency", currency.to_string()));
        }
        if let Some(quantity) = quantity {
            query.push(("quantity", quantity.to_string()));
        }
        self.get(&format!("/api/beers/{}/boxprice", id), &query)
            .await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        handle_response(resp).await
    }
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    let body = resp.text().await?;
    if status.is_success() {
        return Ok(serde_json::from_str(&body)?);
    }

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body);
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
