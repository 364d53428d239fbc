//! Pricing Application Service
//!
//! Orchestrates product lookups and currency conversion through the
//! repository and rate provider ports.
//! Contains NO infrastructure logic - pure business orchestration.

use beerbox_types::{
    AppError, CreateProductRequest, NewProduct, PricingResult, Product, ProductId,
    ProductRepository, RatePair, RateProvider,
};
use tracing::debug;

/// Application service for beer and box price operations.
///
/// Generic over `R: ProductRepository` and `P: RateProvider` - both adapters
/// are injected at compile time. This enables:
/// - Swapping stores or rate sources without code changes
/// - Testing with in-memory adapters
/// - Compile-time checks for port implementation
pub struct PricingService<R: ProductRepository, P: RateProvider> {
    repo: R,
    rates: P,
}

impl<R: ProductRepository, P: RateProvider> PricingService<R, P> {
    /// Creates a new pricing service with the given store and rate provider.
    pub fn new(repo: R, rates: P) -> Self {
        Self { repo, rates }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the underlying rate provider.
    pub fn rates(&self) -> &P {
        &self.rates
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Product Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a new product.
    ///
    /// The currency is checked against the rate provider with an identity
    /// lookup before anything is stored, so an unknown currency fails here.
    #[tracing::instrument(skip(self, req), fields(name = %req.name, currency = %req.currency))]
    pub async fn create_product(&self, req: CreateProductRequest) -> Result<Product, AppError> {
        let product = NewProduct::new(req.name, req.brewery, req.country, req.price, req.currency)?;

        let probe = RatePair::new(product.currency.clone(), product.currency.clone());
        self.rates.get_rate(&probe).await?;

        let product = self.repo.create_product(product).await?;
        debug!(id = %product.id, "Product created");
        Ok(product)
    }

    /// Gets a product by ID.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, AppError> {
        self.repo
            .get_product(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or(AppError::ProductNotFound(id)))
    }

    /// Lists all products ordered by id.
    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.repo.list_products().await.map_err(Into::into)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Pricing
    // ─────────────────────────────────────────────────────────────────────────────

    /// Prices `quantity` units of a product in `payment_currency`.
    ///
    /// No conversion happens when the payment currency is the product's own.
    #[tracing::instrument(skip(self))]
    pub async fn price_box(
        &self,
        id: ProductId,
        quantity: i64,
        payment_currency: &str,
    ) -> Result<PricingResult, AppError> {
        let product = self.get_product(id).await?;
        let subtotal = product.price * quantity as f64;

        if product.currency == payment_currency {
            return Ok(PricingResult::new(subtotal));
        }

        let pair = RatePair::new(product.currency, payment_currency);
        let quote = self.rates.get_rate(&pair).await?;
        debug!(%pair, quote, "Converted box price");

        Ok(PricingResult::new(subtotal * quote))
    }
}
