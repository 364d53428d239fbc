//! Repository port trait.
//!
//! Adapters (Memory, SQLite, Postgres) implement this trait.

use crate::domain::{NewProduct, Product, ProductId};
use crate::error::RepoError;

/// Product storage port.
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persists a product and returns it with its assigned id.
    async fn create_product(&self, product: NewProduct) -> Result<Product, RepoError>;

    /// Gets a product by ID.
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepoError>;

    /// Lists all products ordered by id.
    async fn list_products(&self) -> Result<Vec<Product>, RepoError>;
}
