//! In-memory product store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use beerbox_types::{NewProduct, Product, ProductId, ProductRepository, RepoError};

/// Products kept in a concurrent map, lost on restart.
///
/// Ids are handed out from a counter that always stays above the largest
/// stored id, so seeded and created products never collide.
#[derive(Debug, Default)]
pub struct MemoryProductRepo {
    products: DashMap<ProductId, Product>,
    last_id: AtomicI64,
}

impl MemoryProductRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the two sample beers with ids 1 and 2.
    pub fn with_sample_data() -> Self {
        let repo = Self::new();
        let samples = [
            ("Budweiser", "Anheuser-Busch", "USA", 2.0, "USD"),
            ("Indio", "Cervecería Cuauhtémoc Moctezuma", "Mexico", 17.5, "MXN"),
        ];
        for (name, brewery, country, price, currency) in samples {
            repo.insert(NewProduct {
                name: name.into(),
                brewery: brewery.into(),
                country: country.into(),
                price,
                currency: currency.into(),
            });
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn insert(&self, product: NewProduct) -> Product {
        let id = ProductId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let product = Product::from_parts(id, product);
        self.products.insert(id, product.clone());
        product
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepo {
    async fn create_product(&self, product: NewProduct) -> Result<Product, RepoError> {
        Ok(self.insert(product))
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
        Ok(self.products.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_products(&self) -> Result<Vec<Product>, RepoError> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;
    use std::sync::Arc;

    fn lager(name: &str) -> NewProduct {
        NewProduct::new(
            name.into(),
            "Test Brewery".into(),
            "Chile".into(),
            3.5,
            "CLP".into(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_sample_data() {
        let repo = MemoryProductRepo::with_sample_data();
        let products = repo.list_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId::new(1));
        assert_eq!(products[0].currency, "USD");
        assert_eq!(products[0].price, 2.0);
        assert_eq!(products[1].id, ProductId::new(2));
        assert_eq!(products[1].currency, "MXN");
        assert_eq!(products[1].price, 17.5);
    }

    #[tokio::test]
    async fn test_created_ids_follow_seeded_ids() {
        let repo = MemoryProductRepo::with_sample_data();
        let created = repo.create_product(lager("Kunstmann")).await.unwrap();

        assert_eq!(created.id, ProductId::new(3));
        assert_eq!(repo.len(), 3);
    }

    #[tokio::test]
    async fn test_get_product() {
        let repo = MemoryProductRepo::new();
        let created = repo.create_product(lager("Austral")).await.unwrap();

        let fetched = repo.get_product(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert!(repo.get_product(ProductId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = MemoryProductRepo::new();
        for name in ["a", "b", "c", "d"] {
            repo.create_product(lager(name)).await.unwrap();
        }

        let ids: Vec<i64> = repo
            .list_products()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let repo = Arc::new(MemoryProductRepo::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create_product(lager(&format!("beer-{i}")))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }
        assert_eq!(repo.len(), 32);
    }
}
