//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use beerbox_types::{NewProduct, ProductId, ProductRepository, ProviderKind};

    use crate::{Repo, SqliteRepo, build_repo};

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn beer(name: &str, price: f64, currency: &str) -> NewProduct {
        NewProduct::new(
            name.to_string(),
            "Cervecería Test".to_string(),
            "Mexico".to_string(),
            price,
            currency.to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_product() {
        let repo = setup_repo().await;

        let product = repo.create_product(beer("Indio", 17.5, "MXN")).await.unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Indio");
        assert_eq!(product.price, 17.5);
        assert_eq!(product.currency, "MXN");
    }

    #[tokio::test]
    async fn test_get_product() {
        let repo = setup_repo().await;
        let created = repo.create_product(beer("Bohemia", 21.0, "MXN")).await.unwrap();

        let fetched = repo.get_product(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.brewery, "Cervecería Test");
        assert_eq!(fetched.country, "Mexico");
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let repo = setup_repo().await;

        let result = repo.get_product(ProductId::new(42)).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_products() {
        let repo = setup_repo().await;
        assert!(repo.list_products().await.unwrap().is_empty());

        repo.create_product(beer("Corona", 1.5, "USD")).await.unwrap();
        repo.create_product(beer("Victoria", 19.0, "MXN")).await.unwrap();

        let products = repo.list_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Corona");
        assert_eq!(products[1].name, "Victoria");
        assert!(products[0].id < products[1].id);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let repo = setup_repo().await;

        let a = repo.create_product(beer("a", 1.0, "USD")).await.unwrap();
        let b = repo.create_product(beer("b", 1.0, "USD")).await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_build_repo_selects_sqlite() {
        let repo = build_repo(ProviderKind::Sql, Some("sqlite::memory:"))
            .await
            .unwrap();

        assert!(matches!(repo, Repo::Sqlite(_)));
        assert!(repo.list_products().await.unwrap().is_empty());
    }
}
