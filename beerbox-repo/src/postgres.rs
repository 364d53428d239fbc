//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use beerbox_types::{NewProduct, Product, ProductId, ProductRepository, RepoError};

use crate::types::{DbProduct, PRODUCT_COLUMNS};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        execute_migration(
            &pool,
            include_str!("../migrations/0001_create_beers_pg.sql"),
            "0001",
        )
        .await?;
        Ok(Self { pool })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ProductRepository for PostgresRepo {
    async fn create_product(&self, product: NewProduct) -> Result<Product, RepoError> {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO beers (name, brewery, country, currency, price)
               VALUES ($1, $2, $3, $4, $5) RETURNING beer_id"#,
        )
        .bind(&product.name)
        .bind(&product.brewery)
        .bind(&product.country)
        .bind(&product.currency)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(Product::from_parts(ProductId::new(id), product))
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
        let row: Option<DbProduct> = sqlx::query_as(&format!(
            "SELECT {} FROM beers WHERE beer_id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(DbProduct::into_domain))
    }

    async fn list_products(&self) -> Result<Vec<Product>, RepoError> {
        let rows: Vec<DbProduct> = sqlx::query_as(&format!(
            "SELECT {} FROM beers ORDER BY beer_id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbProduct::into_domain).collect())
    }
}
