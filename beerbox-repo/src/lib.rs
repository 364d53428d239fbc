//! # Beerbox Repository
//!
//! Concrete product stores (adapters) for the beerbox service.
//! Every store implements the `ProductRepository` port; [`build_repo`]
//! picks one from a [`ProviderKind`] selector at startup.

use async_trait::async_trait;
use beerbox_types::{
    AssemblyError, NewProduct, Product, ProductId, ProductRepository, ProviderKind, RepoError,
};
use tracing::info;

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "postgres", feature = "sqlite"))]
mod types;

#[cfg(feature = "sqlite")]
#[cfg(test)]
mod sqlite_tests;

pub use memory::MemoryProductRepo;
#[cfg(feature = "postgres")]
pub use postgres::PostgresRepo;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepo;

/// Unified repository wrapper over every compiled-in store.
pub enum Repo {
    Memory(MemoryProductRepo),
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteRepo),
    #[cfg(feature = "postgres")]
    Postgres(PostgresRepo),
}

impl Repo {
    /// Short name for logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Repo::Memory(_) => "memory",
            #[cfg(feature = "sqlite")]
            Repo::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Repo::Postgres(_) => "postgres",
        }
    }
}

/// Build and initialize a product store.
///
/// - `Memory` returns a store seeded with the sample beers.
/// - `Sql` connects to `database_url` and runs migrations. The URL scheme
///   picks the driver, which must be compiled in.
///
/// # Examples
///
/// ```ignore
/// let repo = build_repo(ProviderKind::Memory, None).await?;
///
/// // SQLite (with `sqlite` feature)
/// let repo = build_repo(ProviderKind::Sql, Some("sqlite://beers.db?mode=rwc")).await?;
/// ```
pub async fn build_repo(
    kind: ProviderKind,
    database_url: Option<&str>,
) -> Result<Repo, AssemblyError> {
    match kind {
        ProviderKind::Memory => {
            info!("Using in-memory product store with sample data");
            Ok(Repo::Memory(MemoryProductRepo::with_sample_data()))
        }
        ProviderKind::Sql => {
            let url = database_url.ok_or(AssemblyError::MissingSetting("DATABASE_URL"))?;
            connect_sql(url).await
        }
        other => Err(AssemblyError::UnsupportedSelector {
            selector: other.to_string(),
            component: "product repository factory",
        }),
    }
}

async fn connect_sql(url: &str) -> Result<Repo, AssemblyError> {
    let scheme = url.split(':').next().unwrap_or_default();
    match scheme {
        #[cfg(feature = "sqlite")]
        "sqlite" => {
            let repo = SqliteRepo::new(url)
                .await
                .map_err(|e| AssemblyError::Init(format!("sqlite: {}", e)))?;
            info!("Connected to SQLite product store");
            Ok(Repo::Sqlite(repo))
        }
        #[cfg(feature = "postgres")]
        "postgres" | "postgresql" => {
            let repo = PostgresRepo::new(url)
                .await
                .map_err(|e| AssemblyError::Init(format!("postgres: {}", e)))?;
            info!("Connected to PostgreSQL product store");
            Ok(Repo::Postgres(repo))
        }
        _ => Err(AssemblyError::UnsupportedSelector {
            selector: format!("{}://", scheme),
            component: "sql product store (driver not compiled in)",
        }),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Implement ProductRepository for Repo (delegation)
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ProductRepository for Repo {
    async fn create_product(&self, product: NewProduct) -> Result<Product, RepoError> {
        match self {
            Repo::Memory(r) => r.create_product(product).await,
            #[cfg(feature = "sqlite")]
            Repo::Sqlite(r) => r.create_product(product).await,
            #[cfg(feature = "postgres")]
            Repo::Postgres(r) => r.create_product(product).await,
        }
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
        match self {
            Repo::Memory(r) => r.get_product(id).await,
            #[cfg(feature = "sqlite")]
            Repo::Sqlite(r) => r.get_product(id).await,
            #[cfg(feature = "postgres")]
            Repo::Postgres(r) => r.get_product(id).await,
        }
    }

    async fn list_products(&self) -> Result<Vec<Product>, RepoError> {
        match self {
            Repo::Memory(r) => r.list_products().await,
            #[cfg(feature = "sqlite")]
            Repo::Sqlite(r) => r.list_products().await,
            #[cfg(feature = "postgres")]
            Repo::Postgres(r) => r.list_products().await,
        }
    }
}
