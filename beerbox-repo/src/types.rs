//! Database row types shared by the SQLite and PostgreSQL adapters.

use sqlx::FromRow;

use beerbox_types::{NewProduct, Product, ProductId};

/// Columns selected by every product query, in `DbProduct` field order.
pub const PRODUCT_COLUMNS: &str = "beer_id AS id, name, brewery, country, price, currency";

/// Product row from database.
#[derive(FromRow)]
pub struct DbProduct {
    pub id: i64,
    pub name: String,
    pub brewery: String,
    pub country: String,
    pub price: f64,
    pub currency: String,
}

impl DbProduct {
    pub fn into_domain(self) -> Product {
        Product::from_parts(
            ProductId::new(self.id),
            NewProduct {
                name: self.name,
                brewery: self.brewery,
                country: self.country,
                price: self.price,
                currency: self.currency,
            },
        )
    }
}
