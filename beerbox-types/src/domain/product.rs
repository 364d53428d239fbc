//! Product domain model.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Unique identifier for a Product, assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Creates a ProductId from a raw store identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A product (a beer) with a price in its native currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brewery: String,
    pub country: String,
    /// Unit price, denominated in `currency`
    pub price: f64,
    /// Native currency code, compared verbatim
    pub currency: String,
}

impl Product {
    /// Creates a product with all fields specified (for store reconstruction).
    pub fn from_parts(id: ProductId, product: NewProduct) -> Self {
        Self {
            id,
            name: product.name,
            brewery: product.brewery,
            country: product.country,
            price: product.price,
            currency: product.currency,
        }
    }
}

/// A validated product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub brewery: String,
    pub country: String,
    pub price: f64,
    pub currency: String,
}

impl NewProduct {
    /// Builds a product awaiting persistence.
    ///
    /// # Validation
    /// - Name cannot be empty
    /// - Currency cannot be empty
    /// - Price must be a finite, non-negative number
    pub fn new(
        name: String,
        brewery: String,
        country: String,
        price: f64,
        currency: String,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "the name of beer cannot be empty".into(),
            ));
        }

        if currency.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "the currency of beer cannot be empty".into(),
            ));
        }

        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::ValidationError(format!(
                "the price of beer must be a non-negative number, got {}",
                price
            )));
        }

        Ok(Self {
            name,
            brewery,
            country,
            price,
            currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str, price: f64, currency: &str) -> Result<NewProduct, DomainError> {
        NewProduct::new(
            name.to_string(),
            "Cervecería Cuauhtémoc".to_string(),
            "Mexico".to_string(),
            price,
            currency.to_string(),
        )
    }

    #[test]
    fn test_new_product() {
        let product = new_product("Indio", 17.5, "MXN").unwrap();
        assert_eq!(product.name, "Indio");
        assert_eq!(product.currency, "MXN");
    }

    #[test]
    fn test_empty_name_fails() {
        let result = new_product("  ", 1.0, "USD");
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_empty_currency_fails() {
        let result = new_product("Indio", 1.0, "");
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_negative_price_fails() {
        assert!(new_product("Indio", -0.5, "MXN").is_err());
        assert!(new_product("Indio", f64::NAN, "MXN").is_err());
    }

    #[test]
    fn test_zero_price_allowed() {
        assert!(new_product("Free sample", 0.0, "USD").is_ok());
    }

    #[test]
    fn test_product_id_parse() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::new(42));
        assert!("forty-two".parse::<ProductId>().is_err());
    }
}
