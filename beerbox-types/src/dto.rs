//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};

/// Payment currency used when the caller does not name one.
pub const DEFAULT_PAYMENT_CURRENCY: &str = "USD";

/// Box size used when the caller does not give a usable quantity.
pub const DEFAULT_BOX_QUANTITY: i64 = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Product DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a new product.
///
/// Capitalized field names are accepted as aliases for older clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Brewery")]
    pub brewery: String,
    #[serde(default, alias = "Country")]
    pub country: String,
    /// Unit price in `currency`
    #[serde(alias = "Price")]
    pub price: f64,
    #[serde(alias = "Currency")]
    pub currency: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Pricing DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query string of a box price request.
///
/// Both fields are kept raw so the defaults can be applied to empty or
/// unparsable values instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoxPriceQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

impl BoxPriceQuery {
    /// Payment currency, defaulting to USD when absent or empty.
    pub fn currency(&self) -> &str {
        match self.currency.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_PAYMENT_CURRENCY,
        }
    }

    /// Box quantity, defaulting to six when absent or not an integer.
    pub fn quantity(&self) -> i64 {
        self.quantity
            .as_deref()
            .and_then(|q| q.trim().parse().ok())
            .unwrap_or(DEFAULT_BOX_QUANTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_price_defaults() {
        let query = BoxPriceQuery::default();
        assert_eq!(query.currency(), "USD");
        assert_eq!(query.quantity(), 6);
    }

    #[test]
    fn test_box_price_empty_and_garbage_fall_back() {
        let query = BoxPriceQuery {
            currency: Some(String::new()),
            quantity: Some("a dozen".into()),
        };
        assert_eq!(query.currency(), "USD");
        assert_eq!(query.quantity(), 6);
    }

    #[test]
    fn test_box_price_explicit_values() {
        let query = BoxPriceQuery {
            currency: Some("MXN".into()),
            quantity: Some("-3".into()),
        };
        assert_eq!(query.currency(), "MXN");
        assert_eq!(query.quantity(), -3);
    }

    #[test]
    fn test_create_request_accepts_capitalized_fields() {
        let req: CreateProductRequest = serde_json::from_str(
            r#"{"Name":"Tecate","Brewery":"Heineken","Country":"Mexico","Price":15.0,"Currency":"MXN"}"#,
        )
        .unwrap();
        assert_eq!(req.name, "Tecate");
        assert_eq!(req.currency, "MXN");
    }
}
