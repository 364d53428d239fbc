//! Box pricing result.

use serde::{Deserialize, Serialize};

/// Total price of a box, in the payment currency.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingResult {
    #[serde(rename = "Price Total")]
    pub price_total: f64,
}

impl PricingResult {
    pub fn new(price_total: f64) -> Self {
        Self { price_total }
    }
}
