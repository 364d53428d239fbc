//! Domain models for the pricing service.

pub mod pricing;
pub mod product;
pub mod rate;
pub mod selector;

pub use pricing::PricingResult;
pub use product::{NewProduct, Product, ProductId};
pub use rate::RatePair;
pub use selector::ProviderKind;
