//! # Beerbox Hex
//!
//! Application service layer and HTTP adapter for the beerbox service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (product lookups and box pricing)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `R: ProductRepository` and `P: RateProvider`,
//! allowing different store and rate source implementations to be injected.

pub mod inbound;
pub mod service;


pub use service::PricingService;
