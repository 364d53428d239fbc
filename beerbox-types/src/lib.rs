//! # Beerbox Types
//!
//! Domain types and port traits for the beerbox pricing service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Product, RatePair, PricingResult, ProviderKind)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{NewProduct, PricingResult, Product, ProductId, ProviderKind, RatePair};
pub use dto::*;
pub use error::{AppError, AssemblyError, CacheError, DomainError, RateError, RepoError};
pub use ports::{CacheStore, ProductRepository, RateProvider};
