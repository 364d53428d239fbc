//! Error types for the pricing service.

use crate::domain::{ProductId, RatePair};

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,
}

/// Errors returned by rate providers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RateError {
    /// Network failure, unexpected status code or undecodable payload.
    #[error("currency api: {0}")]
    Transport(String),

    /// The source answered but reported a failure (e.g. an invalid currency code).
    #[error("currency api rejected the request: {0}")]
    UpstreamRejected(String),

    #[error("not found a currency rate for {0}")]
    RateNotFound(RatePair),
}

/// Errors returned by cache stores. Never escapes the caching decorator.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache backend error: {0}")]
    Backend(String),
}

/// Errors raised while assembling adapters at startup.
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("selector \"{selector}\" is not supported by {component}")]
    UnsupportedSelector {
        selector: String,
        component: &'static str,
    },

    #[error("missing required setting: {0}")]
    MissingSetting(&'static str),

    #[error("failed to initialize {0}")]
    Init(String),
}

/// Application-level errors.
///
/// Keeps the underlying kind visible so the transport layer can map it.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("not found beer with id '{0}'")]
    ProductNotFound(ProductId),

    #[error(transparent)]
    Rate(#[from] RateError),

    #[error(transparent)]
    Repo(RepoError),
}

impl AppError {
    /// True for a missing product or a missing rate pair.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::ProductNotFound(_)
                | AppError::Rate(RateError::RateNotFound(_))
                | AppError::Repo(RepoError::NotFound)
        )
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(DomainError::ValidationError(msg)) => AppError::Validation(msg),
            other => AppError::Repo(other),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => AppError::Validation(msg),
        }
    }
}
