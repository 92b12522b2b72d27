//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant represents rejected input or a violated business rule, never
/// a transient infrastructure failure — those belong to the adapters behind
/// the repository ports. Constructors and services raise on the first violated
/// rule; there is no aggregation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A company field or format rule was violated.
    #[error("invalid company: {0}")]
    InvalidCompany(String),

    /// A product rule was violated, or the referenced company is absent.
    #[error("invalid product: {0}")]
    InvalidProduct(String),

    /// A non-positive amount or an unsupported currency.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// An invalid stock delta, an absent company/product/item, or
    /// insufficient stock on removal.
    #[error("invalid inventory: {0}")]
    InvalidInventory(String),

    /// A requested record was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// A save-time conflict surfaced by a persistence adapter (e.g. a
    /// duplicate natural key under a unique constraint).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_company(msg: impl Into<String>) -> Self {
        Self::InvalidCompany(msg.into())
    }

    pub fn invalid_product(msg: impl Into<String>) -> Self {
        Self::InvalidProduct(msg.into())
    }

    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::InvalidPrice(msg.into())
    }

    pub fn invalid_inventory(msg: impl Into<String>) -> Self {
        Self::InvalidInventory(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
