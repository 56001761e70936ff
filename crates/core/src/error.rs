//! Catalog error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the catalog layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// `NotFound` and `InvalidCategory` are expected outcomes of externally supplied
/// input; `Internal` is the only variant that represents a fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No product carries the requested identifier (e.g. a stale link).
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// A category label outside the known enumeration.
    #[error("unknown category: {0}")]
    InvalidCategory(String),

    /// An identifier was malformed (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Catalog data violated an invariant (duplicate id, rating out of range, ...).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Unexpected failure while composing a result (e.g. store unavailable).
    #[error("internal fault: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn invalid_category(label: impl Into<String>) -> Self {
        Self::InvalidCategory(label.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// True for the expected "no such product" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
