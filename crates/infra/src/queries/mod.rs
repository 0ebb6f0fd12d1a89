//! Request-level operations over the document stores.
//!
//! Each component is built once with the store handles it needs and is cheap
//! to clone into request handlers.

pub mod comments;
pub mod item_comments;
pub mod stats;

use thiserror::Error;

use anythink_core::DomainError;

use crate::store::StoreError;

pub use comments::CommentCatalog;
pub use item_comments::RecentItemComments;
pub use stats::MarketplaceStatistics;

/// Failure of a query component, already classified for the HTTP layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Malformed identifier; detected before any store access.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("not found")]
    NotFound,

    /// Input failed a domain rule (e.g. blank comment body).
    #[error("validation failed: {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DomainError> for QueryError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidId(msg) => QueryError::InvalidId(msg),
            DomainError::NotFound => QueryError::NotFound,
            DomainError::Validation { field, message } => QueryError::Validation { field, message },
        }
    }
}
