//! Structured error types for pressroom-core.
//!
//! Every store and service operation returns one of these kinds. Nothing is
//! retried internally; callers decide how a kind maps onto their surface
//! (the HTTP layer turns them into status codes).

use thiserror::Error;

/// Boxed source for persistence failures, so adapters can carry their own
/// driver errors without this crate depending on them.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Main error type for pressroom operations
#[derive(Error, Debug)]
pub enum Error {
    /// Referenced identity or email does not exist
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// Uniqueness violation
    #[error("{resource} with {field} '{value}' already exists")]
    Conflict {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    /// Connection, pool, protocol or decode failure in the persistence layer
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] BoxError),
}

impl Error {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn store(source: impl Into<BoxError>) -> Self {
        Self::StoreUnavailable(source.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
