//! Service error types.

use thiserror::Error;

use duns_core::dun::DunError;
use duns_core::storage::RepositoryError;

/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors returned to consumers of the dun service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Invalid(#[from] DunError),

    #[error("Dun not found: {id}")]
    NotFound { id: String },
}
