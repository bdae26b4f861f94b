use thiserror::Error;

use mvcas_types::TypeError;

/// Errors from store operations.
///
/// Absence of a view or payload is never an error; lookups signal it via
/// `Ok(None)`. Errors are reserved for real failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A name failed the view naming contract.
    #[error("invalid view name: {0}")]
    InvalidName(#[from] TypeError),

    /// The host structure rejected an operation.
    #[error("host error: {reason}")]
    Host { reason: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
