use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid base name: {name}: {reason}")]
    InvalidBaseName { name: String, reason: String },
}
