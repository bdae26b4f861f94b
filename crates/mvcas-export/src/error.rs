use thiserror::Error;

use mvcas_store::StoreError;

/// Errors from export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export text contains an array block whose close tag never
    /// appears after its open tag (truncated or hand-edited text).
    #[error("malformed export text: unterminated {element} block at offset {offset}")]
    MalformedExport { element: String, offset: usize },

    /// Reading the store snapshot failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error while writing the export file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
