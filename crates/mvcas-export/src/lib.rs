//! XML export for MVCAS stores.
//!
//! Serializes a whole [`CasStore`](mvcas_store::CasStore) to the textual
//! exchange format, optionally strips large binary/integer array element
//! blocks for size-constrained exports, and persists documents as
//! `doc<N>.xml` files.
//!
//! The array element delimiters (`<uima.cas.ByteArray …>` /
//! `</uima.cas.ByteArray>` and the integer-array pair) are an external
//! interface: existing consumers of exported files locate these exact
//! literals, so both the writer and the stripper use them verbatim.

pub mod error;
pub mod export;
pub mod strip;
pub mod writer;

pub use error::{ExportError, ExportResult};
pub use export::export_to_file;
pub use strip::{
    strip_binary_arrays, BYTE_ARRAY_CLOSE, BYTE_ARRAY_OPEN, INTEGER_ARRAY_CLOSE,
    INTEGER_ARRAY_OPEN,
};
pub use writer::{serialize, ExportOptions};
