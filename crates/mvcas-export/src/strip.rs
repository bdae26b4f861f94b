//! Text-level removal of large array element blocks from export text.
//!
//! The exchange format marks binary payloads and their dimension vectors
//! with fixed element tags. For size-constrained exports these blocks are
//! excised from the serialized text: the scan repeatedly locates the first
//! byte-array open-tag prefix, erases through the matching close tag, and
//! removes one adjacent integer-array block if present, until no byte-array
//! block remains. Text without any such block passes through unchanged.
//!
//! An open tag with no close tag at or after it makes the text malformed;
//! the scan reports [`ExportError::MalformedExport`] instead of running off
//! the end.

use crate::error::{ExportError, ExportResult};

/// Open-tag prefix of a binary array element.
pub const BYTE_ARRAY_OPEN: &str = "<uima.cas.ByteArray";
/// Close tag of a binary array element.
pub const BYTE_ARRAY_CLOSE: &str = "</uima.cas.ByteArray>";
/// Open-tag prefix of an integer array element.
pub const INTEGER_ARRAY_OPEN: &str = "<uima.cas.IntegerArray";
/// Close tag of an integer array element.
pub const INTEGER_ARRAY_CLOSE: &str = "</uima.cas.IntegerArray>";

/// Remove every binary-array block, and one adjacent integer-array block
/// per binary block, from `text`.
///
/// Returns the input unchanged when it contains no binary-array block.
pub fn strip_binary_arrays(text: &str) -> ExportResult<String> {
    if !text.contains(BYTE_ARRAY_OPEN) {
        return Ok(text.to_string());
    }

    let mut out = text.to_string();
    while let Some(open) = out.find(BYTE_ARRAY_OPEN) {
        erase_block(&mut out, open, "uima.cas.ByteArray", BYTE_ARRAY_CLOSE)?;

        if let Some(int_open) = out.find(INTEGER_ARRAY_OPEN) {
            erase_block(&mut out, int_open, "uima.cas.IntegerArray", INTEGER_ARRAY_CLOSE)?;
        }
    }
    Ok(out)
}

/// Erase the half-open range from `open` through the first `close_tag`
/// occurring at or after `open`, close tag included.
fn erase_block(
    text: &mut String,
    open: usize,
    element: &str,
    close_tag: &str,
) -> ExportResult<()> {
    let close = text[open..]
        .find(close_tag)
        .map(|offset| open + offset)
        .ok_or_else(|| ExportError::MalformedExport {
            element: element.to_string(),
            offset: open,
        })?;
    text.replace_range(open..close + close_tag.len(), "");
    Ok(())
}
