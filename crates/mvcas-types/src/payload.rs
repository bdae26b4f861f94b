use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix of every synthesized MIME tag.
const MIME_PREFIX: &str = "application/x-";

/// An opaque binary payload stored inside a view.
///
/// The byte sequence is never interpreted by the store. The optional
/// dimension vector describes the layout of the bytes (e.g. point-cloud
/// width and height) and is serialized as the integer-array element adjacent
/// to the binary-array element in exports; an empty vector means "no
/// dimension block".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    bytes: Vec<u8>,
    dims: Vec<i32>,
}

impl Payload {
    /// Create a payload from raw bytes, with no dimension block.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            dims: Vec::new(),
        }
    }

    /// Create a payload carrying both raw bytes and a dimension vector.
    pub fn with_dims(bytes: Vec<u8>, dims: Vec<i32>) -> Self {
        Self { bytes, dims }
    }

    /// The empty payload (no bytes, no dimensions).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The raw byte sequence.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The dimension vector. Empty when the payload carries none.
    pub fn dims(&self) -> &[i32] {
        &self.dims
    }

    /// Number of payload bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the payload holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Self-describing content tag of a stored payload.
///
/// Tags are synthesized as `application/x-<hint>`, where the hint is
/// conventionally the unscoped base name of the view the payload lives in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MimeTag(String);

impl MimeTag {
    /// Synthesize a tag from a hint string.
    ///
    /// # Examples
    ///
    /// ```
    /// use mvcas_types::MimeTag;
    ///
    /// let tag = MimeTag::from_hint("SCENE");
    /// assert_eq!(tag.as_str(), "application/x-SCENE");
    /// ```
    pub fn from_hint(hint: &str) -> Self {
        Self(format!("{MIME_PREFIX}{hint}"))
    }

    /// The full tag string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hint the tag was synthesized from.
    pub fn hint(&self) -> &str {
        self.0.strip_prefix(MIME_PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for MimeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
