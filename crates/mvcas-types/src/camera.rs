use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a camera feeding the analysis structure.
///
/// Camera ids scope view names: the same logical view (e.g. the scene) exists
/// once per camera, under a name derived by [`scoped_view_name`]. Id 0 is the
/// unscoped default used by single-camera pipelines.
///
/// [`scoped_view_name`]: crate::name::scoped_view_name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CameraId(u32);

impl CameraId {
    /// The unscoped/default camera id (0).
    pub const UNSCOPED: CameraId = CameraId(0);

    /// Create a camera id from its raw numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw numeric value.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns `true` if this is the unscoped default camera.
    pub const fn is_unscoped(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CameraId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<CameraId> for u32 {
    fn from(id: CameraId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscoped_is_zero() {
        assert_eq!(CameraId::UNSCOPED, CameraId::new(0));
        assert!(CameraId::UNSCOPED.is_unscoped());
        assert!(!CameraId::new(3).is_unscoped());
    }

    #[test]
    fn display_is_bare_decimal() {
        assert_eq!(CameraId::new(0).to_string(), "0");
        assert_eq!(CameraId::new(17).to_string(), "17");
    }

    #[test]
    fn ordering_follows_numeric_value() {
        assert!(CameraId::new(1) < CameraId::new(2));
    }

    #[test]
    fn u32_roundtrip() {
        let id: CameraId = 42u32.into();
        assert_eq!(u32::from(id), 42);
    }

    #[test]
    fn serde_roundtrip() {
        let id = CameraId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        let parsed: CameraId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
