//! Camera-scoped view naming.
//!
//! A view name combines a camera id and a base name as `cam<id>.<base>`,
//! e.g. `cam0.SCENE`. The derivation is pure and injective as long as base
//! names honor the contract checked by [`validate_base_name`]:
//!
//! - Must be non-empty
//! - Must not contain whitespace
//! - Must not itself start with a `cam<digits>.` prefix (would make the
//!   derived name ambiguous with a differently-scoped view)

use crate::camera::CameraId;
use crate::error::TypeError;

/// Derive the composite view name for `base` scoped to `cam`.
///
/// Pure concatenation: `"cam" + decimal(cam) + "." + base`. Distinct
/// `(base, cam)` pairs never collide for bases honoring the naming contract.
///
/// # Examples
///
/// ```
/// use mvcas_types::{scoped_view_name, CameraId};
///
/// assert_eq!(scoped_view_name("SCENE", CameraId::new(0)), "cam0.SCENE");
/// assert_eq!(scoped_view_name("OBJECTS", CameraId::new(2)), "cam2.OBJECTS");
/// ```
pub fn scoped_view_name(base: &str, cam: CameraId) -> String {
    format!("cam{cam}.{base}")
}

/// Recover `(camera, base)` from a camera-scoped view name.
///
/// Returns `None` for names that do not carry a `cam<digits>.` prefix; such
/// names are unscoped and address the view table directly.
pub fn split_scoped_name(name: &str) -> Option<(CameraId, &str)> {
    let rest = name.strip_prefix("cam")?;
    let dot = rest.find('.')?;
    let (digits, base) = rest.split_at(dot);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let id: u32 = digits.parse().ok()?;
    Some((CameraId::new(id), &base[1..]))
}

/// Validate a base name against the naming contract, returning `Ok(())` if
/// scoping it can never produce an ambiguous composite name.
pub fn validate_base_name(base: &str) -> Result<(), TypeError> {
    if base.is_empty() {
        return Err(TypeError::InvalidBaseName {
            name: base.to_string(),
            reason: "base name must not be empty".into(),
        });
    }

    if base.chars().any(char::is_whitespace) {
        return Err(TypeError::InvalidBaseName {
            name: base.to_string(),
            reason: "must not contain whitespace".into(),
        });
    }

    // A base that already looks camera-scoped would collide with a view
    // scoped to a different camera: scoped("cam1.X", 0) == scoped("X", ...).
    if split_scoped_name(base).is_some() {
        return Err(TypeError::InvalidBaseName {
            name: base.to_string(),
            reason: "must not start with a 'cam<id>.' prefix".into(),
        });
    }

    Ok(())
}
