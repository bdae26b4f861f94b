//! Foundation types for the Multi-View CAS (MVCAS).
//!
//! This crate provides the core naming and payload types used throughout the
//! MVCAS system. Every other MVCAS crate depends on `mvcas-types`.
//!
//! # Key Types
//!
//! - [`CameraId`] — Numeric camera identifier used to scope view names
//! - [`Payload`] — Opaque binary payload with an optional dimension vector
//! - [`MimeTag`] — Self-describing `application/x-<hint>` content tag
//!
//! # Key Functions
//!
//! - [`scoped_view_name`] — Derive the `cam<id>.<base>` composite view name
//! - [`split_scoped_name`] — Recover `(camera, base)` from a scoped name
//! - [`validate_base_name`] — Check a base name against the naming contract

pub mod camera;
pub mod error;
pub mod name;
pub mod payload;

pub use camera::CameraId;
pub use error::TypeError;
pub use name::{scoped_view_name, split_scoped_name, validate_base_name};
pub use payload::{MimeTag, Payload};
