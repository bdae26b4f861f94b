//! Multi-view store core for MVCAS.
//!
//! This crate implements the store façade over a shared analysis structure:
//! named, isolated views holding one tagged binary payload each, created
//! lazily and addressed by camera-scoped names.
//!
//! # Architecture
//!
//! - [`ViewHost`] is the capability interface to the host structure. The
//!   core assumes nothing about the host beyond its operations.
//! - [`InMemoryCas`] is the `HashMap`-based host backend for tests and
//!   embedding.
//! - [`CasStore`] is the façade: view registry, payload store, and the
//!   camera-scoped convenience layer, including the scene accessor.
//! - [`CameraRegistry`] maps analysis-engine identifiers to the camera ids
//!   they registered. It is an owned, injectable object, not process-global
//!   state.
//!
//! # Design Rules
//!
//! 1. Views are immutable once published: a write swaps a complete
//!    replacement record into the table, so lock-free readers see either
//!    the pre-write or post-write state, never a torn intermediate.
//! 2. All mutation serializes through the store's single write mutex;
//!    reads never take it.
//! 3. Absence is a normal outcome (`Ok(None)`/`Ok(false)`), never an error.
//! 4. The store never interprets payload bytes.

pub mod error;
pub mod memory;
pub mod registry;
pub mod scene;
pub mod store;
pub mod traits;
pub mod view;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryCas;
pub use registry::CameraRegistry;
pub use scene::{
    Scene, VIEW_CAMERA_INFO, VIEW_CLOUD, VIEW_COLOR_IMAGE, VIEW_DEPTH_IMAGE, VIEW_OBJECTS,
    VIEW_SCENE,
};
pub use store::CasStore;
pub use traits::ViewHost;
pub use view::{View, ViewHandle};
