use std::sync::{Arc, Mutex};

use tracing::debug;

use mvcas_types::{scoped_view_name, validate_base_name, CameraId, MimeTag, Payload};

use crate::error::StoreResult;
use crate::memory::InMemoryCas;
use crate::traits::ViewHost;
use crate::view::ViewHandle;

/// Façade over a host analysis structure.
///
/// `CasStore` is the single entry point for view lookup, lazy creation, and
/// payload writes. One store may be written from multiple threads while
/// being read for serialization: reads go straight to the host and are
/// lock-free relative to each other, while every mutation serializes through
/// the store's write mutex. Because the host publishes immutable view
/// records, a reader racing a writer sees either the pre-write or post-write
/// state of a view, never a partial one.
pub struct CasStore {
    host: Arc<dyn ViewHost>,
    /// Serializes create/write operations. Held for the whole duration of
    /// `set_payload` and `get_or_create_view`, released on all exit paths
    /// by the scoped guard.
    write_lock: Mutex<()>,
}

impl CasStore {
    /// Create a store façade over the given host.
    pub fn new(host: Arc<dyn ViewHost>) -> Self {
        Self {
            host,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store backed by a fresh [`InMemoryCas`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCas::new()))
    }

    /// The underlying host.
    pub fn host(&self) -> &Arc<dyn ViewHost> {
        &self.host
    }

    /// Returns `true` iff a view with exactly `name` currently exists.
    ///
    /// Never creates a view as a side effect.
    pub fn has_view(&self, name: &str) -> StoreResult<bool> {
        let found = self.host.view(name)?.is_some();
        if found {
            debug!(view = name, "got view");
        } else {
            debug!(view = name, "no view");
        }
        Ok(found)
    }

    /// Return the view named `name`, creating an empty one if absent.
    ///
    /// Creation runs under the write mutex, so two concurrent creates for
    /// the same name are serialized and can never produce duplicate views.
    pub fn get_or_create_view(&self, name: &str) -> StoreResult<ViewHandle> {
        if let Some(view) = self.host.view(name)? {
            return Ok(view);
        }
        let _guard = self.write_lock.lock().expect("lock poisoned");
        self.host.create_view(name)
    }

    /// The current payload of the view named `name`.
    ///
    /// Returns `Ok(None)` when no such view exists; absence is a normal
    /// outcome. A view that was created but never written reports the empty
    /// payload.
    pub fn payload(&self, name: &str) -> StoreResult<Option<Payload>> {
        match self.host.view(name)? {
            Some(view) => {
                debug!(view = name, "got view");
                Ok(Some(view.payload().cloned().unwrap_or_default()))
            }
            None => {
                debug!(view = name, "no view");
                Ok(None)
            }
        }
    }

    /// Store `payload` in the view named `name`, replacing any prior
    /// payload, and record the tag `application/x-<tag_hint>` with it.
    ///
    /// The view is created if it does not exist. The whole create-or-replace
    /// step runs under the write mutex and the host publishes the complete
    /// record atomically; this is the only mutating entry point.
    ///
    /// The hint is conventionally the unscoped base name of the view;
    /// divergent hints are allowed and simply yield a tag that does not
    /// match the view name.
    pub fn set_payload(&self, name: &str, payload: Payload, tag_hint: &str) -> StoreResult<ViewHandle> {
        let _guard = self.write_lock.lock().expect("lock poisoned");
        let tag = MimeTag::from_hint(tag_hint);
        debug!(view = name, tag = tag.as_str(), "set payload");
        self.host.set_payload(name, payload, &tag)
    }

    /// Camera-scoped read: the payload of `base` scoped to `cam`.
    ///
    /// Validates the base name against the naming contract before deriving
    /// the composite view name.
    pub fn scoped_payload(&self, base: &str, cam: CameraId) -> StoreResult<Option<Payload>> {
        validate_base_name(base)?;
        self.payload(&scoped_view_name(base, cam))
    }

    /// Camera-scoped write: store `payload` under `base` scoped to `cam`,
    /// tagging it with the base name.
    pub fn set_scoped_payload(
        &self,
        base: &str,
        cam: CameraId,
        payload: Payload,
    ) -> StoreResult<ViewHandle> {
        validate_base_name(base)?;
        self.set_payload(&scoped_view_name(base, cam), payload, base)
    }

    /// Snapshot of all current views, sorted by name.
    pub fn views(&self) -> StoreResult<Vec<ViewHandle>> {
        self.host.views()
    }
}

impl Default for CasStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for CasStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CasStore").finish_non_exhaustive()
    }
}
