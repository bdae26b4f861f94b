use mvcas_types::{MimeTag, Payload};

use crate::error::StoreResult;
use crate::view::ViewHandle;

/// Capability interface to the host analysis structure.
///
/// The store core consumes the host exclusively through these operations and
/// assumes nothing about its internal representation. All implementations
/// must satisfy these invariants:
///
/// - View names are unique within a host; creating a view that already
///   exists returns the existing one (idempotent get-or-create).
/// - Published view records are immutable; a write replaces the record for
///   its name in a single atomic step, so concurrent readers see either the
///   pre-write or post-write state.
/// - Absence is signaled via `Ok(None)`, never an error.
pub trait ViewHost: Send + Sync {
    /// Create an empty view bound to `name`, or return the existing view.
    fn create_view(&self, name: &str) -> StoreResult<ViewHandle>;

    /// Look up a view by exact name. Never creates as a side effect.
    ///
    /// Returns `Ok(None)` if no view with that name exists.
    fn view(&self, name: &str) -> StoreResult<Option<ViewHandle>>;

    /// Publish `payload` with `tag` under `name` in one atomic step,
    /// creating the view if it does not exist, and return the new handle.
    fn set_payload(&self, name: &str, payload: Payload, tag: &MimeTag) -> StoreResult<ViewHandle>;

    /// The payload of a view, `Ok(None)` if it was never written.
    ///
    /// Default implementation reads the immutable handle directly.
    fn payload(&self, view: &ViewHandle) -> StoreResult<Option<Payload>> {
        Ok(view.payload().cloned())
    }

    /// Snapshot of all current views, sorted by name.
    ///
    /// The snapshot is consistent per view (each handle is an immutable
    /// record) but not across views: a concurrent writer may land between
    /// two entries.
    fn views(&self) -> StoreResult<Vec<ViewHandle>>;
}
