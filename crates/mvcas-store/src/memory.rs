use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use mvcas_types::{MimeTag, Payload};

use crate::error::StoreResult;
use crate::traits::ViewHost;
use crate::view::{View, ViewHandle};

/// In-memory, `HashMap`-based host backend.
///
/// Intended for tests and embedding. The view table lives behind a `RwLock`;
/// every write inserts a complete immutable record in a single map
/// operation, so readers holding only the read lock never observe a view
/// mid-construction.
pub struct InMemoryCas {
    views: RwLock<HashMap<String, ViewHandle>>,
}

impl InMemoryCas {
    /// Create a new empty host.
    pub fn new() -> Self {
        Self {
            views: RwLock::new(HashMap::new()),
        }
    }

    /// Number of views currently in the table.
    pub fn len(&self) -> usize {
        self.views.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no view exists.
    pub fn is_empty(&self) -> bool {
        self.views.read().expect("lock poisoned").is_empty()
    }

    /// Sorted list of all view names.
    pub fn view_names(&self) -> Vec<String> {
        let map = self.views.read().expect("lock poisoned");
        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort();
        names
    }

    /// Total payload bytes across all views.
    pub fn total_bytes(&self) -> u64 {
        self.views
            .read()
            .expect("lock poisoned")
            .values()
            .filter_map(|view| view.payload())
            .map(|payload| payload.len() as u64)
            .sum()
    }
}

impl Default for InMemoryCas {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewHost for InMemoryCas {
    fn create_view(&self, name: &str) -> StoreResult<ViewHandle> {
        let mut map = self.views.write().expect("lock poisoned");
        let handle = map
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(View::empty(name)));
        Ok(Arc::clone(handle))
    }

    fn view(&self, name: &str) -> StoreResult<Option<ViewHandle>> {
        let map = self.views.read().expect("lock poisoned");
        Ok(map.get(name).cloned())
    }

    fn set_payload(&self, name: &str, payload: Payload, tag: &MimeTag) -> StoreResult<ViewHandle> {
        let handle = Arc::new(View::published(name, payload, tag.clone()));
        let mut map = self.views.write().expect("lock poisoned");
        map.insert(name.to_string(), Arc::clone(&handle));
        Ok(handle)
    }

    fn views(&self) -> StoreResult<Vec<ViewHandle>> {
        let map = self.views.read().expect("lock poisoned");
        let mut views: Vec<ViewHandle> = map.values().cloned().collect();
        views.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(views)
    }
}

impl std::fmt::Debug for InMemoryCas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryCas")
            .field("view_count", &count)
            .finish()
    }
}
