use std::collections::HashMap;
use std::sync::RwLock;

use mvcas_types::CameraId;

/// Registry of the camera ids each analysis engine has registered.
///
/// The registry is an owned object, shared explicitly (typically behind an
/// `Arc`) between the components that populate and consult it; nothing here
/// is process-global. It carries its own lock, independent of any store's
/// write mutex. Entries are only ever added, never pruned: a camera stays
/// registered for the registry's lifetime.
#[derive(Debug, Default)]
pub struct CameraRegistry {
    cameras: RwLock<HashMap<String, Vec<CameraId>>>,
}

impl CameraRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `cam` for the engine named `engine`.
    ///
    /// Idempotent per `(engine, cam)` pair; insertion order is preserved.
    pub fn register(&self, engine: &str, cam: CameraId) {
        let mut map = self.cameras.write().expect("lock poisoned");
        let ids = map.entry(engine.to_string()).or_default();
        if !ids.contains(&cam) {
            ids.push(cam);
        }
    }

    /// The camera ids registered for `engine`, in registration order.
    ///
    /// An unknown engine yields the empty list.
    pub fn cameras(&self, engine: &str) -> Vec<CameraId> {
        let map = self.cameras.read().expect("lock poisoned");
        map.get(engine).cloned().unwrap_or_default()
    }

    /// Returns `true` iff `cam` is registered for `engine`.
    pub fn contains(&self, engine: &str, cam: CameraId) -> bool {
        let map = self.cameras.read().expect("lock poisoned");
        map.get(engine).is_some_and(|ids| ids.contains(&cam))
    }

    /// Sorted list of all engines with at least one registration.
    pub fn engines(&self) -> Vec<String> {
        let map = self.cameras.read().expect("lock poisoned");
        let mut engines: Vec<String> = map.keys().cloned().collect();
        engines.sort();
        engines
    }

    /// Number of engines with at least one registration.
    pub fn len(&self) -> usize {
        self.cameras.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no engine has registered a camera.
    pub fn is_empty(&self) -> bool {
        self.cameras.read().expect("lock poisoned").is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_engine_has_no_cameras() {
        let registry = CameraRegistry::new();
        assert!(registry.cameras("engine").is_empty());
        assert!(!registry.contains("engine", CameraId::UNSCOPED));
        assert!(registry.is_empty());
    }

    #[test]
    fn register_and_enumerate() {
        let registry = CameraRegistry::new();
        registry.register("kitchen", CameraId::new(0));
        registry.register("kitchen", CameraId::new(2));

        assert_eq!(
            registry.cameras("kitchen"),
            vec![CameraId::new(0), CameraId::new(2)]
        );
        assert!(registry.contains("kitchen", CameraId::new(2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_is_idempotent() {
        let registry = CameraRegistry::new();
        registry.register("kitchen", CameraId::new(1));
        registry.register("kitchen", CameraId::new(1));
        assert_eq!(registry.cameras("kitchen"), vec![CameraId::new(1)]);
    }

    #[test]
    fn registration_order_is_preserved() {
        let registry = CameraRegistry::new();
        registry.register("kitchen", CameraId::new(3));
        registry.register("kitchen", CameraId::new(1));
        registry.register("kitchen", CameraId::new(2));
        assert_eq!(
            registry.cameras("kitchen"),
            vec![CameraId::new(3), CameraId::new(1), CameraId::new(2)]
        );
    }

    #[test]
    fn engines_are_independent_and_sorted() {
        let registry = CameraRegistry::new();
        registry.register("table", CameraId::new(1));
        registry.register("kitchen", CameraId::new(0));

        assert_eq!(registry.engines(), vec!["kitchen", "table"]);
        assert!(!registry.contains("table", CameraId::new(0)));
        assert!(!registry.contains("kitchen", CameraId::new(1)));
    }

    #[test]
    fn concurrent_registration() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(CameraRegistry::new());
        let handles: Vec<_> = (0..8u32)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry.register("engine", CameraId::new(i % 4));
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread should not panic");
        }

        let mut cameras = registry.cameras("engine");
        cameras.sort();
        assert_eq!(
            cameras,
            vec![
                CameraId::new(0),
                CameraId::new(1),
                CameraId::new(2),
                CameraId::new(3)
            ]
        );
    }
}
