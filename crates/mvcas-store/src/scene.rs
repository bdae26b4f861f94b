//! Scene accessor and the well-known view vocabulary.
//!
//! Every camera gets its own lazily-created scene view at
//! `cam<id>.SCENE`. Reading the scene of a never-before-seen camera id
//! creates and stores an empty scene as a side effect; callers that must
//! not mutate the store should check [`CasStore::has_view`] first.

use mvcas_types::{scoped_view_name, CameraId, Payload};

use crate::error::StoreResult;
use crate::store::CasStore;

/// Base name of the per-camera scene view.
pub const VIEW_SCENE: &str = "SCENE";
/// Base name of the per-camera object hypotheses view.
pub const VIEW_OBJECTS: &str = "OBJECTS";
/// Base name of the per-camera color image view.
pub const VIEW_COLOR_IMAGE: &str = "COLOR_IMAGE";
/// Base name of the per-camera depth image view.
pub const VIEW_DEPTH_IMAGE: &str = "DEPTH_IMAGE";
/// Base name of the per-camera calibration view.
pub const VIEW_CAMERA_INFO: &str = "CAMERA_INFO";
/// Base name of the per-camera point cloud view.
pub const VIEW_CLOUD: &str = "CLOUD";

/// Payload-level scene of one camera.
///
/// The richer domain model built on top of the store consumes this through
/// plain payload get/set; at this layer a scene is its payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scene(Payload);

impl Scene {
    /// A new, empty scene.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The scene's payload.
    pub fn payload(&self) -> &Payload {
        &self.0
    }

    /// Consume the scene, yielding its payload.
    pub fn into_payload(self) -> Payload {
        self.0
    }
}

impl From<Payload> for Scene {
    fn from(payload: Payload) -> Self {
        Self(payload)
    }
}

impl CasStore {
    /// The scene of camera `cam`, created empty on first access.
    ///
    /// Computes the scoped view name for [`VIEW_SCENE`]; if no payload is
    /// stored there yet, stores a new empty scene and returns it, otherwise
    /// returns the existing payload as a scene. Note that a mere read of a
    /// never-before-seen camera id mutates the store.
    pub fn scene(&self, cam: CameraId) -> StoreResult<Scene> {
        let name = scoped_view_name(VIEW_SCENE, cam);
        match self.payload(&name)? {
            Some(payload) => Ok(Scene::from(payload)),
            None => {
                let scene = Scene::empty();
                self.set_payload(&name, scene.payload().clone(), VIEW_SCENE)?;
                Ok(scene)
            }
        }
    }

    /// Returns `true` iff camera `cam` has an objects view.
    ///
    /// The camera id is an explicit parameter; no ambient selection state
    /// is involved.
    pub fn has_objects(&self, cam: CameraId) -> StoreResult<bool> {
        self.has_view(&scoped_view_name(VIEW_OBJECTS, cam))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_creates_view_on_first_access() {
        let store = CasStore::in_memory();
        assert!(!store.has_view("cam0.SCENE").unwrap());

        let scene = store.scene(CameraId::UNSCOPED).unwrap();
        assert!(scene.payload().is_empty());
        assert!(store.has_view("cam0.SCENE").unwrap());
    }

    #[test]
    fn scene_returns_existing_on_second_access() {
        let store = CasStore::in_memory();
        store
            .set_scoped_payload(VIEW_SCENE, CameraId::new(2), Payload::new(vec![4, 2]))
            .unwrap();

        let scene = store.scene(CameraId::new(2)).unwrap();
        assert_eq!(scene.payload().bytes(), &[4, 2]);

        // No duplicate creation: the same content comes back again.
        let again = store.scene(CameraId::new(2)).unwrap();
        assert_eq!(again, scene);
    }

    #[test]
    fn scenes_are_isolated_per_camera() {
        let store = CasStore::in_memory();
        store
            .set_scoped_payload(VIEW_SCENE, CameraId::new(1), Payload::new(vec![1]))
            .unwrap();

        // Camera 3 was never seen; it gets a fresh empty scene.
        let scene = store.scene(CameraId::new(3)).unwrap();
        assert!(scene.payload().is_empty());
        assert!(store.has_view("cam3.SCENE").unwrap());
        assert_eq!(
            store.scene(CameraId::new(1)).unwrap().payload().bytes(),
            &[1]
        );
    }

    #[test]
    fn scene_view_carries_scene_tag() {
        let store = CasStore::in_memory();
        store.scene(CameraId::UNSCOPED).unwrap();
        let view = store.host().view("cam0.SCENE").unwrap().unwrap();
        assert_eq!(view.tag().unwrap().as_str(), "application/x-SCENE");
    }

    #[test]
    fn has_objects_is_per_camera() {
        let store = CasStore::in_memory();
        assert!(!store.has_objects(CameraId::UNSCOPED).unwrap());

        store
            .set_scoped_payload(VIEW_OBJECTS, CameraId::new(1), Payload::new(vec![0]))
            .unwrap();
        assert!(store.has_objects(CameraId::new(1)).unwrap());
        // The result depends only on the argument, not on prior calls.
        assert!(!store.has_objects(CameraId::new(0)).unwrap());
    }
}
