use std::sync::Arc;

use mvcas_types::{MimeTag, Payload};

/// Shared handle to a published view state.
///
/// Handles are cheap to clone. A handle observed before a write keeps
/// pointing at the pre-write record; re-reading the view by name yields the
/// current one.
pub type ViewHandle = Arc<View>;

/// An isolated, named sub-container inside the store.
///
/// A `View` is immutable once published: writes never mutate an existing
/// record, they publish a replacement under the same name. This is what lets
/// readers run lock-free against concurrent writers without ever observing a
/// partially-initialized view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    name: String,
    tag: Option<MimeTag>,
    payload: Option<Payload>,
}

impl View {
    /// A freshly created view with no payload and no tag.
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tag: None,
            payload: None,
        }
    }

    /// A fully-formed view record carrying a payload and its tag.
    pub fn published(name: &str, payload: Payload, tag: MimeTag) -> Self {
        Self {
            name: name.to_string(),
            tag: Some(tag),
            payload: Some(payload),
        }
    }

    /// The unique view name within its store.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The content tag recorded at the last write, if any.
    pub fn tag(&self) -> Option<&MimeTag> {
        self.tag.as_ref()
    }

    /// The current payload. `None` for a created-but-never-written view.
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_view_has_no_payload_or_tag() {
        let view = View::empty("cam0.SCENE");
        assert_eq!(view.name(), "cam0.SCENE");
        assert!(view.payload().is_none());
        assert!(view.tag().is_none());
    }

    #[test]
    fn published_view_carries_payload_and_tag() {
        let view = View::published(
            "cam0.SCENE",
            Payload::new(vec![1, 2]),
            MimeTag::from_hint("SCENE"),
        );
        assert_eq!(view.payload().unwrap().bytes(), &[1, 2]);
        assert_eq!(view.tag().unwrap().as_str(), "application/x-SCENE");
    }
}
