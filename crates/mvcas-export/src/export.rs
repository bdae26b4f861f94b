use std::path::{Path, PathBuf};

use tracing::info;

use mvcas_store::CasStore;

use crate::error::ExportResult;
use crate::writer::{serialize, ExportOptions};

/// Serialize `store` and write the document to `<dir>/doc<doc_number>.xml`.
///
/// The file is created or truncated and written in one step (UTF-8); there
/// is no retry and no atomic rename, so a crash mid-write can leave a
/// partial file. I/O failures surface as [`ExportError::Io`].
///
/// Returns the path of the written file.
///
/// [`ExportError::Io`]: crate::error::ExportError::Io
pub fn export_to_file(
    store: &CasStore,
    dir: impl AsRef<Path>,
    options: &ExportOptions,
    doc_number: u32,
) -> ExportResult<PathBuf> {
    let text = serialize(store, options)?;
    let path = dir.as_ref().join(format!("doc{doc_number}.xml"));
    std::fs::write(&path, text.as_bytes())?;
    info!(path = %path.display(), bytes = text.len(), "wrote export document");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mvcas_types::Payload;

    fn store_with_cloud() -> CasStore {
        let store = CasStore::in_memory();
        store
            .set_payload(
                "cam0.CLOUD",
                Payload::with_dims(vec![1, 2, 3, 4], vec![2, 2]),
                "CLOUD",
            )
            .unwrap();
        store
    }

    #[test]
    fn writes_numbered_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_cloud();

        let path = export_to_file(&store, dir.path(), &ExportOptions::default(), 3).unwrap();
        assert_eq!(path, dir.path().join("doc3.xml"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, serialize(&store, &ExportOptions::default()).unwrap());
    }

    #[test]
    fn stripped_document_contains_no_array_elements() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_cloud();

        let path = export_to_file(
            &store,
            dir.path(),
            &ExportOptions::without_binary_payloads(),
            3,
        )
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("ByteArray"));
        assert!(!written.contains("IntegerArray"));
        assert!(written.contains("sofaID=\"cam0.CLOUD\""));
    }

    #[test]
    fn existing_document_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_cloud();
        let stale = dir.path().join("doc0.xml");
        std::fs::write(&stale, "stale contents").unwrap();

        let path = export_to_file(&store, dir.path(), &ExportOptions::default(), 0).unwrap();
        assert_eq!(path, stale);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<CAS version=\"2\">"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn missing_directory_surfaces_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let store = store_with_cloud();

        let err = export_to_file(&store, &missing, &ExportOptions::default(), 1).unwrap_err();
        assert!(matches!(err, crate::error::ExportError::Io(_)));
    }
}
