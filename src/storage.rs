//! Collection store - reads and writes the JSON collection document

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{StoreError, StoreResult};
use crate::models::Collection;

/// Load a collection from a JSON document.
///
/// All-or-nothing: a document that does not fully match the expected shape
/// yields `StoreError::Parse` and no collection.
pub fn load_collection(path: impl AsRef<Path>) -> StoreResult<Collection> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let collection: Collection =
        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        name = %collection.name,
        requests = collection.len(),
        "Loaded collection"
    );
    Ok(collection)
}

/// Save a collection as pretty-printed JSON.
///
/// Missing parent directories are created. The document is written to a
/// temporary file next to the destination and renamed over it, so an existing
/// file is either fully replaced or left untouched.
pub fn save_collection(collection: &Collection, path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    let io_err = |source: io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }

    let mut content = serde_json::to_string_pretty(collection)
        .map_err(|e| io_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    content.push('\n');

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(content.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    tracing::info!(path = %path.display(), requests = collection.len(), "Saved collection");
    Ok(())
}
