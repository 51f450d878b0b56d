use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cache::cache::{ArtifactStore, StoreError};

/// Filesystem store: one `<key>.json` file per artifact under `root`.
///
/// Writes go to a temp file that is synced and then renamed over the
/// target, so readers see either the old artifact or the new one.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn artifact_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

// Keys become file names, so only a conservative alphabet is allowed.
fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

impl ArtifactStore for FsArtifactStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.artifact_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.artifact_path(key)?;

        // Unique per writer; removed on drop if anything below fails.
        let mut temp = tempfile::Builder::new()
            .prefix(&format!(".{key}."))
            .suffix(".tmp")
            .tempfile_in(&self.root)?;
        temp.write_all(bytes)?;
        temp.as_file().sync_all()?;

        temp.persist(&path).map_err(|err| err.error)?;
        Ok(())
    }

    fn purge(&self) -> Result<(), StoreError> {
        let mut removed = 0usize;
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            let is_artifact = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.ends_with(".json") || name.ends_with(".tmp"))
                .unwrap_or(false);

            if is_artifact && path.is_file() {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }

        info!(root = %self.root.display(), removed, "artifact store purged");
        Ok(())
    }
}
