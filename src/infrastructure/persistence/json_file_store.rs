//! JSON file implementation of [`EntryStore`].

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::domain::entities::Entry;
use crate::domain::repositories::{EntryStore, StoreError};

/// Stores the redirect set as a pretty-printed JSON array in a single file.
///
/// # Atomic Writes
///
/// `save` writes to a uniquely named temporary file in the same directory,
/// fsyncs it and renames it over the target. A reader therefore sees either
/// the old file or the new one, never a truncated file.
///
/// # First Run
///
/// A missing file is treated as an empty set.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

#[async_trait]
impl EntryStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Entry>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No redirects file at {}. Starting fresh.", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        // An empty file is corrupt, not a fresh start.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(StoreError::Corrupt {
                path: self.path.display().to_string(),
                reason: "file is empty".to_string(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    async fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(entries)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomic(&path, &json))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?
            .map_err(|e| self.io_error(e))?;

        debug!("Wrote {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Replaces `path` with `contents` via a temp file and rename.
///
/// On Unix the directory is fsynced after the rename so the new version
/// survives a crash.
fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    sync_dir(dir)?;

    Ok(())
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("redirects.json"))
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let entries = store.load().await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let entries = vec![
            Entry::new("wiki", "http://example.com/Wiki"),
            Entry {
                shortname: "docs".to_string(),
                target: "https://docs.rs".to_string(),
                request_count: 12,
            },
        ];

        store.save(&entries).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, entries);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .save(&[Entry::new("a", "http://a"), Entry::new("b", "http://b")])
            .await
            .unwrap();
        store.save(&[Entry::new("c", "http://c")]).await.unwrap();

        assert_eq!(store.load().await.unwrap(), vec![Entry::new("c", "http://c")]);
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&[Entry::new("a", "http://a")]).await.unwrap();
        store.save(&[]).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("redirects.json")]);
    }

    #[tokio::test]
    async fn test_load_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), b"[{\"shortname\": ").unwrap();

        let result = store.load().await;
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[tokio::test]
    async fn test_load_empty_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), b"").unwrap();

        assert!(matches!(store.load().await, Err(StoreError::Corrupt { .. })));
    }

    #[tokio::test]
    async fn test_load_legacy_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            br#"[{"Shortname":"go","Url":"http://golang.org","Requests":3}]"#,
        )
        .unwrap();

        let entries = store.load().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].shortname, "go");
        assert_eq!(entries[0].request_count, 3);
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope").join("redirects.json"));

        let result = store.save(&[Entry::new("a", "http://a")]).await;
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_write_atomic_syncs_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("redirects.json");

        write_atomic(&path, b"[]").unwrap();
        write_atomic(&path, b"[ ]").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"[ ]");
        sync_dir(dir.path()).unwrap();
    }

    #[test]
    fn test_location_is_path() {
        let store = JsonFileStore::new("data/redirects.json");
        assert_eq!(store.location(), "data/redirects.json");
    }
}
