use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("token storage IO error: {0}")]
    Io(#[from] io::Error),
}

/// The durable slot holding the raw credential between runs.
///
/// Exactly one logical entry. The session store is the only writer; every
/// other component reads session state through published snapshots instead.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&self, raw: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// One file on disk holding the raw token string.
///
/// A missing file reads as "no token"; clearing a missing file is a no-op,
/// so logout stays idempotent.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    debug!("Loaded persisted token from {}", self.path.display());
                    Ok(Some(token.to_string()))
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, raw: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, raw)?;
        debug!("Persisted token to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed persisted token at {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// In-process slot, for tests and for running with an ephemeral session.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot().clone())
    }

    fn save(&self, raw: &str) -> Result<(), StoreError> {
        *self.slot() = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_roundtrips_a_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        store.save("h.p.s").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("h.p.s"));
    }

    #[test]
    fn file_store_missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("absent"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested/dir/token"));
        store.save("h.p.s").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("h.p.s"));
    }

    #[test]
    fn file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        store.save("h.p.s").unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_trims_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "h.p.s\n").unwrap();
        let store = FileTokenStore::new(path);
        assert_eq!(store.load().unwrap().as_deref(), Some("h.p.s"));
    }

    #[test]
    fn memory_store_roundtrips() {
        let store = MemoryTokenStore::new();
        assert!(store.load().unwrap().is_none());
        store.save("h.p.s").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("h.p.s"));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
