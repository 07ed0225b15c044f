//! Key-value persistence backends for the history store.
//!
//! The store keeps its whole history as one serialized value under one key,
//! so a backend only needs whole-value load, save and delete. A save must
//! replace the previous value atomically: readers see either the old bytes
//! or the new ones, never a mix.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::HistoryError;

/// Storage for whole values addressed by key.
pub trait HistoryBackend {
    /// Bytes stored under `key`, or `None` if nothing is stored.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, HistoryError>;
    /// Replace the value under `key`.
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), HistoryError>;
    /// Remove the value under `key`. Removing an absent key succeeds.
    fn delete(&mut self, key: &str) -> Result<(), HistoryError>;
}

/// In-process backend, for tests and hosts that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<String, Vec<u8>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl HistoryBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, HistoryError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), HistoryError> {
        self.values.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), HistoryError> {
        self.values.remove(key);
        Ok(())
    }
}

/// One file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Backend rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Keys must be plain file names.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, HistoryError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\'])
            && !key.ends_with(".tmp");
        if !valid {
            return Err(HistoryError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(key))
    }
}

impl HistoryBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, HistoryError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), HistoryError> {
        let path = self.path_for(key)?;
        atomic_write(&path, bytes)?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), HistoryError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Write `data` to `{path}.tmp`, sync it, then rename over `path`.
///
/// If the process dies before the rename, the previous file is untouched.
/// On an I/O error the temp file is removed before the error is returned.
fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let result = write_then_rename(&tmp_path, path, data);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_then_rename(tmp_path: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unique scratch directory per test.
    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "icewind_backend_test_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_memory_save_load_delete() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.load("k").unwrap(), None);

        backend.save("k", b"one").unwrap();
        backend.save("k", b"two").unwrap();
        assert_eq!(backend.load("k").unwrap(), Some(b"two".to_vec()));

        backend.delete("k").unwrap();
        assert!(!backend.contains("k"));
        backend.delete("k").unwrap();
    }

    #[test]
    fn test_file_missing_key_loads_none() {
        let dir = test_dir("missing");
        let backend = FileBackend::new(&dir);
        assert_eq!(backend.load("history").unwrap(), None);
    }

    #[test]
    fn test_file_save_creates_dir_and_overwrites() {
        let dir = test_dir("overwrite");
        let mut backend = FileBackend::new(dir.join("nested"));

        backend.save("history", b"v1").unwrap();
        backend.save("history", b"v2").unwrap();
        assert_eq!(backend.load("history").unwrap(), Some(b"v2".to_vec()));
        assert!(!dir.join("nested").join("history.tmp").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_delete_is_idempotent() {
        let dir = test_dir("delete");
        let mut backend = FileBackend::new(&dir);

        backend.save("history", b"data").unwrap();
        backend.delete("history").unwrap();
        assert_eq!(backend.load("history").unwrap(), None);
        backend.delete("history").unwrap();

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_failed_rename_leaves_no_temp_file() {
        let dir = test_dir("failed_rename");
        // A non-empty directory at the target path makes the rename fail.
        let target = dir.join("history");
        fs::create_dir_all(target.join("occupied")).unwrap();
        let mut backend = FileBackend::new(&dir);

        let result = backend.save("history", b"data");

        assert!(matches!(result, Err(HistoryError::Io(_))));
        assert!(!dir.join("history.tmp").exists());
        assert!(target.join("occupied").is_dir());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_rejects_path_like_keys() {
        let backend = FileBackend::new("/tmp/unused");
        for key in ["", ".", "..", "a/b", "a\\b", "x.tmp"] {
            assert!(
                matches!(backend.path_for(key), Err(HistoryError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
        assert!(backend.path_for("calculation_history").is_ok());
    }
}
