//! Persistence of the reflection history.
//!
//! The guidance engine keeps no state of its own; callers load the history
//! through a [`HistoryStore`], hand it to the engine, and save what comes back.
//! [`JsonFileStore`] keeps the whole history as one JSON array in the data
//! directory, and [`MemoryStore`] keeps it in process memory.

use crate::constants::{HISTORY_FILE_NAME, HISTORY_LOCK_FILE_NAME};
use crate::errors::{AppError, AppResult, StoreError};
use crate::guidance::GuidanceEntry;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, info};

#[cfg(unix)]
use crate::constants::{DEFAULT_DIR_PERMISSIONS, DEFAULT_FILE_PERMISSIONS};
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// Loads and saves the ordered list of guidance entries, oldest first.
pub trait HistoryStore {
    /// Returns the full history. A store that was never written is empty.
    fn load(&self) -> AppResult<Vec<GuidanceEntry>>;

    /// Replaces the full history.
    fn save(&self, entries: &[GuidanceEntry]) -> AppResult<()>;

    /// Adds one entry at the end of the history.
    fn append(&self, entry: GuidanceEntry) -> AppResult<()> {
        let mut entries = self.load()?;
        entries.push(entry);
        self.save(&entries)
    }
}

/// History kept in process memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<GuidanceEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<GuidanceEntry>) -> Self {
        MemoryStore {
            entries: Mutex::new(entries),
        }
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> AppResult<Vec<GuidanceEntry>> {
        let guard = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, entries: &[GuidanceEntry]) -> AppResult<()> {
        let mut guard = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        *guard = entries.to_vec();
        Ok(())
    }
}

/// History persisted as a JSON array at `<data_dir>/reflections.json`.
///
/// Every access holds an exclusive advisory lock on
/// `<data_dir>/.reflections.lock`, so concurrent invocations never interleave a
/// read-modify-write. Writes land in a temporary file in the same directory
/// and are renamed over the history file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

/// Exclusive hold on the history lock file, released on drop.
struct HistoryLock {
    file: File,
}

impl Drop for HistoryLock {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            debug!("Failed to release history lock: {}", e);
        }
    }
}

impl JsonFileStore {
    /// Creates a store rooted at `data_dir`. Nothing is touched on disk until
    /// the first load or save.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the history file.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE_NAME)
    }

    fn lock_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_LOCK_FILE_NAME)
    }

    /// Creates the data directory with owner-only permissions if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the path is relative, or `AppError::Io`
    /// if the directory cannot be created.
    pub fn ensure_data_dir(&self) -> AppResult<()> {
        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(format!(
                "Data directory path must be absolute: {}",
                self.data_dir.display()
            )));
        }

        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create data directory: {}", e),
                ))
            })?;

            #[cfg(unix)]
            {
                let permissions = fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS);
                fs::set_permissions(&self.data_dir, permissions)?;
                debug!("Set {:o} permissions on data directory", DEFAULT_DIR_PERMISSIONS);
            }
        }
        Ok(())
    }

    fn acquire_lock(&self) -> AppResult<HistoryLock> {
        self.ensure_data_dir()?;
        let path = self.lock_path();

        let mut options = OpenOptions::new();
        options.create(true).truncate(false).write(true);
        #[cfg(unix)]
        options.mode(DEFAULT_FILE_PERMISSIONS);

        let file = options.open(&path).map_err(|source| StoreError::LockFailed {
            path: path.clone(),
            source,
        })?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(HistoryLock { file }),
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(StoreError::Busy { path }.into())
            }
            Err(source) => Err(StoreError::LockFailed { path, source }.into()),
        }
    }

    fn read_entries(&self) -> AppResult<Vec<GuidanceEntry>> {
        let path = self.history_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<GuidanceEntry> = serde_json::from_str(&raw)
            .map_err(|source| StoreError::Corrupt { path, source })?;
        debug!(count = entries.len(), "loaded reflection history");
        Ok(entries)
    }

    fn write_entries(&self, entries: &[GuidanceEntry]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries).map_err(StoreError::Serialize)?;

        let mut temp = NamedTempFile::new_in(&self.data_dir)?;
        #[cfg(unix)]
        temp.as_file()
            .set_permissions(fs::Permissions::from_mode(DEFAULT_FILE_PERMISSIONS))?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;

        temp.persist(self.history_path()).map_err(|e| e.error)?;
        debug!(count = entries.len(), "saved reflection history");
        Ok(())
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> AppResult<Vec<GuidanceEntry>> {
        let _lock = self.acquire_lock()?;
        self.read_entries()
    }

    fn save(&self, entries: &[GuidanceEntry]) -> AppResult<()> {
        let _lock = self.acquire_lock()?;
        self.write_entries(entries)
    }

    fn append(&self, entry: GuidanceEntry) -> AppResult<()> {
        let _lock = self.acquire_lock()?;
        let mut entries = self.read_entries()?;
        info!(id = %entry.id, "appending guidance entry to history");
        entries.push(entry);
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::compose_guidance_entry;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data"));
        assert!(store.load().unwrap().is_empty());
        assert!(!store.history_path().exists());
    }

    #[test]
    fn test_append_then_load_preserves_order() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let first = compose_guidance_entry("I am afraid");
        let second = compose_guidance_entry("I am grateful");
        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![first, second]);
    }

    #[test]
    fn test_corrupt_file_is_reported_and_left_alone() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(store.history_path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Corrupt { .. })));
        assert!(store.append(compose_guidance_entry("hello")).is_err());
        assert_eq!(fs::read_to_string(store.history_path()).unwrap(), "{ not json");
    }

    #[test]
    fn test_held_lock_reports_busy() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let _held = store.acquire_lock().unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Busy { .. })));
    }

    #[test]
    fn test_relative_data_dir_is_rejected() {
        let store = JsonFileStore::new("relative/dir");
        assert!(matches!(store.load(), Err(AppError::Config(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_created_files_are_owner_only() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("soul");
        let store = JsonFileStore::new(&data_dir);
        store.append(compose_guidance_entry("peace")).unwrap();

        let dir_mode = fs::metadata(&data_dir).unwrap().permissions().mode() & 0o777;
        let file_mode = fs::metadata(store.history_path())
            .unwrap()
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(dir_mode, 0o700);
        assert_eq!(file_mode, 0o600);
    }

    #[test]
    fn test_memory_store_append() {
        let store = MemoryStore::new();
        store.append(compose_guidance_entry("joy")).unwrap();
        store.append(compose_guidance_entry("grief")).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }
}
