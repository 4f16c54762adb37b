use std::cell::RefCell;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no user data directory available")]
    NoDataDir,
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the serialized task collection lives.
///
/// One blob, read once at startup, rewritten wholesale on every mutation.
/// The store treats any load failure the same as "no data yet".
pub trait StoragePort {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, blob: &str) -> Result<(), StorageError>;
}

impl<S: StoragePort> StoragePort for std::rc::Rc<S> {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn save(&self, blob: &str) -> Result<(), StorageError> {
        (**self).save(blob)
    }
}

/// File-backed storage in the per-user application data directory.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    const FILE_NAME: &'static str = "tasks.json";

    /// Storage at the platform data dir, e.g. `~/.local/share/taskflow/tasks.json`.
    pub fn in_user_data_dir() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("", "", "taskflow")
            .ok_or(StorageError::NoDataDir)?;
        std::fs::create_dir_all(dirs.data_dir())?;
        Ok(Self {
            path: dirs.data_dir().join(Self::FILE_NAME),
        })
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StoragePort for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn save(&self, blob: &str) -> Result<(), StorageError> {
        std::fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// In-memory stand-in for tests.
#[derive(Default)]
pub struct MemoryStorage {
    blob: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.blob.borrow().clone())
    }

    fn save(&self, blob: &str) -> Result<(), StorageError> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}
