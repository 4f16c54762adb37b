pub mod storage;

pub use storage::{FileStorage, MemoryStorage, StorageError, StoragePort};
