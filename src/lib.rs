//! TaskFlow core: task store, filter/sort pipeline, calendar math and the
//! egui views that consume them.

pub mod app;
pub mod io;
pub mod model;
pub mod store;
pub mod ui;

pub use io::{FileStorage, MemoryStorage, StorageError, StoragePort};
pub use model::{Priority, Project, ProjectId, SortKey, Status, Task, TaskDraft};
pub use store::TaskStore;
