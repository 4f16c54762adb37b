use chrono::NaiveDateTime;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::io::StoragePort;
use crate::model::{Project, Status, Task, TaskDraft};

/// Owns the task and project collections and every mutation on them.
///
/// Views hold only transient read references; all writes go through here.
/// Each mutating operation recomputes the derived project counts and
/// rewrites the whole collection to the storage port. Writes are
/// fire-and-forget: a failure is logged and the in-memory state stays
/// authoritative until the next successful mutation.
pub struct TaskStore {
    tasks: Vec<Task>,
    projects: Vec<Project>,
    storage: Box<dyn StoragePort>,
}

impl TaskStore {
    /// Read the blob once and build the store. Absent or malformed data
    /// yields an empty collection rather than an error.
    pub fn open(storage: Box<dyn StoragePort>) -> Self {
        let tasks = match storage.load() {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Task>>(&blob) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!("stored tasks unreadable, starting empty: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("storage load failed, starting empty: {err}");
                Vec::new()
            }
        };

        let mut projects = Project::builtin();
        Project::recount(&mut projects, &tasks);
        info!("loaded {} tasks", tasks.len());

        Self {
            tasks,
            projects,
            storage,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: crate::model::ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new task built from the form's draft. The form has already
    /// validated the title; the store assumes valid input.
    pub fn create(&mut self, draft: TaskDraft) -> Uuid {
        debug_assert!(!draft.title.trim().is_empty());
        let task = Task::from_draft(draft);
        let id = task.id;
        self.tasks.push(task);
        self.commit();
        id
    }

    /// Apply an edited draft to an existing task. Unknown ids are a no-op.
    pub fn update(&mut self, id: Uuid, draft: TaskDraft) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!("update for unknown task {id}");
            return;
        };
        task.apply_draft(draft);
        self.commit();
    }

    /// Delete a task. Idempotent: removing an absent id is a no-op.
    pub fn remove(&mut self, id: Uuid) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.commit();
        }
    }

    /// Set the workflow status. Unknown ids are a no-op.
    pub fn set_status(&mut self, id: Uuid, status: Status) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!("status change for unknown task {id}");
            return;
        };
        task.status = status;
        task.touch();
        self.commit();
    }

    /// Replace the due date/time. Used by calendar drag-and-drop, which has
    /// already resolved the target datetime (and filtered out no-op drops).
    pub fn reschedule(&mut self, id: Uuid, due: NaiveDateTime) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!("reschedule for unknown task {id}");
            return;
        };
        task.due = Some(due);
        task.touch();
        self.commit();
    }

    fn commit(&mut self) {
        Project::recount(&mut self.projects, &self.tasks);
        match serde_json::to_string(&self.tasks) {
            Ok(blob) => {
                if let Err(err) = self.storage.save(&blob) {
                    warn!("persisting tasks failed: {err}");
                }
            }
            Err(err) => warn!("serializing tasks failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryStorage;
    use crate::model::{Priority, ProjectId};
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn empty_store() -> TaskStore {
        TaskStore::open(Box::new(MemoryStorage::new()))
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            status: Status::Pending,
            project: ProjectId(1),
            due: None,
        }
    }

    #[test]
    fn create_assigns_unique_ids_and_equal_timestamps() {
        let mut store = empty_store();
        let mut ids = HashSet::new();
        for i in 0..20 {
            ids.insert(store.create(draft(&format!("task {i}"))));
        }
        assert_eq!(ids.len(), 20);
        for task in store.tasks() {
            assert_eq!(task.created_at, task.updated_at);
        }
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = empty_store();
        let id = store.create(draft("gone"));

        store.remove(id);
        assert!(store.get(id).is_none());
        store.remove(id);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn unknown_ids_are_silent_noops() {
        let mut store = empty_store();
        store.create(draft("kept"));
        let snapshot: Vec<Task> = store.tasks().to_vec();

        let ghost = Uuid::new_v4();
        store.update(ghost, draft("nope"));
        store.set_status(ghost, Status::Completed);
        store.reschedule(
            ghost,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        );

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].updated_at, snapshot[0].updated_at);
    }

    #[test]
    fn set_status_refreshes_updated_at() {
        let mut store = empty_store();
        let id = store.create(draft("toggle me"));
        let created = store.get(id).unwrap().created_at;

        store.set_status(id, Status::Completed);
        let task = store.get(id).unwrap();
        assert_eq!(task.status, Status::Completed);
        assert!(task.updated_at >= created);
    }

    #[test]
    fn reschedule_replaces_due() {
        let mut store = empty_store();
        let mut d = draft("move me");
        d.due = Some(
            NaiveDate::from_ymd_opt(2024, 1, 10)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        );
        let id = store.create(d);

        let target = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        store.reschedule(id, target);
        assert_eq!(store.get(id).unwrap().due, Some(target));
    }

    #[test]
    fn every_mutation_persists_and_recounts() {
        let backing = std::rc::Rc::new(MemoryStorage::new());
        let mut store = TaskStore::open(Box::new(std::rc::Rc::clone(&backing)));

        let id = store.create(draft("persisted"));
        assert_eq!(store.project(ProjectId(1)).unwrap().task_count, 1);

        // The create already hit the port; a fresh store sees the task.
        let blob = backing.load().unwrap().expect("blob written on mutation");
        let reloaded = TaskStore::open(Box::new(MemoryStorage::with_blob(blob)));
        assert_eq!(reloaded.tasks().len(), 1);
        assert_eq!(reloaded.tasks()[0].id, id);
        assert_eq!(reloaded.project(ProjectId(1)).unwrap().task_count, 1);

        store.remove(id);
        assert_eq!(store.project(ProjectId(1)).unwrap().task_count, 0);
        assert_eq!(backing.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn malformed_blob_degrades_to_empty() {
        let store = TaskStore::open(Box::new(MemoryStorage::with_blob("not json at all")));
        assert!(store.tasks().is_empty());
        assert!(store.projects().iter().all(|p| p.task_count == 0));
    }
}
