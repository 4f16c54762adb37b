use chrono::NaiveDate;
use taskflow::io::{FileStorage, StoragePort};
use taskflow::model::calendar::drop_target;
use taskflow::{Priority, ProjectId, Status, TaskDraft, TaskStore};

fn draft(title: &str, project: u32) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: String::new(),
        priority: Priority::Medium,
        status: Status::Pending,
        project: ProjectId(project),
        due: None,
    }
}

#[test]
fn mutations_survive_a_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let kept;
    {
        let mut store = TaskStore::open(Box::new(FileStorage::at_path(path.clone())));
        kept = store.create(draft("buy milk", 3));
        let gone = store.create(draft("temporary", 1));
        store.set_status(kept, Status::InProgress);
        store.remove(gone);
    }

    let store = TaskStore::open(Box::new(FileStorage::at_path(path)));
    assert_eq!(store.tasks().len(), 1);
    let task = store.get(kept).expect("kept task survives reopen");
    assert_eq!(task.title, "buy milk");
    assert_eq!(task.status, Status::InProgress);
    assert_eq!(store.project(ProjectId(3)).unwrap().task_count, 1);
    assert_eq!(store.project(ProjectId(1)).unwrap().task_count, 0);
}

#[test]
fn calendar_drop_reschedules_and_persists_the_new_due() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let id;
    {
        let mut store = TaskStore::open(Box::new(FileStorage::at_path(path.clone())));
        let mut d = draft("dentist", 1);
        d.due = Some(
            NaiveDate::from_ymd_opt(2024, 1, 10)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        );
        id = store.create(d);

        // The drop handler resolves the target before touching the store.
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let due = store.get(id).and_then(|t| drop_target(t.due, day)).unwrap();
        store.reschedule(id, due);
    }

    let store = TaskStore::open(Box::new(FileStorage::at_path(path)));
    assert_eq!(
        store.get(id).unwrap().due,
        Some(
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap()
        )
    );
}

#[test]
fn corrupt_blob_yields_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let storage = FileStorage::at_path(path.clone());
    storage.save("{{ definitely not task json").unwrap();

    let store = TaskStore::open(Box::new(storage));
    assert!(store.tasks().is_empty());
}
