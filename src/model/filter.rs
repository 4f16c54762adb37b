use std::cmp::Ordering;

use super::project::ProjectId;
use super::task::{Status, Task};

/// Key the visible task list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    DueDate,
    Priority,
    Created,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[SortKey::DueDate, SortKey::Priority, SortKey::Created]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::DueDate => "Due Date",
            SortKey::Priority => "Priority",
            SortKey::Created => "Created",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::DueDate
    }
}

/// Pure filter/sort pipeline feeding all three views.
///
/// `None` selectors pass everything through. Sorting is stable, so equal
/// keys keep their relative order from the store.
pub fn visible_tasks(
    tasks: &[Task],
    project: Option<ProjectId>,
    status: Option<Status>,
    sort: SortKey,
) -> Vec<Task> {
    let mut out: Vec<Task> = tasks
        .iter()
        .filter(|t| project.map_or(true, |p| t.project == p))
        .filter(|t| status.map_or(true, |s| t.status == s))
        .cloned()
        .collect();

    out.sort_by(|a, b| match sort {
        SortKey::Priority => b.priority.rank().cmp(&a.priority.rank()),
        SortKey::Created => b.created_at.cmp(&a.created_at),
        SortKey::DueDate => match (a.due, b.due) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        },
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::Project;
    use crate::model::task::{Priority, TaskDraft};
    use chrono::NaiveDate;

    fn task(title: &str, project: u32, priority: Priority, due: Option<(i32, u32, u32)>) -> Task {
        Task::from_draft(TaskDraft {
            title: title.to_string(),
            description: String::new(),
            priority,
            status: Status::Pending,
            project: ProjectId(project),
            due: due.map(|(y, m, d)| {
                NaiveDate::from_ymd_opt(y, m, d)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap()
            }),
        })
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn project_filter_returns_only_matching_tasks() {
        let tasks = vec![
            task("a", 1, Priority::Low, None),
            task("b", 2, Priority::Low, None),
            task("c", 1, Priority::Low, None),
        ];

        let only = visible_tasks(&tasks, Some(ProjectId(1)), None, SortKey::DueDate);
        assert_eq!(titles(&only), vec!["a", "c"]);
        assert!(only.iter().all(|t| t.project == ProjectId(1)));
    }

    #[test]
    fn per_project_filters_partition_the_full_set() {
        let tasks = vec![
            task("a", 1, Priority::Low, None),
            task("b", 2, Priority::Low, None),
            task("c", 3, Priority::Low, None),
            task("d", 2, Priority::Low, None),
        ];

        let mut union = Vec::new();
        for project in Project::builtin() {
            union.extend(visible_tasks(&tasks, Some(project.id), None, SortKey::DueDate));
        }
        assert_eq!(union.len(), tasks.len());
        for t in &tasks {
            assert_eq!(union.iter().filter(|u| u.id == t.id).count(), 1);
        }
    }

    #[test]
    fn status_filter_matches_exactly() {
        let mut a = task("a", 1, Priority::Low, None);
        a.status = Status::Completed;
        let b = task("b", 1, Priority::Low, None);

        let done = visible_tasks(&[a, b], None, Some(Status::Completed), SortKey::DueDate);
        assert_eq!(titles(&done), vec!["a"]);
    }

    #[test]
    fn priority_sort_is_descending_with_stable_ties() {
        let tasks = vec![
            task("low", 1, Priority::Low, None),
            task("high", 1, Priority::High, None),
            task("medium", 1, Priority::Medium, None),
            task("medium2", 1, Priority::Medium, None),
        ];

        let sorted = visible_tasks(&tasks, None, None, SortKey::Priority);
        assert_eq!(titles(&sorted), vec!["high", "medium", "medium2", "low"]);
    }

    #[test]
    fn due_date_sort_puts_undated_tasks_last() {
        let tasks = vec![
            task("a", 1, Priority::Low, Some((2024, 1, 10))),
            task("b", 1, Priority::Low, None),
            task("c", 1, Priority::Low, Some((2024, 1, 5))),
        ];

        let sorted = visible_tasks(&tasks, None, None, SortKey::DueDate);
        assert_eq!(titles(&sorted), vec!["c", "a", "b"]);
    }

    #[test]
    fn due_date_sort_keeps_undated_order_stable() {
        let tasks = vec![
            task("b1", 1, Priority::Low, None),
            task("b2", 1, Priority::Low, None),
            task("a", 1, Priority::Low, Some((2024, 3, 1))),
        ];

        let sorted = visible_tasks(&tasks, None, None, SortKey::DueDate);
        assert_eq!(titles(&sorted), vec!["a", "b1", "b2"]);
    }

    #[test]
    fn created_sort_is_most_recent_first() {
        let older = task("older", 1, Priority::Low, None);
        let mut newer = task("newer", 1, Priority::Low, None);
        newer.created_at = older.created_at + chrono::Duration::seconds(5);

        let sorted = visible_tasks(&[older, newer], None, None, SortKey::Created);
        assert_eq!(titles(&sorted), vec!["newer", "older"]);
    }
}
