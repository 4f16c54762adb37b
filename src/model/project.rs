use egui::Color32;
use serde::{Deserialize, Serialize};

use super::task::Task;

/// Identifier of one of the built-in projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

/// A named grouping with a display color, used to filter and tag tasks.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub name: &'static str,
    pub color: Color32,
    /// Number of tasks referencing this project. Recomputed from the task
    /// list after every mutation, never edited directly.
    pub task_count: usize,
}

impl Project {
    fn new(id: u32, name: &'static str, color: Color32) -> Self {
        Self {
            id: ProjectId(id),
            name,
            color,
            task_count: 0,
        }
    }

    /// The fixed built-in project set. There is no project CRUD.
    pub fn builtin() -> Vec<Project> {
        vec![
            Project::new(1, "Personal", Color32::from_rgb(59, 130, 246)), // Blue
            Project::new(2, "Work", Color32::from_rgb(168, 85, 247)),     // Purple
            Project::new(3, "Shopping", Color32::from_rgb(34, 197, 94)),  // Green
        ]
    }

    /// Recompute every project's task count from the current task list.
    pub fn recount(projects: &mut [Project], tasks: &[Task]) {
        for project in projects.iter_mut() {
            project.task_count = tasks.iter().filter(|t| t.project == project.id).count();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Priority, Status, Task, TaskDraft};

    fn task_in(project: ProjectId) -> Task {
        Task::from_draft(TaskDraft {
            title: "t".to_string(),
            description: String::new(),
            priority: Priority::Low,
            status: Status::Pending,
            project,
            due: None,
        })
    }

    #[test]
    fn builtin_set_is_stable() {
        let projects = Project::builtin();
        assert_eq!(projects.len(), 3);
        assert!(projects.iter().all(|p| p.task_count == 0));
        assert_eq!(projects[0].name, "Personal");
    }

    #[test]
    fn recount_is_a_pure_function_of_the_task_list() {
        let mut projects = Project::builtin();
        let tasks = vec![
            task_in(ProjectId(1)),
            task_in(ProjectId(1)),
            task_in(ProjectId(3)),
        ];

        Project::recount(&mut projects, &tasks);
        assert_eq!(projects[0].task_count, 2);
        assert_eq!(projects[1].task_count, 0);
        assert_eq!(projects[2].task_count, 1);

        Project::recount(&mut projects, &[]);
        assert!(projects.iter().all(|p| p.task_count == 0));
    }
}
