use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::project::ProjectId;

/// How urgent a task is. Only affects sorting and badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Priority::Low => egui_phosphor::regular::ARROW_DOWN,
            Priority::Medium => egui_phosphor::regular::MINUS,
            Priority::High => egui_phosphor::regular::WARNING,
        }
    }

    /// Rank for descending priority sorts: high > medium > low.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

/// Workflow state of a task. Drives list display and board column placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[Status::Pending, Status::InProgress, Status::Completed]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "To Do",
            Status::InProgress => "In Progress",
            Status::Completed => "Done",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Status::Pending => egui_phosphor::regular::CIRCLE,
            Status::InProgress => egui_phosphor::regular::CLOCK,
            Status::Completed => egui_phosphor::regular::CHECK_CIRCLE,
        }
    }

    /// The status a click on the toggle icon switches to.
    pub fn toggled(&self) -> Status {
        match self {
            Status::Completed => Status::Pending,
            _ => Status::Completed,
        }
    }
}

/// A single user-created unit of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub project: ProjectId,
    /// Optional due date and time. Date and time-of-day are manipulated
    /// independently when rescheduling from the calendar.
    pub due: Option<NaiveDateTime>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Materialize a draft into a stored task with a fresh id.
    pub fn from_draft(draft: TaskDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            status: draft.status,
            project: draft.project,
            due: draft.due,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a draft on top of this task, keeping id and created_at.
    pub fn apply_draft(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.priority = draft.priority;
        self.status = draft.status;
        self.project = draft.project;
        self.due = draft.due;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// What the task form produces: every task field minus id and timestamps.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub project: ProjectId,
    pub due: Option<NaiveDateTime>,
}
