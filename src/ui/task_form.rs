use chrono::{Local, NaiveDate, NaiveTime};
use egui::{Color32, Context, RichText, Window};
use uuid::Uuid;

use crate::model::{Priority, Project, ProjectId, Status, Task, TaskDraft};
use crate::ui::theme;

/// Whether the form creates a new task or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Uuid),
}

/// Actions the form can request.
pub enum FormAction {
    None,
    Submit(TaskDraft),
    Cancel,
}

/// Draft state of the open task form.
///
/// The app holds `Option<TaskForm>`: `None` is the closed state, and a
/// populated form is open for create or edit. Submit and cancel both
/// return to `None`.
pub struct TaskForm {
    pub mode: FormMode,
    title: String,
    description: String,
    priority: Priority,
    status: Status,
    project: ProjectId,
    has_due: bool,
    due_date: NaiveDate,
    due_hour: u32,
    due_minute: u32,
    error: Option<&'static str>,
}

impl TaskForm {
    /// Blank form with the creation defaults.
    pub fn for_create(projects: &[Project]) -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            status: Status::Pending,
            project: projects.first().map(|p| p.id).unwrap_or(ProjectId(1)),
            has_due: false,
            due_date: Local::now().date_naive(),
            due_hour: 9,
            due_minute: 0,
            error: None,
        }
    }

    /// Form pre-populated from an existing task.
    pub fn for_edit(task: &Task) -> Self {
        use chrono::Timelike;
        Self {
            mode: FormMode::Edit(task.id),
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            status: task.status,
            project: task.project,
            has_due: task.due.is_some(),
            due_date: task
                .due
                .map(|d| d.date())
                .unwrap_or_else(|| Local::now().date_naive()),
            due_hour: task.due.map(|d| d.time().hour()).unwrap_or(9),
            due_minute: task.due.map(|d| d.time().minute()).unwrap_or(0),
            error: None,
        }
    }

    fn draft(&self) -> TaskDraft {
        let due = self.has_due.then(|| {
            let time = NaiveTime::from_hms_opt(self.due_hour, self.due_minute, 0)
                .unwrap_or_default();
            self.due_date.and_time(time)
        });
        TaskDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            priority: self.priority,
            status: self.status,
            project: self.project,
            due,
        }
    }
}

/// Render the modal create/edit dialog.
pub fn show_task_form(form: &mut TaskForm, projects: &[Project], ctx: &Context) -> FormAction {
    let mut action = FormAction::None;
    let is_edit = matches!(form.mode, FormMode::Edit(_));
    let heading = if is_edit { "Edit Task" } else { "Create New Task" };

    Window::new(RichText::new(heading).strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([340.0, 0.0])
        .show(ctx, |ui| {
            ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;
            ui.add_space(4.0);

            egui::Grid::new("task_form_grid")
                .num_columns(2)
                .striped(false)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Title *").color(theme::TEXT_SECONDARY));
                    let title_edit = ui.add_sized(
                        [220.0, 24.0],
                        egui::TextEdit::singleline(&mut form.title)
                            .hint_text("Enter task title...")
                            .text_color(theme::TEXT_PRIMARY),
                    );
                    if title_edit.changed() {
                        form.error = None;
                    }
                    ui.end_row();

                    ui.label(RichText::new("Description").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [220.0, 60.0],
                        egui::TextEdit::multiline(&mut form.description)
                            .hint_text("Add task description...")
                            .text_color(theme::TEXT_SECONDARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Priority").color(theme::TEXT_SECONDARY));
                    egui::ComboBox::from_id_salt("form_priority")
                        .selected_text(
                            RichText::new(format!(
                                "{} {}",
                                form.priority.icon(),
                                form.priority.label()
                            ))
                            .size(11.0),
                        )
                        .width(220.0)
                        .show_ui(ui, |ui| {
                            for &p in Priority::all() {
                                let label = format!("{} {}", p.icon(), p.label());
                                ui.selectable_value(&mut form.priority, p, label);
                            }
                        });
                    ui.end_row();

                    ui.label(RichText::new("Project").color(theme::TEXT_SECONDARY));
                    let project_name = projects
                        .iter()
                        .find(|p| p.id == form.project)
                        .map(|p| p.name)
                        .unwrap_or("Unknown");
                    egui::ComboBox::from_id_salt("form_project")
                        .selected_text(RichText::new(project_name).size(11.0))
                        .width(220.0)
                        .show_ui(ui, |ui| {
                            for project in projects {
                                ui.selectable_value(&mut form.project, project.id, project.name);
                            }
                        });
                    ui.end_row();

                    ui.label(RichText::new("Due Date").color(theme::TEXT_SECONDARY));
                    ui.horizontal(|ui| {
                        ui.checkbox(&mut form.has_due, "");
                        if form.has_due {
                            ui.add(
                                egui_extras::DatePickerButton::new(&mut form.due_date)
                                    .id_salt("form_due_date"),
                            );
                        }
                    });
                    ui.end_row();

                    if form.has_due {
                        ui.label(RichText::new("Due Time").color(theme::TEXT_SECONDARY));
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::DragValue::new(&mut form.due_hour)
                                    .range(0..=23)
                                    .custom_formatter(|v, _| format!("{:02}", v as u32)),
                            );
                            ui.label(":");
                            ui.add(
                                egui::DragValue::new(&mut form.due_minute)
                                    .range(0..=59)
                                    .custom_formatter(|v, _| format!("{:02}", v as u32)),
                            );
                        });
                        ui.end_row();
                    }

                    if is_edit {
                        ui.label(RichText::new("Status").color(theme::TEXT_SECONDARY));
                        egui::ComboBox::from_id_salt("form_status")
                            .selected_text(RichText::new(form.status.label()).size(11.0))
                            .width(220.0)
                            .show_ui(ui, |ui| {
                                for &s in Status::all() {
                                    ui.selectable_value(&mut form.status, s, s.label());
                                }
                            });
                        ui.end_row();
                    }
                });

            if let Some(error) = form.error {
                ui.add_space(2.0);
                ui.label(
                    RichText::new(error)
                        .size(11.0)
                        .color(theme::OVERDUE),
                );
            }

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let submit_label = if is_edit { "Update Task" } else { "Create Task" };
                let submit_btn = egui::Button::new(
                    RichText::new(submit_label).color(Color32::WHITE),
                )
                .fill(theme::ACCENT)
                .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([100.0, 28.0], submit_btn).clicked() {
                    if form.title.trim().is_empty() {
                        form.error = Some("Task title is required");
                    } else {
                        action = FormAction::Submit(form.draft());
                    }
                }
                if ui
                    .add_sized([80.0, 28.0], egui::Button::new("Cancel"))
                    .clicked()
                {
                    action = FormAction::Cancel;
                }
            });
            ui.add_space(2.0);
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = FormAction::Cancel;
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Project;
    use chrono::NaiveDate;

    fn task_with_due(hour: u32, minute: u32) -> Task {
        Task::from_draft(TaskDraft {
            title: "meeting".to_string(),
            description: "notes".to_string(),
            priority: Priority::High,
            status: Status::InProgress,
            project: ProjectId(2),
            due: Some(
                NaiveDate::from_ymd_opt(2024, 6, 1)
                    .unwrap()
                    .and_hms_opt(hour, minute, 0)
                    .unwrap(),
            ),
        })
    }

    #[test]
    fn create_form_uses_defaults() {
        let form = TaskForm::for_create(&Project::builtin());
        assert_eq!(form.mode, FormMode::Create);
        assert_eq!(form.priority, Priority::Medium);
        assert_eq!(form.status, Status::Pending);
        assert_eq!(form.project, ProjectId(1));
        assert!(!form.has_due);
        assert!(form.draft().due.is_none());
    }

    #[test]
    fn edit_form_prepopulates_every_field() {
        let task = task_with_due(14, 30);
        let form = TaskForm::for_edit(&task);

        assert_eq!(form.mode, FormMode::Edit(task.id));
        let draft = form.draft();
        assert_eq!(draft.title, "meeting");
        assert_eq!(draft.description, "notes");
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.status, Status::InProgress);
        assert_eq!(draft.project, ProjectId(2));
        assert_eq!(draft.due, task.due);
    }

    #[test]
    fn draft_trims_title_whitespace() {
        let mut form = TaskForm::for_create(&Project::builtin());
        form.title = "  spaced out  ".to_string();
        assert_eq!(form.draft().title, "spaced out");
    }
}
