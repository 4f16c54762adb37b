use egui::RichText;
use uuid::Uuid;

use crate::io::StoragePort;
use crate::model::calendar::drop_target;
use crate::model::filter::visible_tasks;
use crate::model::{ProjectId, SortKey, Status};
use crate::store::TaskStore;
use crate::ui;
use crate::ui::calendar::CalendarState;
use crate::ui::task_form::{FormAction, FormMode, TaskForm};
use crate::ui::theme;

/// Which of the three interchangeable views is active. All of them consume
/// the same filtered/sorted task sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Board,
    Calendar,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::List => "List",
            ViewMode::Board => "Board",
            ViewMode::Calendar => "Calendar",
        }
    }
}

/// The single active drag gesture, if any. Only one view is visible at a
/// time, so board and calendar share this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging(Uuid),
}

/// Main application state.
pub struct TaskFlowApp {
    pub store: TaskStore,
    pub view: ViewMode,

    // Filter/sort selectors feeding the pipeline
    pub selected_project: Option<ProjectId>,
    pub filter_status: Option<Status>,
    pub sort_by: SortKey,

    // Form state; None is the closed state
    pub form: Option<TaskForm>,

    // Per-render drag bookkeeping, never persisted
    pub drag: DragState,
    pub board_hover: Option<Status>,
    pub calendar: CalendarState,

    // Status message
    pub status_message: String,
}

impl TaskFlowApp {
    pub fn new(cc: &eframe::CreationContext<'_>, storage: Box<dyn StoragePort>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self {
            store: TaskStore::open(storage),
            view: ViewMode::List,
            selected_project: None,
            filter_status: None,
            sort_by: SortKey::default(),
            form: None,
            drag: DragState::Idle,
            board_hover: None,
            calendar: CalendarState::new(),
            status_message: "Ready".to_string(),
        }
    }

    fn open_create_form(&mut self) {
        self.form = Some(TaskForm::for_create(self.store.projects()));
    }

    fn open_edit_form(&mut self, id: Uuid) {
        if let Some(task) = self.store.get(id) {
            self.form = Some(TaskForm::for_edit(task));
        }
    }

    fn delete_task(&mut self, id: Uuid) {
        self.store.remove(id);
        self.status_message = "Task deleted successfully!".to_string();
    }

    fn toggle_status(&mut self, id: Uuid) {
        let next = self.store.get(id).map(|task| task.status.toggled());
        if let Some(next) = next {
            self.store.set_status(id, next);
            self.status_message = format!("Task marked as {}!", next.label());
        }
    }

    fn move_to_column(&mut self, id: Uuid, status: Status) {
        self.store.set_status(id, status);
        self.status_message = format!("Task marked as {}!", status.label());
    }

    fn drop_on_day(&mut self, id: Uuid, day: chrono::NaiveDate) {
        // A drop on the task's current day never reaches the store.
        let target = self.store.get(id).and_then(|t| drop_target(t.due, day));
        if let Some(due) = target {
            self.store.reschedule(id, due);
            self.status_message = format!("Task rescheduled to {}", due.format("%b %d"));
        }
    }
}

impl eframe::App for TaskFlowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        theme::apply_theme(ctx);

        // Top panel: controls bar
        let view_before = self.view;
        let mut toolbar_action = ui::toolbar::ToolbarAction::None;
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            toolbar_action = ui::toolbar::show_toolbar(self, ui);
            ui.add_space(4.0);
        });
        if let ui::toolbar::ToolbarAction::NewTask = toolbar_action {
            self.open_create_form();
        }
        if self.view != view_before {
            // A view switch ends any gesture in the old view.
            self.drag = DragState::Idle;
            self.board_hover = None;
            self.calendar.hovered_day = None;
        }

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(theme::BG_DARK)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(&self.status_message)
                            .size(10.5)
                            .color(theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("Tasks: {}", self.store.tasks().len()))
                                .size(10.5)
                                .color(theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: the active view over the filtered/sorted tasks
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(theme::BG_DARK)
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                let visible = visible_tasks(
                    self.store.tasks(),
                    self.selected_project,
                    self.filter_status,
                    self.sort_by,
                );

                match self.view {
                    ViewMode::List => {
                        let action =
                            ui::task_list::show_task_list(&visible, self.store.projects(), ui);
                        match action {
                            ui::task_list::ListAction::Edit(id) => self.open_edit_form(id),
                            ui::task_list::ListAction::Delete(id) => self.delete_task(id),
                            ui::task_list::ListAction::ToggleStatus(id) => self.toggle_status(id),
                            ui::task_list::ListAction::NewTask => self.open_create_form(),
                            ui::task_list::ListAction::None => {}
                        }
                    }
                    ViewMode::Board => {
                        let mut drag = self.drag;
                        let mut hover = self.board_hover;
                        let action = ui::board::show_board(
                            &visible,
                            self.store.projects(),
                            &mut drag,
                            &mut hover,
                            ui,
                        );
                        self.drag = drag;
                        self.board_hover = hover;
                        match action {
                            ui::board::BoardAction::Edit(id) => self.open_edit_form(id),
                            ui::board::BoardAction::Delete(id) => self.delete_task(id),
                            ui::board::BoardAction::ToggleStatus(id) => self.toggle_status(id),
                            ui::board::BoardAction::Drop(id, status) => {
                                self.move_to_column(id, status)
                            }
                            ui::board::BoardAction::None => {}
                        }
                    }
                    ViewMode::Calendar => {
                        let mut drag = self.drag;
                        let action = ui::calendar::show_calendar(
                            &visible,
                            &mut self.calendar,
                            &mut drag,
                            ui,
                        );
                        self.drag = drag;
                        match action {
                            ui::calendar::CalendarAction::Edit(id) => self.open_edit_form(id),
                            ui::calendar::CalendarAction::Drop(id, day) => {
                                self.drop_on_day(id, day)
                            }
                            ui::calendar::CalendarAction::None => {}
                        }
                    }
                }
            });

        // Task form dialog
        let mut form_action = FormAction::None;
        let mut form_mode = None;
        if let Some(form) = &mut self.form {
            form_mode = Some(form.mode);
            form_action = ui::task_form::show_task_form(form, self.store.projects(), ctx);
        }
        match (form_action, form_mode) {
            (FormAction::Submit(draft), Some(FormMode::Create)) => {
                self.store.create(draft);
                self.status_message = "Task created successfully!".to_string();
                self.form = None;
            }
            (FormAction::Submit(draft), Some(FormMode::Edit(id))) => {
                self.store.update(id, draft);
                self.status_message = "Task updated successfully!".to_string();
                self.form = None;
            }
            (FormAction::Cancel, _) => {
                self.form = None;
            }
            _ => {}
        }
    }
}
