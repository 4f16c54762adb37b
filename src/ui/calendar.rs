use chrono::{Datelike, Local, NaiveDate};
use egui::{RichText, Sense, Stroke, Ui};
use uuid::Uuid;

use crate::app::DragState;
use crate::model::calendar::{first_of_month, month_grid, next_month, prev_month, tasks_due_on};
use crate::model::Task;
use crate::ui::task_card;
use crate::ui::theme;

/// How many task chips a day cell shows before collapsing into "+n more".
const MAX_CHIPS_PER_DAY: usize = 3;

/// Actions the calendar view can request.
pub enum CalendarAction {
    None,
    Edit(Uuid),
    /// A chip was dropped on a day cell. The date still has to be resolved
    /// against the task's current due (no-op and time preservation).
    Drop(Uuid, NaiveDate),
}

/// Per-view state: the displayed month and the drop-target day carried
/// across frames while a drag is active.
pub struct CalendarState {
    pub month: NaiveDate,
    pub hovered_day: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new() -> Self {
        Self {
            month: first_of_month(Local::now().date_naive()),
            hovered_day: None,
        }
    }
}

/// Render the month calendar and handle chip drags onto day cells.
pub fn show_calendar(
    tasks: &[Task],
    state: &mut CalendarState,
    drag: &mut DragState,
    ui: &mut Ui,
) -> CalendarAction {
    let mut action = CalendarAction::None;
    let mut next_hover: Option<NaiveDate> = None;
    let mut drag_ended = false;
    let today = Local::now().date_naive();

    // Month header: ‹ month name › with a Today shortcut
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(state.month.format("%B %Y").to_string())
                .strong()
                .size(16.0)
                .color(theme::TEXT_PRIMARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(RichText::new(egui_phosphor::regular::CARET_RIGHT).size(13.0))
                .clicked()
            {
                state.month = next_month(state.month);
            }
            if ui.button(RichText::new("Today").size(11.0)).clicked() {
                state.month = first_of_month(today);
            }
            if ui
                .button(RichText::new(egui_phosphor::regular::CARET_LEFT).size(13.0))
                .clicked()
            {
                state.month = prev_month(state.month);
            }
        });
    });
    ui.add_space(4.0);

    // Weekday header row
    ui.columns(7, |columns| {
        for (i, name) in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
            .iter()
            .enumerate()
        {
            columns[i].vertical_centered(|ui| {
                ui.label(
                    RichText::new(*name)
                        .font(theme::font_small())
                        .color(theme::TEXT_DIM),
                );
            });
        }
    });
    ui.add_space(2.0);

    let days = month_grid(state.month);
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for week in days.chunks(7) {
                ui.columns(7, |columns| {
                    for (i, &day) in week.iter().enumerate() {
                        let ui = &mut columns[i];
                        let in_month = day.month() == state.month.month()
                            && day.year() == state.month.year();
                        let is_drop_target = state.hovered_day == Some(day);

                        let frame = egui::Frame {
                            fill: if is_drop_target {
                                theme::DROP_HIGHLIGHT
                            } else if in_month {
                                theme::BG_PANEL
                            } else {
                                theme::BG_CELL_MUTED
                            },
                            rounding: egui::Rounding::same(4.0),
                            inner_margin: egui::Margin::same(4.0),
                            outer_margin: egui::Margin::same(1.0),
                            stroke: if is_drop_target {
                                Stroke::new(1.5, theme::BORDER_ACCENT)
                            } else if day == today {
                                Stroke::new(1.5, theme::TODAY_RING)
                            } else {
                                Stroke::new(0.5, theme::BORDER_SUBTLE)
                            },
                            shadow: egui::epaint::Shadow::NONE,
                        };

                        let cell_resp = frame.show(ui, |ui| {
                            ui.set_min_height(theme::CALENDAR_CELL_HEIGHT);
                            ui.spacing_mut().item_spacing.y = 2.0;

                            let day_color = if day == today {
                                theme::ACCENT
                            } else if in_month {
                                theme::TEXT_PRIMARY
                            } else {
                                theme::TEXT_DIM
                            };
                            ui.label(
                                RichText::new(day.day().to_string())
                                    .font(theme::font_body())
                                    .color(day_color),
                            );

                            let day_tasks = tasks_due_on(tasks, day);
                            for task in day_tasks.iter().take(MAX_CHIPS_PER_DAY) {
                                match show_chip(task, drag, state.hovered_day, ui) {
                                    ChipEvent::Clicked => action = CalendarAction::Edit(task.id),
                                    ChipEvent::Dropped(target) => {
                                        action = CalendarAction::Drop(task.id, target);
                                        drag_ended = true;
                                    }
                                    ChipEvent::DragReleased => drag_ended = true,
                                    ChipEvent::None => {}
                                }
                            }
                            if day_tasks.len() > MAX_CHIPS_PER_DAY {
                                ui.label(
                                    RichText::new(format!(
                                        "+{} more",
                                        day_tasks.len() - MAX_CHIPS_PER_DAY
                                    ))
                                    .font(theme::font_small())
                                    .color(theme::TEXT_DIM),
                                );
                            }
                        });

                        if let DragState::Dragging(_) = drag {
                            if ui.rect_contains_pointer(cell_resp.response.rect) {
                                next_hover = Some(day);
                            }
                        }
                    }
                });
            }
        });

    if drag_ended {
        *drag = DragState::Idle;
        state.hovered_day = None;
    } else {
        state.hovered_day = next_hover;
        if let DragState::Dragging(id) = drag {
            if let Some(task) = tasks.iter().find(|t| t.id == *id) {
                task_card::show_drag_preview(ui.ctx(), &task.title);
            }
        }
    }

    action
}

enum ChipEvent {
    None,
    Clicked,
    /// Drag released over the day carried in the hover state.
    Dropped(NaiveDate),
    /// Drag released with no valid target under the pointer.
    DragReleased,
}

fn show_chip(
    task: &Task,
    drag: &mut DragState,
    hovered_day: Option<NaiveDate>,
    ui: &mut Ui,
) -> ChipEvent {
    let mut event = ChipEvent::None;
    let color = theme::priority_color(task.priority);
    let is_dragged = *drag == DragState::Dragging(task.id);

    let frame = egui::Frame::none()
        .fill(color.gamma_multiply(0.22))
        .rounding(egui::Rounding::same(3.0))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .stroke(if is_dragged {
            Stroke::new(1.0, theme::BORDER_ACCENT)
        } else {
            Stroke::NONE
        });

    let frame_resp = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        let mut title = RichText::new(&task.title)
            .font(theme::font_small())
            .color(color);
        if task.status == crate::model::Status::Completed {
            title = title.strikethrough();
        }
        ui.add(egui::Label::new(title).truncate());
        if let Some(due) = task.due {
            ui.label(
                RichText::new(due.format("%I:%M %p").to_string())
                    .font(theme::font_small())
                    .color(theme::TEXT_SECONDARY),
            );
        }
    });

    let resp = ui.interact(
        frame_resp.response.rect,
        egui::Id::new(("calendar-chip", task.id)),
        Sense::click_and_drag(),
    );
    if resp.clicked() {
        event = ChipEvent::Clicked;
    }
    if resp.drag_started() {
        *drag = DragState::Dragging(task.id);
    }
    if resp.dragged() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    }
    if resp.drag_stopped() {
        event = match hovered_day {
            Some(day) => ChipEvent::Dropped(day),
            None => ChipEvent::DragReleased,
        };
    }

    resp.on_hover_text(&task.title);
    event
}
