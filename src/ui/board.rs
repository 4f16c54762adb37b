use egui::{Rect, RichText, Sense, Stroke, Ui};
use uuid::Uuid;

use crate::app::DragState;
use crate::model::{Project, Status, Task};
use crate::ui::task_card::{self, CardAction};
use crate::ui::theme;

/// Actions the board view can request.
pub enum BoardAction {
    None,
    Edit(Uuid),
    Delete(Uuid),
    ToggleStatus(Uuid),
    /// A card was dropped on a different column.
    Drop(Uuid, Status),
}

/// Render the three Kanban columns and handle card drags between them.
///
/// `hovered` is the drop-target column carried across frames while a drag
/// is active; the drop is resolved against the value from the previous
/// frame, since a card's drag can end before its target column is reached
/// in this frame's pass.
pub fn show_board(
    tasks: &[Task],
    projects: &[Project],
    drag: &mut DragState,
    hovered: &mut Option<Status>,
    ui: &mut Ui,
) -> BoardAction {
    let mut action = BoardAction::None;
    let mut next_hover: Option<Status> = None;
    let mut drag_ended = false;

    ui.columns(3, |columns| {
        for (col, &status) in Status::all().iter().enumerate() {
            let ui = &mut columns[col];
            let column_tasks: Vec<&Task> = tasks.iter().filter(|t| t.status == status).collect();

            // Column header
            egui::Frame::none()
                .fill(theme::BG_CARD)
                .rounding(egui::Rounding::same(theme::CARD_ROUNDING))
                .inner_margin(egui::Margin::symmetric(8.0, 6.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(status.icon())
                                .size(14.0)
                                .color(theme::status_color(status)),
                        );
                        ui.label(
                            RichText::new(status.label())
                                .strong()
                                .size(13.0)
                                .color(theme::status_color(status)),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(column_tasks.len().to_string())
                                    .size(11.0)
                                    .color(theme::TEXT_DIM),
                            );
                        });
                    });
                });
            ui.add_space(4.0);

            // Column body
            let body_top = ui.cursor().min;
            egui::ScrollArea::vertical()
                .id_salt(("board-column", col))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if column_tasks.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(32.0);
                            ui.label(
                                RichText::new(status.icon())
                                    .size(32.0)
                                    .color(theme::status_color(status).gamma_multiply(0.3)),
                            );
                            ui.label(
                                RichText::new(format!(
                                    "No tasks in {}",
                                    status.label().to_lowercase()
                                ))
                                .size(11.0)
                                .color(theme::TEXT_DIM),
                            );
                        });
                    }

                    for task in &column_tasks {
                        let is_dragged = *drag == DragState::Dragging(task.id);
                        let frame = egui::Frame::none()
                            .fill(theme::BG_CARD)
                            .rounding(egui::Rounding::same(theme::CARD_ROUNDING))
                            .inner_margin(egui::Margin::symmetric(8.0, 6.0))
                            .stroke(if is_dragged {
                                Stroke::new(1.5, theme::BORDER_ACCENT)
                            } else {
                                Stroke::new(1.0, theme::BORDER_SUBTLE)
                            });

                        let frame_resp = frame.show(ui, |ui| {
                            let project = projects.iter().find(|p| p.id == task.project);
                            match task_card::show_task_card(task, project, ui) {
                                CardAction::Edit => action = BoardAction::Edit(task.id),
                                CardAction::Delete => action = BoardAction::Delete(task.id),
                                CardAction::ToggleStatus => {
                                    action = BoardAction::ToggleStatus(task.id)
                                }
                                CardAction::None => {}
                            }
                        });

                        // Whole card is a drag handle
                        let resp = ui.interact(
                            frame_resp.response.rect,
                            egui::Id::new(("board-card", task.id)),
                            Sense::click_and_drag(),
                        );
                        if resp.drag_started() {
                            *drag = DragState::Dragging(task.id);
                        }
                        if resp.dragged() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
                        }
                        if resp.drag_stopped() {
                            if let Some(target) = *hovered {
                                if target != task.status {
                                    action = BoardAction::Drop(task.id, target);
                                }
                            }
                            drag_ended = true;
                        }

                        ui.add_space(4.0);
                    }
                });

            // Drop-target highlight and hover tracking while dragging
            if let DragState::Dragging(_) = drag {
                let body_rect = Rect::from_min_max(body_top, ui.max_rect().max);
                if ui.rect_contains_pointer(body_rect) {
                    next_hover = Some(status);
                    ui.painter().rect_stroke(
                        body_rect,
                        egui::Rounding::same(theme::CARD_ROUNDING),
                        Stroke::new(1.5, theme::BORDER_ACCENT),
                    );
                }
            }
        }
    });

    if drag_ended {
        *drag = DragState::Idle;
        *hovered = None;
    } else {
        *hovered = next_hover;
        if let DragState::Dragging(id) = drag {
            if let Some(task) = tasks.iter().find(|t| t.id == *id) {
                task_card::show_drag_preview(ui.ctx(), &task.title);
            }
        }
    }

    action
}
