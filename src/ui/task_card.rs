use chrono::{Local, NaiveDateTime};
use egui::{Color32, RichText, Ui};

use crate::model::{Project, Status, Task};
use crate::ui::theme;

/// Actions a task card can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    None,
    Edit,
    Delete,
    /// Toggle between completed and pending.
    ToggleStatus,
}

/// Urgency color of a due label: red when overdue, orange when due today.
pub fn due_color(due: NaiveDateTime, status: Status) -> Color32 {
    if status == Status::Completed {
        return theme::DONE_GREEN;
    }
    let now = Local::now().naive_local();
    if due < now {
        theme::OVERDUE
    } else if due.date() == now.date() {
        theme::DUE_TODAY
    } else {
        theme::TEXT_SECONDARY
    }
}

/// Compact "Jan 05 (Overdue)" style label for a due date.
pub fn due_label(due: NaiveDateTime, status: Status) -> String {
    let now = Local::now().naive_local();
    let mut label = due.format("%b %d").to_string();
    if due.date() == now.date() {
        label.push_str(" (Today)");
    } else if due < now && status != Status::Completed {
        label.push_str(" (Overdue)");
    }
    label
}

pub fn priority_badge(task: &Task, ui: &mut Ui) {
    let color = theme::priority_color(task.priority);
    egui::Frame::none()
        .fill(color.gamma_multiply(0.22))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("{} {}", task.priority.icon(), task.priority.label()))
                    .font(theme::font_small())
                    .color(color),
            );
        });
}

pub fn project_badge(project: Option<&Project>, ui: &mut Ui) {
    let (name, color) = match project {
        Some(p) => (p.name, p.color),
        None => ("Unknown", theme::TEXT_DIM),
    };
    egui::Frame::none()
        .fill(color.gamma_multiply(0.25))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.label(RichText::new(name).font(theme::font_small()).color(color));
        });
}

/// Render the shared card body used by the list rows and the board cards.
pub fn show_task_card(task: &Task, project: Option<&Project>, ui: &mut Ui) -> CardAction {
    let mut action = CardAction::None;

    ui.horizontal(|ui| {
        // Status toggle
        let toggle = ui.add(
            egui::Button::new(
                RichText::new(task.status.icon())
                    .size(15.0)
                    .color(theme::status_color(task.status)),
            )
            .frame(false),
        );
        if toggle.on_hover_text("Toggle done").clicked() {
            action = CardAction::ToggleStatus;
        }

        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 2.0;

            ui.horizontal(|ui| {
                let mut title = RichText::new(&task.title)
                    .font(theme::font_title())
                    .color(theme::TEXT_PRIMARY);
                if task.status == Status::Completed {
                    title = title.strikethrough().color(theme::TEXT_DIM);
                }
                ui.add(egui::Label::new(title).truncate());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let del = ui.add(
                        egui::Button::new(
                            RichText::new(egui_phosphor::regular::TRASH)
                                .size(11.0)
                                .color(theme::TEXT_DIM),
                        )
                        .frame(false),
                    );
                    if del.on_hover_text("Delete task").clicked() {
                        action = CardAction::Delete;
                    }

                    let edit = ui.add(
                        egui::Button::new(
                            RichText::new(egui_phosphor::regular::PENCIL_SIMPLE)
                                .size(11.0)
                                .color(theme::TEXT_DIM),
                        )
                        .frame(false),
                    );
                    if edit.on_hover_text("Edit task").clicked() {
                        action = CardAction::Edit;
                    }
                });
            });

            if !task.description.is_empty() {
                ui.add(
                    egui::Label::new(
                        RichText::new(&task.description)
                            .font(theme::font_body())
                            .color(theme::TEXT_SECONDARY),
                    )
                    .truncate(),
                );
            }

            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                priority_badge(task, ui);
                project_badge(project, ui);
                if let Some(due) = task.due {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::CALENDAR_BLANK,
                            due_label(due, task.status)
                        ))
                        .font(theme::font_small())
                        .color(due_color(due, task.status)),
                    );
                }
            });
        });
    });

    action
}

/// Floating title shown at the pointer while a card or chip is dragged.
pub fn show_drag_preview(ctx: &egui::Context, title: &str) {
    let Some(pos) = ctx.pointer_hover_pos() else {
        return;
    };
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("drag-preview"),
    ));
    let galley = painter.layout_no_wrap(
        title.to_string(),
        theme::font_body(),
        theme::TEXT_PRIMARY,
    );
    let rect = egui::Rect::from_min_size(
        pos + egui::vec2(12.0, 12.0),
        galley.size() + egui::vec2(12.0, 6.0),
    );
    painter.rect_filled(rect, egui::Rounding::same(4.0), theme::BG_CARD);
    painter.rect_stroke(
        rect,
        egui::Rounding::same(4.0),
        egui::Stroke::new(1.0, theme::BORDER_ACCENT),
    );
    painter.galley(rect.min + egui::vec2(6.0, 3.0), galley, Color32::TRANSPARENT);
}
