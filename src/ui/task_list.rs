use egui::{Color32, RichText, Ui};
use uuid::Uuid;

use crate::model::{Project, Task};
use crate::ui::task_card::{self, CardAction};
use crate::ui::theme;

/// Actions the list view can request.
pub enum ListAction {
    None,
    Edit(Uuid),
    Delete(Uuid),
    ToggleStatus(Uuid),
    NewTask,
}

/// Render the list view over the filtered/sorted tasks.
pub fn show_task_list(tasks: &[Task], projects: &[Project], ui: &mut Ui) -> ListAction {
    let mut action = ListAction::None;

    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Tasks")
                .strong()
                .size(15.0)
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("({})", tasks.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(2.0);

    if tasks.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(
                RichText::new(egui_phosphor::regular::CHECK_SQUARE)
                    .size(48.0)
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new("No tasks found")
                    .strong()
                    .size(14.0)
                    .color(theme::TEXT_SECONDARY),
            );
            ui.label(
                RichText::new("Create your first task to get started with TaskFlow")
                    .size(11.0)
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(10.0);
            let btn = egui::Button::new(
                RichText::new(format!("{}  Create Task", egui_phosphor::regular::PLUS))
                    .color(Color32::WHITE)
                    .size(12.0),
            )
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(5.0));
            if ui.add_sized([130.0, 30.0], btn).clicked() {
                action = ListAction::NewTask;
            }
        });
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, task) in tasks.iter().enumerate() {
                let row_bg = if i % 2 == 0 {
                    theme::BG_PANEL
                } else {
                    theme::BG_DARK
                };
                let frame = egui::Frame {
                    fill: row_bg,
                    rounding: egui::Rounding::same(4.0),
                    inner_margin: egui::Margin::symmetric(8.0, 6.0),
                    outer_margin: egui::Margin::ZERO,
                    stroke: egui::Stroke::NONE,
                    shadow: egui::epaint::Shadow::NONE,
                };

                frame.show(ui, |ui| {
                    let project = projects.iter().find(|p| p.id == task.project);
                    match task_card::show_task_card(task, project, ui) {
                        CardAction::Edit => action = ListAction::Edit(task.id),
                        CardAction::Delete => action = ListAction::Delete(task.id),
                        CardAction::ToggleStatus => action = ListAction::ToggleStatus(task.id),
                        CardAction::None => {}
                    }
                });
                ui.add_space(1.0);
            }
        });

    action
}
