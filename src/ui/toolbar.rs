use egui::{Color32, RichText, Ui};

use crate::app::{TaskFlowApp, ViewMode};
use crate::model::{SortKey, Status};
use crate::ui::theme;

/// Actions the controls bar can request.
pub enum ToolbarAction {
    None,
    NewTask,
}

/// Render the top controls bar: new-task button, project selector, view
/// toggle, sort and status filters.
pub fn show_toolbar(app: &mut TaskFlowApp, ui: &mut Ui) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        let new_btn = egui::Button::new(
            RichText::new(format!("{}  New Task", egui_phosphor::regular::PLUS))
                .color(Color32::WHITE)
                .size(12.0),
        )
        .fill(theme::ACCENT)
        .rounding(egui::Rounding::same(5.0));
        if ui.add_sized([100.0, 26.0], new_btn).clicked() {
            action = ToolbarAction::NewTask;
        }

        ui.add_space(4.0);

        // Project filter with live task counts
        let project_items: Vec<_> = app
            .store
            .projects()
            .iter()
            .map(|p| (p.id, format!("{} ({})", p.name, p.task_count)))
            .collect();
        let project_label = app
            .selected_project
            .and_then(|id| project_items.iter().find(|(pid, _)| *pid == id))
            .map(|(_, label)| label.clone())
            .unwrap_or_else(|| "All Projects".to_string());
        egui::ComboBox::from_id_salt("project_filter")
            .selected_text(RichText::new(project_label).size(11.0))
            .width(130.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.selected_project, None, "All Projects");
                for (id, label) in &project_items {
                    ui.selectable_value(&mut app.selected_project, Some(*id), label);
                }
            });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Sort and status filter; the board orders by column, so both
            // selectors are hidden there and only the project filter stays.
            if app.view != ViewMode::Board {
                let status_label = match app.filter_status {
                    None => "All Status",
                    Some(s) => s.label(),
                };
                egui::ComboBox::from_id_salt("status_filter")
                    .selected_text(RichText::new(status_label).size(11.0))
                    .width(100.0)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut app.filter_status, None, "All Status");
                        for &status in Status::all() {
                            ui.selectable_value(
                                &mut app.filter_status,
                                Some(status),
                                status.label(),
                            );
                        }
                    });

                egui::ComboBox::from_id_salt("sort_key")
                    .selected_text(RichText::new(app.sort_by.label()).size(11.0))
                    .width(90.0)
                    .show_ui(ui, |ui| {
                        for &key in SortKey::all() {
                            ui.selectable_value(&mut app.sort_by, key, key.label());
                        }
                    });
            }

            ui.add_space(4.0);

            // View mode toggle
            for &(mode, icon) in [
                (ViewMode::Calendar, egui_phosphor::regular::CALENDAR_BLANK),
                (ViewMode::Board, egui_phosphor::regular::COLUMNS),
                (ViewMode::List, egui_phosphor::regular::LIST),
            ]
            .iter()
            {
                let selected = app.view == mode;
                let label = ui.selectable_label(
                    selected,
                    RichText::new(icon).size(14.0).color(if selected {
                        theme::ACCENT
                    } else {
                        theme::TEXT_SECONDARY
                    }),
                );
                if label.on_hover_text(mode.label()).clicked() {
                    app.view = mode;
                }
            }
        });
    });

    action
}
