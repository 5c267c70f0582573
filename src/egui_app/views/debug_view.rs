use eframe::egui;

use crate::egui_app::debug::{DebugCategory, DebugLevel};
use crate::egui_app::state::AppState;

pub fn render_debug_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui
            .button(if state.debug_view_expanded { "⬇ Collapse" } else { "⬆ Expand" })
            .clicked()
        {
            state.debug_view_expanded = !state.debug_view_expanded;
        }

        if ui.button("🗑 Clear").clicked() {
            state.debug_logger.clear();
        }

        ui.separator();

        ui.label("Filter:");
        if ui.selectable_label(state.debug_filter_category.is_none(), "All").clicked() {
            state.debug_filter_category = None;
        }
        for category in DebugCategory::ALL {
            let selected = state.debug_filter_category == Some(category);
            if ui.selectable_label(selected, category.to_string()).clicked() {
                state.debug_filter_category = Some(category);
            }
        }
    });

    ui.separator();

    let entries = match state.debug_filter_category {
        Some(category) => state.debug_logger.get_entries_by_category(category),
        None => state.debug_logger.get_entries(),
    };

    let show_height = if state.debug_view_expanded { 400.0 } else { 150.0 };

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .max_height(show_height)
        .show(ui, |ui| {
            for entry in entries.iter().rev().take(if state.debug_view_expanded { 500 } else { 50 }) {
                let color = match entry.level {
                    DebugLevel::Error => egui::Color32::RED,
                    DebugLevel::Warn => egui::Color32::YELLOW,
                    DebugLevel::Info => egui::Color32::GREEN,
                    DebugLevel::Debug => egui::Color32::LIGHT_GRAY,
                };
                ui.colored_label(color, entry.to_string());
            }
        });

    ui.separator();

    ui.horizontal(|ui| {
        let errors = state.debug_logger.count_by_level(DebugLevel::Error);
        let warns = state.debug_logger.count_by_level(DebugLevel::Warn);
        ui.colored_label(egui::Color32::RED, format!("❌ Errors: {}", errors));
        ui.colored_label(egui::Color32::YELLOW, format!("⚠️ Warnings: {}", warns));
        ui.label(format!("Total: {}", state.debug_logger.count()));
    });
}
