use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Status banner, coloured by the status theme
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let status = &state.status;
    if !status.show_status {
        return;
    }

    styles::status_frame(status.theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(&status.message).color(colors::TEXT_LIGHT).strong());
    });
}
