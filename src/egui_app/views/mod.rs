use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod debug_view;
pub mod form_view;
pub mod results_view;
pub mod status_view;

pub fn render_top_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("anisync").size(18.0).strong());
                ui.colored_label(colors::TEXT_SECONDARY, "Kitsu → MyAnimeList");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    let config = state.api.config();
                    if config.use_mock() {
                        ui.colored_label(colors::WARNING, "MOCK");
                    }
                    ui.colored_label(colors::TEXT_SECONDARY, config.server_url());
                });
            });
        });
}

pub fn render_debug_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::bottom("debug_panel")
        .resizable(false)
        .frame(styles::top_bar_frame().fill(colors::PANEL_BG))
        .show(ctx, |ui| {
            egui::CollapsingHeader::new(format!("Activity ({})", state.debug_logger.count()))
                .id_salt("activity_log")
                .show(ui, |ui| debug_view::render_debug_panel(ui, state));
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        form_view::render(ui, state);
        ui.add_space(12.0);
        status_view::render(ui, state);
        ui.add_space(12.0);
        results_view::render(ui, state);
    });
}
