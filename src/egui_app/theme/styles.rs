//! Theme Styling Functions
//!
//! Helpers that apply the palette consistently across the sync screen.

use eframe::egui::{self, CornerRadius, Stroke};

use super::colors;
use crate::shared::status::Theme;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::PANEL_BG;
    style.visuals.panel_fill = colors::BG_DARK;
    style.visuals.extreme_bg_color = colors::INPUT_BG;
    style.visuals.override_text_color = Some(colors::TEXT_LIGHT);

    style.visuals.widgets.noninteractive.bg_fill = colors::PANEL_BG;
    style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors::SEPARATOR);

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.weak_bg_fill = colors::INPUT_BG;

    style.visuals.widgets.hovered.bg_fill = colors::ACCENT_HOVER;
    style.visuals.widgets.hovered.weak_bg_fill = colors::ACCENT_HOVER;

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.weak_bg_fill = colors::ACCENT;

    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the form and result panels
pub fn panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(1.0, colors::SEPARATOR))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::same(12))
}

/// Create a frame for the status banner
pub fn status_frame(theme: Theme) -> egui::Frame {
    egui::Frame::new()
        .fill(colors::theme_color(theme))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 10))
}
