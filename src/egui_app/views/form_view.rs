//! Account form: Kitsu user ID, MyAnimeList username, sync switch and
//! password, Check and Sync buttons.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::PasswordState;

const LABEL_WIDTH: f32 = 150.0;
const INPUT_WIDTH: f32 = 240.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::panel_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        egui::Grid::new("account_form")
            .num_columns(3)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                label(ui, "Kitsu user ID");
                ui.add_sized(
                    [INPUT_WIDTH, 24.0],
                    egui::TextEdit::singleline(&mut state.kitsu_user_id).hint_text("e.g. 12345"),
                );
                ui.end_row();

                label(ui, "MyAnimeList username");
                let username = ui.add_sized(
                    [INPUT_WIDTH, 24.0],
                    egui::TextEdit::singleline(&mut state.mal_username),
                );
                if username.changed() && state.switch_on {
                    state.password = PasswordState::Unchecked;
                }
                if username.lost_focus() {
                    state.username_committed();
                }
                ui.end_row();

                label(ui, "Sync");
                let mut switch_on = state.switch_on;
                if ui.checkbox(&mut switch_on, "Update MyAnimeList").changed() {
                    state.switch_toggle();
                }
                ui.end_row();

                if state.switch_on {
                    label(ui, "MyAnimeList password");
                    let password = ui.add_sized(
                        [INPUT_WIDTH, 24.0],
                        egui::TextEdit::singleline(&mut state.mal_password).password(true),
                    );
                    if password.changed() {
                        state.password = PasswordState::Unchecked;
                    }
                    if password.lost_focus() && state.password == PasswordState::Unchecked {
                        state.password_changed();
                    }
                    render_password_marker(ui, state.password);
                    ui.end_row();
                }
            });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.add_space(LABEL_WIDTH + 12.0);

            let check = egui::Button::new(egui::RichText::new("Check").color(colors::TEXT_LIGHT))
                .fill(colors::ACCENT)
                .min_size(egui::vec2(100.0, 30.0));
            if ui.add_enabled(!state.loading, check).clicked() {
                state.check();
            }

            if state.switch_on {
                let sync = egui::Button::new(egui::RichText::new("Sync").color(colors::TEXT_LIGHT))
                    .fill(colors::SUCCESS)
                    .min_size(egui::vec2(100.0, 30.0));
                if ui.add_enabled(state.can_sync(), sync).clicked() {
                    state.sync();
                }
            }

            if state.loading {
                ui.spinner();
                ui.colored_label(colors::TEXT_SECONDARY, "Loading...");
            }
        });
    });
}

fn label(ui: &mut egui::Ui, text: &str) {
    ui.add_sized(
        [LABEL_WIDTH, 24.0],
        egui::Label::new(egui::RichText::new(text).color(colors::TEXT_SECONDARY)),
    );
}

fn render_password_marker(ui: &mut egui::Ui, password: PasswordState) {
    match password {
        PasswordState::Checking => {
            ui.spinner();
        }
        PasswordState::Valid => {
            ui.colored_label(colors::SUCCESS, password.marker());
        }
        PasswordState::Invalid => {
            ui.colored_label(colors::ERROR, password.marker())
                .on_hover_text("MyAnimeList rejected this username and password");
        }
        PasswordState::Unchecked => {
            ui.label("");
        }
    }
}
