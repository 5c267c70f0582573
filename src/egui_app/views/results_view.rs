//! Results lists for the last check or sync.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::compare::{AniDiff, Diff};
use crate::shared::sync::Fail;
use crate::shared::Anime;

pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let status = &state.status;
    if !status.show_results {
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            if status.show_sync_results {
                if let Some(resp) = &state.sync_resp {
                    let sync = &resp.sync;
                    anime_section(ui, "Added", colors::SUCCESS, &sync.adds);
                    anime_section(ui, "Updated", colors::SUCCESS, &sync.updates);
                    fail_section(ui, "Failed to add", &sync.add_fails);
                    fail_section(ui, "Failed to update", &sync.update_fails);
                    render_diff(ui, &resp.diff, status.show_missing, status.show_need_update);
                }
            } else if let Some(resp) = &state.check_resp {
                render_diff(ui, &resp.diff, status.show_missing, status.show_need_update);
            }
        });
}

fn render_diff(ui: &mut egui::Ui, diff: &Diff, show_missing: bool, show_need_update: bool) {
    if show_missing {
        anime_section(ui, "Missing on MyAnimeList", colors::INFO, &diff.missing);
    }
    if show_need_update {
        diff_section(ui, "Need update", colors::WARNING, &diff.need_update, true);
    }
    if !diff.uncertain.is_empty() {
        diff_section(ui, "Uncertain", colors::TEXT_SECONDARY, &diff.uncertain, false);
    }
    ui.colored_label(
        colors::TEXT_SECONDARY,
        format!(
            "{} up to date · {} on Kitsu · {} on MyAnimeList",
            diff.up_to_date.len(),
            diff.right.len(),
            diff.left.len()
        ),
    );
}

fn section(ui: &mut egui::Ui, title: &str, color: egui::Color32, count: usize, open: bool, body: impl FnOnce(&mut egui::Ui)) {
    if count == 0 {
        return;
    }
    styles::panel_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::CollapsingHeader::new(egui::RichText::new(format!("{} ({})", title, count)).color(color).strong())
            .id_salt(title)
            .default_open(open)
            .show(ui, body);
    });
    ui.add_space(8.0);
}

fn anime_section(ui: &mut egui::Ui, title: &str, color: egui::Color32, anime: &[Anime]) {
    section(ui, title, color, anime.len(), true, |ui| {
        egui::Grid::new(title).striped(true).num_columns(5).show(ui, |ui| {
            for a in anime {
                anime_row(ui, a);
                ui.end_row();
            }
        });
    });
}

fn diff_section(ui: &mut egui::Ui, title: &str, color: egui::Color32, diffs: &[AniDiff], open: bool) {
    section(ui, title, color, diffs.len(), open, |ui| {
        for d in diffs {
            ui.horizontal(|ui| anime_row(ui, &d.anime));
            for change in d.changes() {
                ui.horizontal(|ui| {
                    ui.add_space(24.0);
                    ui.colored_label(colors::TEXT_SECONDARY, format!("|-> {}", change));
                });
            }
            ui.add_space(4.0);
        }
    });
}

fn fail_section(ui: &mut egui::Ui, title: &str, fails: &[Fail]) {
    section(ui, title, colors::ERROR, fails.len(), true, |ui| {
        for fail in fails {
            ui.horizontal(|ui| anime_row(ui, &fail.anime));
            ui.horizontal(|ui| {
                ui.add_space(24.0);
                ui.colored_label(colors::ERROR, fail.error.as_str());
            });
        }
    });
}

fn anime_row(ui: &mut egui::Ui, anime: &Anime) {
    ui.monospace(format!("{:>7}", anime.id));
    ui.label(egui::RichText::new(&anime.title).strong());
    ui.label(anime.status.map(|s| s.to_string()).unwrap_or_default());
    ui.label(format!("{} ep", anime.episodes_watched));
    ui.label(if anime.rating.is_empty() { "-" } else { anime.rating.as_str() });
}
