/**
 * anisync Desktop App - Main Entry Point
 *
 * Native egui client for the anisync server. Compares a Kitsu library with a
 * MyAnimeList list and syncs the differences.
 */
use eframe::egui;
use anisync::egui_app::config::{Config, Preferences};
use anisync::egui_app::theme::styles;
use anisync::egui_app::{views, AppState};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,anisync=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let state = AppState::new(config, Preferences::default_path());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "anisync",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(AnisyncApp { state }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct AnisyncApp {
    state: AppState,
}

impl eframe::App for AnisyncApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &self.state);
        views::render_debug_panel(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Keep polling while workers are out
        if self.state.loading || self.state.password == anisync::egui_app::types::PasswordState::Checking {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
