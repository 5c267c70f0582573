//! Theme Module
//!
//! Color scheme and styling for the sync screen:
//!
//! - Color constants, and the banner color for each status `Theme`
//! - Frame builders for the top bar, panels and status banner
//!
//! # Usage
//!
//! ```rust,ignore
//! use anisync::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::status_frame(view.theme).show(ui, |ui| {
//!     ui.label(&view.message);
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
