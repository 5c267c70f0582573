//! Color Constants
//!
//! Dark blue-grey palette for the sync screen, plus one colour per status
//! theme for the banner.

use eframe::egui::Color32;

use crate::shared::status::Theme;

/// Main background
pub const BG_DARK: Color32 = Color32::from_rgb(0x1E, 0x23, 0x2B);

/// Form and results panels
pub const PANEL_BG: Color32 = Color32::from_rgb(0x27, 0x2E, 0x38);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x2E, 0x51, 0xA2);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x33, 0x3B, 0x47);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0x3D, 0x46, 0x53);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xEC, 0xEF, 0xF4);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA5, 0xB4);

/// Accent color for primary buttons
pub const ACCENT: Color32 = Color32::from_rgb(0x2E, 0x51, 0xA2);

/// Accent hover
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x3B, 0x63, 0xC0);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x3C, 0x9D, 0x5D);

/// Info color - Blue
pub const INFO: Color32 = Color32::from_rgb(0x31, 0x8C, 0xC9);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xE0, 0x8E, 0x1B);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xD0, 0x45, 0x45);

/// Banner color for a status theme
pub fn theme_color(theme: Theme) -> Color32 {
    match theme {
        Theme::Success => SUCCESS,
        Theme::Info => INFO,
        Theme::Warning => WARNING,
        Theme::Danger => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_colors_are_distinct() {
        let colors = [Theme::Success, Theme::Info, Theme::Warning, Theme::Danger].map(theme_color);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
