//! Seat overlay colors.
//!
//! Maps the active theme onto the colors the canvas renderer uses:
//! occupied seats red, vacant seats green, the live drag rectangle blue,
//! all semi-transparent so the hall image stays visible underneath.

use egui::Color32;
use seatmap::{adjust_brightness, with_alpha, ThemeColors, ThemeManager};

/// Resolved colors for one canvas frame.
#[derive(Debug, Clone)]
pub struct SeatPalette {
    /// Canvas clear color
    pub surface: Color32,
    /// Placeholder fill when no hall image is loaded
    pub placeholder_fill: Color32,
    /// Placeholder prompt text
    pub placeholder_text: Color32,

    pub occupied_fill: Color32,
    pub occupied_outline: Color32,
    pub vacant_fill: Color32,
    pub vacant_outline: Color32,

    pub live_fill: Color32,
    pub live_outline: Color32,

    /// Seat number labels inside committed boxes
    pub label: Color32,
    /// Target label inside the live rectangle
    pub live_label: Color32,
}

/// Returns a reference to the current theme's color palette,
/// falling back to the dark theme.
pub fn theme_colors<'a>(
    theme_manager: &'a ThemeManager,
    current_theme_name: &str,
) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or_else(|| &theme_manager.get_theme("Dark").expect("builtin").colors)
}

/// Derives the seat overlay palette from the theme colors.
pub fn seat_palette(colors: &ThemeColors) -> SeatPalette {
    SeatPalette {
        surface: colors.extreme_background,
        placeholder_fill: colors.hover,
        placeholder_text: colors.text_dim,

        // 60% alpha fills so the seats read against the photo
        occupied_fill: with_alpha(colors.red, 153),
        occupied_outline: adjust_brightness(colors.red, 0.85),
        vacant_fill: with_alpha(colors.green, 153),
        vacant_outline: adjust_brightness(colors.green, 0.85),

        // Lighter fill for the in-progress rectangle
        live_fill: with_alpha(colors.blue, 77),
        live_outline: colors.blue,

        label: Color32::WHITE,
        live_label: adjust_brightness(colors.blue, 1.3),
    }
}
