//! Drawing controls panel UI rendering
//!
//! Shows the session status: an idle hint, or the active target with a
//! stop control.

use crate::app::AppState;
use eframe::egui;
use seatmap::ThemeColors;

/// Result of user interaction with the drawing panel
pub enum DrawingPanelInteraction {
    StopDrawingRequested,
}

/// Renders the drawing controls panel.
pub fn render_drawing_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
) -> Option<DrawingPanelInteraction> {
    let mut interaction = None;

    ui.heading("Drawing Controls");
    ui.separator();

    let Some(target) = state.session.target() else {
        ui.weak("Select a row to start seat mapping");
        return None;
    };

    ui.colored_label(theme_colors.blue, "● Drawing Mode Active");
    ui.label(format!("Row: {}", target.row_name));
    ui.label(format!("Seat: {}", target.seat_index + 1));

    ui.add_space(4.0);
    ui.weak("Click and drag on the hall image to define seat boundaries.");
    ui.weak("Each rectangle is mapped to the next seat automatically.");
    ui.weak("Drawing stops when all seats in the row are mapped.");
    ui.add_space(4.0);

    if ui
        .add_sized(
            [ui.available_width(), 24.0],
            egui::Button::new("⏹ Stop Drawing"),
        )
        .clicked()
    {
        interaction = Some(DrawingPanelInteraction::StopDrawingRequested);
    }

    interaction
}
