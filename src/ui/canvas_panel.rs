//! Canvas panel UI rendering
//!
//! The annotation surface: hall image (or placeholder), committed seat
//! overlays, and the live drag rectangle. Pointer input is captured here
//! and routed through the drawing-session state machine; the resulting
//! frame is rebuilt and painted synchronously in the same update, so the
//! in-progress rectangle tracks the pointer without lag.

use crate::app::AppState;
use crate::presentation::color_mapping::SeatPalette;
use crate::rendering::canvas_renderer;
use crate::ui::input::canvas_input_handler;
use eframe::egui;
use seatmap::{build_frame, SessionEffect, CANVAS_LOGICAL_HEIGHT, CANVAS_LOGICAL_WIDTH};

/// Renders the canvas panel.
///
/// # Returns
/// A session effect when a pointer gesture produced one; `Commit`
/// effects must be applied to the grid by the coordinator.
pub fn render_canvas_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    palette: &SeatPalette,
) -> Option<SessionEffect> {
    let camera_name = state
        .hall
        .camera()
        .map(|c| c.name.clone())
        .unwrap_or_default();
    ui.heading(format!("📷 {} - Hall View", camera_name));
    ui.separator();

    if state.image.is_loading() {
        ui.weak("Decoding hall image…");
    }

    // Fit the 4:3 logical canvas into the available space.
    let available = ui.available_size();
    let aspect = CANVAS_LOGICAL_HEIGHT / CANVAS_LOGICAL_WIDTH;
    let mut width = available.x;
    let mut height = width * aspect;
    let reserved_hint = 40.0;
    if height > available.y - reserved_hint {
        height = (available.y - reserved_hint).max(0.0);
        width = height / aspect;
    }

    let (canvas_rect, response) =
        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::drag());

    // No drawable surface this frame; skip input and painting.
    if canvas_rect.width() <= 0.0 || canvas_rect.height() <= 0.0 {
        return None;
    }

    if state.session.is_active() {
        response.clone().on_hover_cursor(egui::CursorIcon::Crosshair);
    }

    // Split borrows: the session mutates while the grid is only read.
    let AppState { session, hall, .. } = state;
    let effect =
        canvas_input_handler::handle_canvas_input(&response, canvas_rect, session, hall.hall_view());

    let frame = build_frame(
        state.hall.hall_view(),
        &state.session,
        state.background_status(),
    );
    canvas_renderer::execute_frame(
        &ui.painter_at(canvas_rect),
        canvas_rect,
        &frame,
        state.image.texture(),
        palette,
    );

    render_drawing_hint(ui, state);

    match effect {
        SessionEffect::None => None,
        other => Some(other),
    }
}

/// Hint strip under the canvas while drawing mode is active.
fn render_drawing_hint(ui: &mut egui::Ui, state: &AppState) {
    let Some(target) = state.session.target() else {
        return;
    };
    ui.horizontal(|ui| {
        ui.strong("Drawing Mode Active:");
        ui.label(format!(
            "Mapping {}, Seat {}",
            target.row_name,
            target.seat_index + 1
        ));
        ui.weak("Click and drag to define seat boundaries");
    });
}
