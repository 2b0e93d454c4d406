//! Application-level coordination and workflow management.
//!
//! Applies panel interactions to the application state: catalog
//! selection, row creation, drawing-session control, gesture commits and
//! the on-demand classification passes. Panels never mutate the grid
//! directly; everything funnels through here.

use crate::app::AppState;
use crate::io::{CatalogLoader, ImageLoadResult, ImageLoader};
use seatmap::{
    evaluate_occupancy, save_base_colors, SeatClassifier, SessionEffect,
};
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    // ===== Catalog =====

    /// Applies a finished catalog fetch to the state.
    ///
    /// Called once per frame in the update loop. Returns true if a fetch
    /// completed this frame.
    pub fn check_catalog_completion(state: &mut AppState, loader: &mut CatalogLoader) -> bool {
        match loader.check_completion() {
            Some(loaded) => {
                // A selected camera that does not exist in the fetched
                // catalog cannot be annotated further; drop its view.
                let camera_stale = state
                    .hall
                    .camera()
                    .map(|c| loaded.catalog.camera_by_id(&c.id).is_none())
                    .unwrap_or(false);
                if camera_stale {
                    state.hall.clear();
                    state.reset_for_camera_switch();
                }

                state.catalog.install_catalog(loaded.catalog, loaded.remote);
                if !loaded.remote {
                    state.notice =
                        Some("Catalog server unreachable, using built-in sample data".to_string());
                }
                true
            }
            None => false,
        }
    }

    /// Narrows the hall picker; the current hall view survives until a
    /// different camera is actually selected.
    pub fn select_entity(state: &mut AppState, entity_id: &str) {
        state.catalog.select_entity(entity_id);
    }

    pub fn select_hall(state: &mut AppState, hall_id: &str) {
        state.catalog.select_hall(hall_id);
    }

    /// Selects a camera and replaces the hall view wholesale.
    pub fn select_camera(state: &mut AppState, camera_id: &str) {
        let Some(camera) = state.catalog.catalog().camera_by_id(camera_id).cloned() else {
            return;
        };
        let name = camera.name.clone();
        state.hall.select_camera(camera);
        state.reset_for_camera_switch();
        state.notice = Some(format!("Camera {} selected", name));
    }

    // ===== Hall image =====

    /// Starts decoding a hall image in the background.
    pub fn open_image_file(
        state: &mut AppState,
        loader: &mut ImageLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.image.set_loading(true);
        loader.start_load(path, ctx);
    }

    /// Installs a finished image decode as the canvas background.
    ///
    /// Replacing the image does not clear existing seat rectangles.
    /// Returns true if a decode completed this frame (success or error).
    pub fn check_image_completion(
        state: &mut AppState,
        loader: &mut ImageLoader,
        ctx: &egui::Context,
    ) -> bool {
        match loader.check_completion() {
            ImageLoadResult::Success(decoded) => {
                let color_image =
                    egui::ColorImage::from_rgba_unmultiplied(decoded.size, &decoded.rgba);
                let texture =
                    ctx.load_texture("hall-image", color_image, egui::TextureOptions::LINEAR);
                state.image.install(texture);
                state.error_message = None;
                state.notice = Some("Hall image uploaded successfully".to_string());
                true
            }
            ImageLoadResult::Error(error_msg) => {
                state.image.set_loading(false);
                state.error_message = Some(format!("Error loading hall image: {}", error_msg));
                true
            }
            ImageLoadResult::None => false,
        }
    }

    // ===== Seat grid =====

    /// Adds a row to the current hall view and clears the form on success.
    pub fn add_row(state: &mut AppState, name: &str, seat_count: u32) {
        match state.hall.hall_view_mut().add_row(name, seat_count) {
            Ok(row) => {
                state.notice = Some(format!(
                    "Row {} added with {} seats",
                    row.name(),
                    row.seat_count()
                ));
                state.error_message = None;
                state.form.reset_after_add();
            }
            Err(err) => {
                state.error_message = Some(err.to_string());
            }
        }
    }

    // ===== Drawing session =====

    pub fn start_drawing_for_row(state: &mut AppState, row_name: &str) {
        let effect = state.session.start_for_row(state.hall.hall_view(), row_name);
        if effect != SessionEffect::None {
            state.notice = Some(format!(
                "Started drawing for row {}. Click and drag to define seat areas.",
                row_name
            ));
        }
    }

    pub fn start_drawing_for_seat(state: &mut AppState, row_name: &str, seat_number: u32) {
        let effect = state
            .session
            .start_for_seat(state.hall.hall_view(), row_name, seat_number);
        if effect != SessionEffect::None {
            state.notice = Some(format!(
                "Started drawing for row {}, seat {}. Click and drag to define the seat area.",
                row_name, seat_number
            ));
        }
    }

    pub fn stop_drawing(state: &mut AppState) {
        state.session.stop();
    }

    /// Applies a gesture outcome from the canvas.
    ///
    /// Commits write the captured rectangle through to the grid; the
    /// session has already advanced to the next target (or gone idle).
    pub fn apply_gesture(state: &mut AppState, effect: SessionEffect) {
        match effect {
            SessionEffect::Commit {
                target,
                rect,
                row_complete,
            } => {
                let committed = state.hall.hall_view_mut().commit_seat_rect(
                    &target.row_name,
                    target.seat_index,
                    rect,
                );
                if !committed {
                    // Stale target; the session invariants should prevent this.
                    state.error_message =
                        Some(format!("Could not store rectangle for seat {}", target.label()));
                    return;
                }
                state.notice = Some(if row_complete {
                    "All seats in this row have been mapped!".to_string()
                } else {
                    format!(
                        "Seat {} mapped. Now mapping seat {}",
                        target.seat_index + 1,
                        target.seat_index + 2
                    )
                });
            }
            SessionEffect::None | SessionEffect::Redraw | SessionEffect::Rejected => {}
        }
    }

    // ===== Classification =====

    pub fn save_base_colors(state: &mut AppState, classifier: &mut dyn SeatClassifier) {
        let background = state.background_status();
        match save_base_colors(state.hall.hall_view_mut(), classifier, background) {
            Ok(colored) => {
                state.notice = Some(format!(
                    "Base average colors calculated for {} seats",
                    colored
                ));
                state.error_message = None;
            }
            Err(err) => {
                state.error_message = Some(err.to_string());
            }
        }
    }

    pub fn calculate_occupancy(state: &mut AppState, classifier: &mut dyn SeatClassifier) {
        match evaluate_occupancy(state.hall.hall_view_mut(), classifier) {
            Ok(summary) => {
                state.notice = Some(format!(
                    "Occupancy calculated: {}/{} seats occupied",
                    summary.occupied, summary.total
                ));
                state.error_message = None;
            }
            Err(err) => {
                state.error_message = Some(err.to_string());
            }
        }
    }
}
