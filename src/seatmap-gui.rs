//! Cinema Hall Seat Mapper GUI Application
//!
//! Interactive egui tool for annotating a still image of a cinema hall
//! with per-seat bounding boxes and evaluating seat occupancy from the
//! mapped regions. Features:
//! - Entity / hall / camera selection from a remote catalog with a
//!   built-in sample fallback
//! - Hall image upload with background decoding
//! - Row-by-row drawing mode that walks the operator through every seat
//! - Occupancy overlay with per-row and aggregate statistics
//! - Multiple theme support with persistent preferences

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod io;
mod presentation;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use io::{CatalogLoader, ImageLoader};
use seatmap::{PlaceholderClassifier, SeatClassifier};
use ui::panel_manager::PanelManager;

/// Main application entry point for the seat mapper GUI.
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Cinema Hall Seat Mapper"),
        ..Default::default()
    };

    eframe::run_native(
        "Cinema Hall Seat Mapper",
        options,
        Box::new(|cc| Ok(Box::new(SeatmapApp::new(cc)))),
    )
}

/// The seat mapper application.
///
/// Thin shell over the coordinators: `ApplicationCoordinator` applies
/// panel interactions to the state, `ThemeCoordinator` handles theme
/// persistence, `PanelManager` lays out and renders the panels.
struct SeatmapApp {
    /// Centralized application state
    state: AppState,
    /// Background catalog fetch
    catalog_loader: CatalogLoader,
    /// Background hall-image decoding
    image_loader: ImageLoader,
    /// Injected occupancy strategy
    classifier: Box<dyn SeatClassifier>,
    /// The catalog fetch is kicked off on the first frame (it needs a
    /// live context for the completion repaint).
    catalog_fetch_started: bool,
}

impl SeatmapApp {
    /// Creates the app with the theme preference loaded from storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);

        Self {
            state: AppState::with_theme(theme_name),
            catalog_loader: CatalogLoader::new(),
            image_loader: ImageLoader::new(),
            classifier: Box::new(PlaceholderClassifier::new()),
            catalog_fetch_started: false,
        }
    }

    /// Routes panel interactions to the application coordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: ui::panel_manager::PanelInteraction,
        ctx: &egui::Context,
    ) {
        use ui::panel_manager::PanelInteraction;

        match interaction {
            PanelInteraction::EntitySelected(entity_id) => {
                ApplicationCoordinator::select_entity(&mut self.state, &entity_id);
            }
            PanelInteraction::HallSelected(hall_id) => {
                ApplicationCoordinator::select_hall(&mut self.state, &hall_id);
            }
            PanelInteraction::CameraSelected(camera_id) => {
                ApplicationCoordinator::select_camera(&mut self.state, &camera_id);
            }
            PanelInteraction::ImageFileChosen(path) => {
                ApplicationCoordinator::open_image_file(
                    &mut self.state,
                    &mut self.image_loader,
                    path,
                    ctx,
                );
            }
            PanelInteraction::RowAddRequested { name, seat_count } => {
                ApplicationCoordinator::add_row(&mut self.state, &name, seat_count);
            }
            PanelInteraction::DrawRowRequested(row_name) => {
                ApplicationCoordinator::start_drawing_for_row(&mut self.state, &row_name);
            }
            PanelInteraction::DrawSeatRequested { row_name, seat_number } => {
                ApplicationCoordinator::start_drawing_for_seat(
                    &mut self.state,
                    &row_name,
                    seat_number,
                );
            }
            PanelInteraction::StopDrawingRequested => {
                ApplicationCoordinator::stop_drawing(&mut self.state);
            }
            PanelInteraction::SaveBaseColorsRequested => {
                ApplicationCoordinator::save_base_colors(
                    &mut self.state,
                    self.classifier.as_mut(),
                );
            }
            PanelInteraction::CalculateOccupancyRequested => {
                ApplicationCoordinator::calculate_occupancy(
                    &mut self.state,
                    self.classifier.as_mut(),
                );
            }
            PanelInteraction::CanvasGesture(effect) => {
                ApplicationCoordinator::apply_gesture(&mut self.state, effect);
                // The gesture was handled after this frame's panels were
                // painted; show the committed rectangle right away.
                ctx.request_repaint();
            }
        }
    }
}

impl eframe::App for SeatmapApp {
    /// Persists preferences on shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
    }

    /// Main update loop.
    ///
    /// 1. Kick off the catalog fetch on the first frame
    /// 2. Check background loaders for completion
    /// 3. Apply the current theme
    /// 4. Render all panels and apply the resulting interaction
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.catalog_fetch_started {
            self.catalog_fetch_started = true;
            self.catalog_loader.start_fetch(ctx);
        }

        ApplicationCoordinator::check_catalog_completion(&mut self.state, &mut self.catalog_loader);
        ApplicationCoordinator::check_image_completion(&mut self.state, &mut self.image_loader, ctx);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
