//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, canvas, seat, drawing, occupancy,
//! status) and funnels their interactions into one enum for the
//! application coordinator.

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::ui::{canvas_panel, drawing_panel, header, occupancy_panel, seat_panel, status_bar};
use seatmap::SessionEffect;

/// Result of panel interactions handled by the application coordinator.
pub enum PanelInteraction {
    EntitySelected(String),
    HallSelected(String),
    CameraSelected(String),
    ImageFileChosen(std::path::PathBuf),
    RowAddRequested { name: String, seat_count: u32 },
    DrawRowRequested(String),
    DrawSeatRequested { row_name: String, seat_number: u32 },
    StopDrawingRequested,
    SaveBaseColorsRequested,
    CalculateOccupancyRequested,
    /// A pointer gesture on the canvas produced a session effect
    CanvasGesture(SessionEffect),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Main entry point for rendering the entire UI, called from the
    /// eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Theme colors for this frame
        let theme_colors = color_mapping::theme_colors(
            state.theme.theme_manager(),
            state.theme.current_theme_name(),
        )
        .clone();
        let palette = color_mapping::seat_palette(&theme_colors);

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::EntitySelected(id) => {
                        PanelInteraction::EntitySelected(id)
                    }
                    header::HeaderInteraction::HallSelected(id) => {
                        PanelInteraction::HallSelected(id)
                    }
                    header::HeaderInteraction::CameraSelected(id) => {
                        PanelInteraction::CameraSelected(id)
                    }
                    header::HeaderInteraction::ImageFileChosen(path) => {
                        PanelInteraction::ImageFileChosen(path)
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        if !state.hall.has_camera() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.heading("Select an entity, hall and camera to begin seat mapping");
                });
            });
            return interaction;
        }

        // Right panel: seat management, drawing controls, occupancy
        let side_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(6))
            .fill(ctx.style().visuals.panel_fill);

        egui::SidePanel::right("controls_panel")
            .default_width(320.0)
            .resizable(true)
            .frame(side_frame)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(seat_interaction) =
                        seat_panel::render_seat_panel(ui, state, &theme_colors)
                    {
                        interaction = Some(match seat_interaction {
                            seat_panel::SeatPanelInteraction::RowAddRequested {
                                name,
                                seat_count,
                            } => PanelInteraction::RowAddRequested { name, seat_count },
                            seat_panel::SeatPanelInteraction::DrawRowRequested(row_name) => {
                                PanelInteraction::DrawRowRequested(row_name)
                            }
                            seat_panel::SeatPanelInteraction::DrawSeatRequested {
                                row_name,
                                seat_number,
                            } => PanelInteraction::DrawSeatRequested {
                                row_name,
                                seat_number,
                            },
                        });
                    }

                    ui.separator();
                    if let Some(drawing_panel::DrawingPanelInteraction::StopDrawingRequested) =
                        drawing_panel::render_drawing_panel(ui, state, &theme_colors)
                    {
                        interaction = Some(PanelInteraction::StopDrawingRequested);
                    }

                    ui.separator();
                    if let Some(occupancy_interaction) =
                        occupancy_panel::render_occupancy_panel(ui, state, &theme_colors)
                    {
                        interaction = Some(match occupancy_interaction {
                            occupancy_panel::OccupancyPanelInteraction::SaveBaseColorsRequested => {
                                PanelInteraction::SaveBaseColorsRequested
                            }
                            occupancy_panel::OccupancyPanelInteraction::CalculateOccupancyRequested => {
                                PanelInteraction::CalculateOccupancyRequested
                            }
                        });
                    }
                });
            });

        // Central panel: the annotation canvas
        let canvas_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(6))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(canvas_frame)
            .show(ctx, |ui| {
                if let Some(effect) = canvas_panel::render_canvas_panel(ui, state, &palette) {
                    interaction = Some(PanelInteraction::CanvasGesture(effect));
                }
            });

        interaction
    }
}
