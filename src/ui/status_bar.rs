//! Status bar UI rendering
//!
//! Bottom bar with process memory, the current selection and aggregate
//! seat counts, plus the catalog source.

use crate::app::AppState;
use crate::state::CatalogSource;
use crate::utils::{format_memory_mb, get_current_memory_mb};
use eframe::egui;
use egui::RichText;
use seatmap::hall_stats;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        ui.label(RichText::new("|").strong());

        match state.hall.camera() {
            Some(camera) => {
                let stats = hall_stats(state.hall.hall_view());
                let hall_name = state
                    .catalog
                    .selected_hall()
                    .map(|h| h.name.clone())
                    .unwrap_or_else(|| "?".to_string());
                ui.label(RichText::new(format!(
                    "{} @ {} | Seats: {} | Mapped: {} | Occupied: {}",
                    camera.name, hall_name, stats.total_seats, stats.mapped_seats, stats.occupied_seats
                )).strong());
            }
            None => {
                ui.label(RichText::new("No camera selected").strong());
            }
        }

        match state.catalog.source() {
            CatalogSource::Loading => {
                ui.label(RichText::new("|").strong());
                ui.label("Catalog: loading…");
            }
            CatalogSource::Sample => {
                ui.label(RichText::new("|").strong());
                ui.label(
                    RichText::new("Catalog: built-in sample")
                        .color(egui::Color32::YELLOW),
                );
            }
            CatalogSource::Remote => {}
        }
    });
}
