//! Occupancy analysis panel UI rendering
//!
//! Aggregate stat tiles, mapping/occupancy progress bars, the
//! classification controls and per-row occupancy breakdown. All counts
//! are recomputed from the grid on every frame; nothing is cached.

use crate::app::AppState;
use crate::utils::format_percent;
use eframe::egui;
use seatmap::{hall_stats, row_stats, HallStats, ThemeColors};

/// Result of user interaction with the occupancy panel
pub enum OccupancyPanelInteraction {
    SaveBaseColorsRequested,
    CalculateOccupancyRequested,
}

/// Renders the occupancy analysis panel.
pub fn render_occupancy_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
) -> Option<OccupancyPanelInteraction> {
    let mut interaction = None;
    let stats = hall_stats(state.hall.hall_view());

    ui.heading("Occupancy Analysis");
    ui.separator();

    render_stat_tiles(ui, &stats, theme_colors);

    ui.add_space(4.0);
    ui.label("Seat Mapping Progress");
    ui.add(
        egui::ProgressBar::new(stats.mapping_progress() / 100.0)
            .text(format_percent(stats.mapping_progress())),
    );
    ui.label("Current Occupancy");
    ui.add(
        egui::ProgressBar::new(stats.occupancy_percent() / 100.0)
            .text(format_percent(stats.occupancy_percent())),
    );

    ui.add_space(6.0);
    if ui
        .add_enabled(
            stats.mapped_seats > 0,
            egui::Button::new("🎨 Save Base Average Colors").min_size(egui::vec2(ui.available_width(), 24.0)),
        )
        .clicked()
    {
        interaction = Some(OccupancyPanelInteraction::SaveBaseColorsRequested);
    }
    if ui
        .add_enabled(
            stats.base_color_seats > 0,
            egui::Button::new("👁 Calculate Occupancy").min_size(egui::vec2(ui.available_width(), 24.0)),
        )
        .clicked()
    {
        interaction = Some(OccupancyPanelInteraction::CalculateOccupancyRequested);
    }

    render_row_statistics(ui, state, theme_colors);

    interaction
}

fn render_stat_tiles(ui: &mut egui::Ui, stats: &HallStats, theme_colors: &ThemeColors) {
    egui::Grid::new("occupancy_stats")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            stat_tile(ui, "Total Seats", stats.total_seats, theme_colors.text);
            stat_tile(ui, "Mapped", stats.mapped_seats, theme_colors.green);
            ui.end_row();
            stat_tile(ui, "Base Colors", stats.base_color_seats, theme_colors.blue);
            stat_tile(ui, "Occupied", stats.occupied_seats, theme_colors.red);
            ui.end_row();
        });
}

fn stat_tile(ui: &mut egui::Ui, label: &str, value: usize, color: egui::Color32) {
    ui.vertical(|ui| {
        ui.weak(label);
        ui.colored_label(color, egui::RichText::new(value.to_string()).heading());
    });
}

fn render_row_statistics(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) {
    let rows = state.hall.hall_view().rows();
    if rows.is_empty() {
        return;
    }

    ui.add_space(6.0);
    ui.strong("Row Statistics");
    for row in rows {
        let stats = row_stats(row);
        let percent = stats.occupancy_percent();
        // Load coloring mirrors the badge thresholds: busy rows stand out.
        let badge_color = if percent > 80.0 {
            theme_colors.red
        } else if percent > 50.0 {
            theme_colors.orange
        } else {
            theme_colors.gray
        };

        ui.horizontal(|ui| {
            ui.label(format!("Row {}", row.name()));
            ui.weak(format!("{} seats", stats.seat_count));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(badge_color, format!("{:.0}%", percent));
                ui.weak(format!("{}/{}", stats.occupied_seats, stats.seat_count));
            });
        });
    }
}
