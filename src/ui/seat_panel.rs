//! Seat management panel UI rendering
//!
//! Row creation form plus one card per row with mapping badges, the
//! "draw all seats" control and per-seat re-mapping buttons.

use crate::app::AppState;
use eframe::egui;
use seatmap::{row_stats, Row, ThemeColors, MAX_SEATS_PER_ROW};

/// How many per-seat buttons a row card shows before collapsing to "+N".
const SEAT_BUTTON_LIMIT: usize = 10;

/// Result of user interaction with the seat panel
pub enum SeatPanelInteraction {
    RowAddRequested { name: String, seat_count: u32 },
    /// Start mapping every seat of the row in order
    DrawRowRequested(String),
    /// Re-map one specific seat (1-based number)
    DrawSeatRequested { row_name: String, seat_number: u32 },
}

/// Renders the seat management panel.
pub fn render_seat_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<SeatPanelInteraction> {
    let mut interaction = None;

    ui.heading("Seat Management");
    ui.separator();

    // Add-row form
    ui.label("Row Name");
    ui.add(
        egui::TextEdit::singleline(&mut state.form.row_name)
            .hint_text("e.g. A, B, C")
            .desired_width(f32::INFINITY),
    );
    ui.label("Number of Seats");
    ui.add(egui::DragValue::new(&mut state.form.seat_count).range(1..=MAX_SEATS_PER_ROW));

    if ui
        .add_sized([ui.available_width(), 24.0], egui::Button::new("➕ Add Row"))
        .clicked()
    {
        interaction = Some(SeatPanelInteraction::RowAddRequested {
            name: state.form.row_name.clone(),
            seat_count: state.form.seat_count,
        });
    }

    ui.add_space(8.0);
    ui.strong("Current Rows");

    if state.hall.hall_view().rows().is_empty() {
        ui.weak("No rows added yet");
        return interaction;
    }

    for row in state.hall.hall_view().rows() {
        if let Some(row_interaction) = render_row_card(ui, row, theme_colors) {
            interaction = Some(row_interaction);
        }
    }

    interaction
}

fn render_row_card(
    ui: &mut egui::Ui,
    row: &Row,
    theme_colors: &ThemeColors,
) -> Option<SeatPanelInteraction> {
    let mut interaction = None;
    let stats = row_stats(row);

    ui.group(|ui| {
        ui.horizontal_wrapped(|ui| {
            ui.strong(format!("Row {}", row.name()));
            ui.weak(format!("{} seats", stats.seat_count));
            let mapped_color = if stats.fully_mapped() {
                theme_colors.green
            } else {
                theme_colors.text_dim
            };
            ui.colored_label(
                mapped_color,
                format!("{}/{} mapped", stats.mapped_seats, stats.seat_count),
            );
            if stats.occupied_seats > 0 {
                ui.colored_label(
                    theme_colors.red,
                    format!("{} occupied", stats.occupied_seats),
                );
            }
        });

        if ui
            .add_sized(
                [ui.available_width(), 20.0],
                egui::Button::new("📍 Draw All Seats"),
            )
            .clicked()
        {
            interaction = Some(SeatPanelInteraction::DrawRowRequested(
                row.name().to_string(),
            ));
        }

        ui.weak("Individual seat mapping:");
        ui.horizontal_wrapped(|ui| {
            for seat in row.seats().iter().take(SEAT_BUTTON_LIMIT) {
                let button = if seat.is_mapped() {
                    egui::Button::new(seat.number().to_string()).fill(theme_colors.selection)
                } else {
                    egui::Button::new(seat.number().to_string())
                };
                if ui.add(button).clicked() {
                    interaction = Some(SeatPanelInteraction::DrawSeatRequested {
                        row_name: row.name().to_string(),
                        seat_number: seat.number(),
                    });
                }
            }
            if row.seat_count() > SEAT_BUTTON_LIMIT {
                ui.weak(format!("+{}", row.seat_count() - SEAT_BUTTON_LIMIT));
            }
        });
    });

    interaction
}
