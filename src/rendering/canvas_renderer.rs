//! Canvas frame execution.
//!
//! Takes the frame builder's command list and paints it into an egui
//! painter. The commands carry canvas logical coordinates; this module
//! scales them onto the on-screen canvas rect. It only writes to the
//! painter, never to the model, and no-ops on a degenerate surface.

use eframe::egui;
use egui::{Align2, Color32, FontId, Stroke, StrokeKind};
use seatmap::{CanvasMapping, DrawCmd, Point, SeatRect};

use crate::presentation::color_mapping::SeatPalette;

const SEAT_OUTLINE_WIDTH: f32 = 2.0;
const SEAT_LABEL_SIZE: f32 = 12.0;
const LIVE_LABEL_SIZE: f32 = 14.0;
const PROMPT_SIZE: f32 = 16.0;

/// Paints one frame onto the canvas area.
///
/// # Arguments
/// * `painter` - The egui painter clipped to the canvas
/// * `canvas_rect` - On-screen rectangle of the canvas
/// * `commands` - Frame built by `seatmap::build_frame`
/// * `texture` - Hall image texture, if loaded
/// * `palette` - Colors resolved from the current theme
pub fn execute_frame(
    painter: &egui::Painter,
    canvas_rect: egui::Rect,
    commands: &[DrawCmd],
    texture: Option<&egui::TextureHandle>,
    palette: &SeatPalette,
) {
    // Transiently zero-sized during layout; skip the frame.
    if canvas_rect.width() <= 0.0 || canvas_rect.height() <= 0.0 {
        return;
    }

    let mapping = CanvasMapping::new(
        Point::new(canvas_rect.min.x, canvas_rect.min.y),
        canvas_rect.width(),
        canvas_rect.height(),
    );

    for command in commands {
        match command {
            DrawCmd::Clear => {
                painter.rect_filled(canvas_rect, 0.0, palette.surface);
            }
            DrawCmd::Background => {
                if let Some(texture) = texture {
                    painter.image(
                        texture.id(),
                        canvas_rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
            }
            DrawCmd::Placeholder { prompt } => {
                painter.rect_filled(canvas_rect, 0.0, palette.placeholder_fill);
                painter.text(
                    canvas_rect.center(),
                    Align2::CENTER_CENTER,
                    prompt,
                    FontId::proportional(PROMPT_SIZE),
                    palette.placeholder_text,
                );
            }
            DrawCmd::SeatBox {
                rect,
                occupied,
                label,
            } => {
                let screen = to_screen_rect(&mapping, rect);
                let (fill, outline) = if *occupied {
                    (palette.occupied_fill, palette.occupied_outline)
                } else {
                    (palette.vacant_fill, palette.vacant_outline)
                };
                painter.rect_filled(screen, 2.0, fill);
                painter.rect_stroke(
                    screen,
                    2.0,
                    Stroke::new(SEAT_OUTLINE_WIDTH, outline),
                    StrokeKind::Inside,
                );
                painter.text(
                    screen.center(),
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(SEAT_LABEL_SIZE),
                    palette.label,
                );
            }
            DrawCmd::LiveBox { rect, label } => {
                let screen = to_screen_rect(&mapping, rect);
                painter.rect_filled(screen, 2.0, palette.live_fill);
                painter.rect_stroke(
                    screen,
                    2.0,
                    Stroke::new(SEAT_OUTLINE_WIDTH, palette.live_outline),
                    StrokeKind::Inside,
                );
                painter.text(
                    screen.center(),
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(LIVE_LABEL_SIZE),
                    palette.live_label,
                );
            }
        }
    }
}

fn to_screen_rect(mapping: &CanvasMapping, rect: &SeatRect) -> egui::Rect {
    let tl = mapping.to_screen_space(rect.top_left());
    let br = mapping.to_screen_space(rect.bottom_right());
    egui::Rect::from_min_max(egui::pos2(tl.x, tl.y), egui::pos2(br.x, br.y))
}
