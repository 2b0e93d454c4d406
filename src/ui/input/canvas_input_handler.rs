//! Pointer capture on the annotation canvas.
//!
//! Routes egui drag events through the coordinate mapper into the
//! drawing-session state machine. The session decides what each event
//! means in its current state; this handler only translates positions.
//!
//! A plain click is just a zero-length drag here: the press arms a
//! capture and the release is rejected by the session's minimum-size
//! threshold, so no separate click-vs-drag detection is needed.

use eframe::egui;
use seatmap::{CanvasMapping, DrawingSession, HallView, Point, SessionEffect};

/// Handles pointer input over the canvas for one frame.
///
/// # Arguments
/// * `response` - The canvas interaction response (drag sense)
/// * `canvas_rect` - On-screen rectangle of the canvas
/// * `session` - Drawing-session state machine (mutated)
/// * `hall` - Seat grid, consulted for row lengths on release
///
/// # Returns
/// The effect of the transition; `Commit` must be applied by the caller.
pub fn handle_canvas_input(
    response: &egui::Response,
    canvas_rect: egui::Rect,
    session: &mut DrawingSession,
    hall: &HallView,
) -> SessionEffect {
    let mapping = CanvasMapping::new(
        Point::new(canvas_rect.min.x, canvas_rect.min.y),
        canvas_rect.width(),
        canvas_rect.height(),
    );

    let pointer = response
        .interact_pointer_pos()
        .map(|pos| mapping.to_canvas_space(Point::new(pos.x, pos.y)));

    if response.drag_started() {
        if let Some(pos) = pointer {
            return session.pointer_down(pos);
        }
    } else if response.dragged() {
        if let Some(pos) = pointer {
            return session.pointer_move(pos);
        }
    } else if response.drag_stopped() {
        if let Some(pos) = pointer {
            return session.pointer_up(pos, hall);
        }
    }

    SessionEffect::None
}
