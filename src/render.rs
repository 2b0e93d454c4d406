//! Canvas frame builder.
//!
//! [`build_frame`] is a pure function of the hall view, the drawing
//! session and the background status. It produces an ordered list of
//! draw commands instead of painting directly, which keeps it
//! unit-testable without a drawing surface; the GUI executes the list
//! against a painter each frame.
//!
//! Command order is fixed: clear, background (or placeholder), committed
//! seat boxes in row/seat order, then the live drag rectangle on top.

use crate::hall::{HallView, SeatRect};
use crate::session::DrawingSession;

/// Prompt shown on the placeholder background when no hall image is loaded.
pub const PLACEHOLDER_PROMPT: &str = "Upload hall image to begin";

/// Whether a decoded hall image is available to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundStatus {
    Loaded,
    Missing,
}

/// One drawing instruction in canvas logical space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Clear the whole surface.
    Clear,
    /// Draw the hall image scaled to fill the surface.
    Background,
    /// Neutral fill with a centered prompt, when no image is loaded.
    Placeholder { prompt: String },
    /// A committed seat rectangle, colored by occupancy, with its
    /// row-letter + seat-number label centered inside.
    SeatBox {
        rect: SeatRect,
        occupied: bool,
        label: String,
    },
    /// The in-progress drag rectangle, always painted last.
    LiveBox { rect: SeatRect, label: String },
}

/// Builds the frame for the current model state.
///
/// Only seats with a mapped rectangle produce a command. The live box is
/// present only while the session is capturing.
pub fn build_frame(
    hall: &HallView,
    session: &DrawingSession,
    background: BackgroundStatus,
) -> Vec<DrawCmd> {
    let mut commands = vec![DrawCmd::Clear];

    match background {
        BackgroundStatus::Loaded => commands.push(DrawCmd::Background),
        BackgroundStatus::Missing => commands.push(DrawCmd::Placeholder {
            prompt: PLACEHOLDER_PROMPT.to_string(),
        }),
    }

    for row in hall.rows() {
        for seat in row.seats() {
            if let Some(rect) = seat.rect() {
                commands.push(DrawCmd::SeatBox {
                    rect: *rect,
                    occupied: seat.is_occupied(),
                    label: format!("{}{}", row.name(), seat.number()),
                });
            }
        }
    }

    if let (Some((press, current)), Some(target)) = (session.live_corners(), session.target()) {
        commands.push(DrawCmd::LiveBox {
            rect: SeatRect::from_corners(press, current),
            label: target.label(),
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn mapped_hall() -> HallView {
        let mut hall = HallView::new();
        hall.add_row("A", 2).unwrap();
        hall.commit_seat_rect(
            "A",
            0,
            SeatRect::from_corners(Point::new(10.0, 10.0), Point::new(50.0, 50.0)),
        );
        hall
    }

    #[test]
    fn placeholder_when_no_image() {
        let hall = HallView::new();
        let frame = build_frame(&hall, &DrawingSession::new(), BackgroundStatus::Missing);
        assert_eq!(frame[0], DrawCmd::Clear);
        assert!(matches!(&frame[1], DrawCmd::Placeholder { prompt } if prompt == PLACEHOLDER_PROMPT));
    }

    #[test]
    fn only_mapped_seats_are_drawn() {
        let hall = mapped_hall();
        let frame = build_frame(&hall, &DrawingSession::new(), BackgroundStatus::Loaded);
        let seat_boxes: Vec<_> = frame
            .iter()
            .filter(|c| matches!(c, DrawCmd::SeatBox { .. }))
            .collect();
        assert_eq!(seat_boxes.len(), 1);
        assert!(matches!(seat_boxes[0], DrawCmd::SeatBox { label, .. } if label == "A1"));
    }

    #[test]
    fn live_box_is_last_and_labeled_with_target() {
        let hall = mapped_hall();
        let mut session = DrawingSession::new();
        session.start_for_seat(&hall, "A", 2);
        session.pointer_down(Point::new(60.0, 10.0));
        session.pointer_move(Point::new(100.0, 50.0));

        let frame = build_frame(&hall, &session, BackgroundStatus::Loaded);
        match frame.last().unwrap() {
            DrawCmd::LiveBox { rect, label } => {
                assert_eq!(label, "A2");
                assert_eq!(rect.top_left(), Point::new(60.0, 10.0));
            }
            other => panic!("expected live box last, got {:?}", other),
        }
    }

    #[test]
    fn armed_session_has_no_live_box() {
        let hall = mapped_hall();
        let mut session = DrawingSession::new();
        session.start_for_row(&hall, "A");
        let frame = build_frame(&hall, &session, BackgroundStatus::Loaded);
        assert!(!frame.iter().any(|c| matches!(c, DrawCmd::LiveBox { .. })));
    }

    #[test]
    fn frame_is_idempotent_for_unchanged_inputs() {
        let hall = mapped_hall();
        let session = DrawingSession::new();
        let a = build_frame(&hall, &session, BackgroundStatus::Loaded);
        let b = build_frame(&hall, &session, BackgroundStatus::Loaded);
        assert_eq!(a, b);
    }
}
