//! Drawing-session state machine.
//!
//! Walks an operator through mapping the seats of a row in ascending
//! seat-number order. The session is ephemeral UI state: it holds only a
//! (row name, seat index) reference into the hall view, never seat data,
//! so a commit always writes through to the canonical grid.
//!
//! Transitions return an explicit [`SessionEffect`] instead of mutating
//! the grid themselves; the caller applies the commit and triggers the
//! redraw.

use crate::geometry::{normalize_corners, Point};
use crate::hall::{HallView, SeatRect};

/// Drags smaller than this on either axis are treated as accidental
/// clicks and rejected without a commit.
pub const MIN_SEAT_EDGE_PX: f32 = 10.0;

/// The seat currently being captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatTarget {
    pub row_name: String,
    /// 0-based index into the row's seats; seat number is index + 1.
    pub seat_index: usize,
}

impl SeatTarget {
    /// Operator-facing label, e.g. "A3".
    pub fn label(&self) -> String {
        format!("{}{}", self.row_name, self.seat_index + 1)
    }
}

/// Drawing-session states.
///
/// - `Idle`: no target, pointer events are ignored.
/// - `Armed`: a target seat is selected, waiting for a press.
/// - `Capturing`: pointer is down, a rectangle is being dragged.
#[derive(Debug, Clone, Default)]
pub enum DrawingSession {
    #[default]
    Idle,
    Armed {
        target: SeatTarget,
    },
    Capturing {
        target: SeatTarget,
        press: Point,
        current: Point,
    },
}

/// What the caller must do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEffect {
    /// Event was invalid in the current state; nothing changed.
    None,
    /// Session state changed; repaint the canvas.
    Redraw,
    /// Drag was below the minimum size; no commit, session stays armed
    /// on the same target.
    Rejected,
    /// A rectangle was captured. The caller writes it into the grid.
    /// Fired exactly once per successful capture, never on rejection.
    Commit {
        target: SeatTarget,
        rect: SeatRect,
        /// True when this was the row's last seat and the session went idle.
        row_complete: bool,
    },
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::Idle
    }

    /// True in any state other than idle.
    pub fn is_active(&self) -> bool {
        !matches!(self, DrawingSession::Idle)
    }

    /// True while a rectangle is being dragged.
    pub fn is_capturing(&self) -> bool {
        matches!(self, DrawingSession::Capturing { .. })
    }

    /// The seat currently targeted, if any.
    pub fn target(&self) -> Option<&SeatTarget> {
        match self {
            DrawingSession::Idle => None,
            DrawingSession::Armed { target } | DrawingSession::Capturing { target, .. } => {
                Some(target)
            }
        }
    }

    /// The in-progress drag corners, if capturing.
    pub fn live_corners(&self) -> Option<(Point, Point)> {
        match self {
            DrawingSession::Capturing { press, current, .. } => Some((*press, *current)),
            _ => None,
        }
    }

    /// Arms the session on the first seat of `row_name`.
    ///
    /// Valid from idle or armed; ignored mid-capture.
    pub fn start_for_row(&mut self, hall: &HallView, row_name: &str) -> SessionEffect {
        self.start_at(hall, row_name, 0)
    }

    /// Arms the session on a single specific seat, allowing out-of-order
    /// re-mapping. `seat_number` is 1-based.
    pub fn start_for_seat(&mut self, hall: &HallView, row_name: &str, seat_number: u32) -> SessionEffect {
        if seat_number == 0 {
            return SessionEffect::None;
        }
        self.start_at(hall, row_name, seat_number as usize - 1)
    }

    fn start_at(&mut self, hall: &HallView, row_name: &str, seat_index: usize) -> SessionEffect {
        if self.is_capturing() {
            return SessionEffect::None;
        }
        let Some(row) = hall.row_by_name(row_name) else {
            return SessionEffect::None;
        };
        if seat_index >= row.seat_count() {
            return SessionEffect::None;
        }
        *self = DrawingSession::Armed {
            target: SeatTarget {
                row_name: row_name.to_string(),
                seat_index,
            },
        };
        SessionEffect::Redraw
    }

    /// Begins capturing a rectangle. Only valid while armed.
    pub fn pointer_down(&mut self, pos: Point) -> SessionEffect {
        match std::mem::take(self) {
            DrawingSession::Armed { target } => {
                *self = DrawingSession::Capturing {
                    target,
                    press: pos,
                    current: pos,
                };
                SessionEffect::Redraw
            }
            other => {
                *self = other;
                SessionEffect::None
            }
        }
    }

    /// Tracks the drag. Only valid while capturing; updates the live
    /// rectangle and requests a repaint, no state change.
    pub fn pointer_move(&mut self, pos: Point) -> SessionEffect {
        match self {
            DrawingSession::Capturing { current, .. } => {
                *current = pos;
                SessionEffect::Redraw
            }
            _ => SessionEffect::None,
        }
    }

    /// Ends the drag. Only valid while capturing.
    ///
    /// A drag spanning more than [`MIN_SEAT_EDGE_PX`] on both axes commits
    /// the normalized rectangle and advances to the row's next seat, going
    /// idle after the last one. Anything smaller is rejected and the
    /// session stays armed on the same target.
    pub fn pointer_up(&mut self, pos: Point, hall: &HallView) -> SessionEffect {
        match std::mem::take(self) {
            DrawingSession::Capturing { target, press, .. } => {
                let (top_left, bottom_right) = normalize_corners(press, pos);
                let width = bottom_right.x - top_left.x;
                let height = bottom_right.y - top_left.y;
                if width <= MIN_SEAT_EDGE_PX || height <= MIN_SEAT_EDGE_PX {
                    *self = DrawingSession::Armed { target };
                    return SessionEffect::Rejected;
                }

                let rect = SeatRect::from_corners(top_left, bottom_right);
                let seat_count = hall
                    .row_by_name(&target.row_name)
                    .map(|r| r.seat_count())
                    .unwrap_or(0);
                let row_complete = target.seat_index + 1 >= seat_count;
                if row_complete {
                    *self = DrawingSession::Idle;
                } else {
                    *self = DrawingSession::Armed {
                        target: SeatTarget {
                            row_name: target.row_name.clone(),
                            seat_index: target.seat_index + 1,
                        },
                    };
                }
                SessionEffect::Commit {
                    target,
                    rect,
                    row_complete,
                }
            }
            other => {
                *self = other;
                SessionEffect::None
            }
        }
    }

    /// Forces the session idle, discarding any in-progress drag.
    /// Committed seats are untouched.
    pub fn stop(&mut self) -> SessionEffect {
        match self {
            DrawingSession::Idle => SessionEffect::None,
            _ => {
                *self = DrawingSession::Idle;
                SessionEffect::Redraw
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hall_with_row(name: &str, seats: u32) -> HallView {
        let mut hall = HallView::new();
        hall.add_row(name, seats).unwrap();
        hall
    }

    fn drag(
        session: &mut DrawingSession,
        hall: &HallView,
        from: (f32, f32),
        to: (f32, f32),
    ) -> SessionEffect {
        session.pointer_down(Point::new(from.0, from.1));
        session.pointer_move(Point::new(to.0, to.1));
        session.pointer_up(Point::new(to.0, to.1), hall)
    }

    #[test]
    fn start_for_row_targets_first_seat() {
        let hall = hall_with_row("A", 3);
        let mut session = DrawingSession::new();
        assert_eq!(session.start_for_row(&hall, "A"), SessionEffect::Redraw);
        let target = session.target().unwrap();
        assert_eq!(target.row_name, "A");
        assert_eq!(target.seat_index, 0);
    }

    #[test]
    fn start_for_seat_allows_out_of_order_remapping() {
        let hall = hall_with_row("A", 5);
        let mut session = DrawingSession::new();
        session.start_for_seat(&hall, "A", 4);
        assert_eq!(session.target().unwrap().seat_index, 3);
    }

    #[test]
    fn start_on_unknown_row_is_ignored() {
        let hall = hall_with_row("A", 3);
        let mut session = DrawingSession::new();
        assert_eq!(session.start_for_row(&hall, "Z"), SessionEffect::None);
        assert!(!session.is_active());
    }

    #[test]
    fn pointer_down_requires_armed() {
        let hall = hall_with_row("A", 1);
        let mut session = DrawingSession::new();
        assert_eq!(session.pointer_down(Point::new(5.0, 5.0)), SessionEffect::None);
        assert!(!session.is_capturing());
        let _ = hall;
    }

    #[test]
    fn small_drag_is_rejected_and_target_kept() {
        let hall = hall_with_row("A", 2);
        let mut session = DrawingSession::new();
        session.start_for_row(&hall, "A");
        // 10 px on x is still within the threshold (strictly-greater required).
        let effect = drag(&mut session, &hall, (20.0, 20.0), (30.0, 100.0));
        assert_eq!(effect, SessionEffect::Rejected);
        assert_eq!(session.target().unwrap().seat_index, 0);
        assert!(!session.is_capturing());
    }

    #[test]
    fn degenerate_height_is_rejected_too() {
        let hall = hall_with_row("A", 2);
        let mut session = DrawingSession::new();
        session.start_for_row(&hall, "A");
        let effect = drag(&mut session, &hall, (20.0, 20.0), (120.0, 25.0));
        assert_eq!(effect, SessionEffect::Rejected);
    }

    #[test]
    fn commit_normalizes_regardless_of_drag_direction() {
        let hall = hall_with_row("A", 2);
        let mut session = DrawingSession::new();
        session.start_for_row(&hall, "A");
        // Drag up-left: press at bottom-right corner.
        let effect = drag(&mut session, &hall, (80.0, 90.0), (20.0, 30.0));
        match effect {
            SessionEffect::Commit { rect, .. } => {
                assert_eq!(rect.top_left(), Point::new(20.0, 30.0));
                assert_eq!(rect.bottom_right(), Point::new(80.0, 90.0));
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }

    #[test]
    fn auto_progression_visits_seats_in_order_then_goes_idle() {
        let hall = hall_with_row("A", 3);
        let mut session = DrawingSession::new();
        session.start_for_row(&hall, "A");

        for expected_index in 0..3 {
            assert_eq!(session.target().unwrap().seat_index, expected_index);
            let x0 = 20.0 * (expected_index as f32 + 1.0);
            let effect = drag(&mut session, &hall, (x0, 10.0), (x0 + 15.0, 40.0));
            match effect {
                SessionEffect::Commit { target, row_complete, .. } => {
                    assert_eq!(target.seat_index, expected_index);
                    assert_eq!(row_complete, expected_index == 2);
                }
                other => panic!("expected commit, got {:?}", other),
            }
        }
        assert!(!session.is_active());
        // Fourth gesture has no target to capture for.
        assert_eq!(session.pointer_down(Point::new(5.0, 5.0)), SessionEffect::None);
    }

    #[test]
    fn stop_discards_in_progress_drag() {
        let hall = hall_with_row("A", 2);
        let mut session = DrawingSession::new();
        session.start_for_row(&hall, "A");
        session.pointer_down(Point::new(10.0, 10.0));
        session.pointer_move(Point::new(60.0, 60.0));
        assert_eq!(session.stop(), SessionEffect::Redraw);
        assert!(!session.is_active());
        assert!(session.live_corners().is_none());
        // A release after stop is a no-op.
        assert_eq!(session.pointer_up(Point::new(60.0, 60.0), &hall), SessionEffect::None);
    }

    #[test]
    fn restarting_mid_row_retargets() {
        let hall = hall_with_row("A", 4);
        let mut session = DrawingSession::new();
        session.start_for_row(&hall, "A");
        drag(&mut session, &hall, (10.0, 10.0), (40.0, 40.0));
        assert_eq!(session.target().unwrap().seat_index, 1);
        session.start_for_seat(&hall, "A", 4);
        assert_eq!(session.target().unwrap().seat_index, 3);
    }
}
