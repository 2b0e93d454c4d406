//! Coordinate transforms for the annotation canvas.
//!
//! This module provides pure functions and types for:
//! - Converting pointer positions from screen space to canvas-local space
//! - Normalizing two drag corners into an ordered rectangle
//!
//! These functions are stateless and can be tested independently of any
//! real drawing surface.

/// Logical canvas width in pixels. Seat rectangles are stored in this space.
pub const CANVAS_LOGICAL_WIDTH: f32 = 800.0;
/// Logical canvas height in pixels.
pub const CANVAS_LOGICAL_HEIGHT: f32 = 600.0;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Normalizes two arbitrary corner points into an ordered
/// (top-left, bottom-right) pair.
///
/// The result is the same regardless of which corner was pressed first:
/// dragging up-left and down-right over the same two points yield the
/// identical pair.
pub fn normalize_corners(a: Point, b: Point) -> (Point, Point) {
    (
        Point::new(a.x.min(b.x), a.y.min(b.y)),
        Point::new(a.x.max(b.x), a.y.max(b.y)),
    )
}

/// Maps pointer positions from screen space into the canvas's logical
/// pixel space.
///
/// The canvas is rendered at an arbitrary on-screen size while seat
/// rectangles live in the fixed logical space. The mapping subtracts
/// the canvas origin and corrects for display scaling by the ratio
/// `logical / displayed`, so captured coordinates are right even when
/// the canvas is shown smaller or larger than its logical size.
#[derive(Debug, Clone, Copy)]
pub struct CanvasMapping {
    /// Screen position of the canvas's top-left corner.
    origin: Point,
    /// On-screen size of the canvas.
    displayed: (f32, f32),
    /// Logical size of the canvas.
    logical: (f32, f32),
}

impl CanvasMapping {
    /// Creates a mapping for a canvas displayed at `origin` with size
    /// `displayed`, using the fixed logical canvas size.
    pub fn new(origin: Point, displayed_width: f32, displayed_height: f32) -> Self {
        Self {
            origin,
            displayed: (displayed_width, displayed_height),
            logical: (CANVAS_LOGICAL_WIDTH, CANVAS_LOGICAL_HEIGHT),
        }
    }

    /// Converts a pointer position in screen space to canvas-local
    /// logical coordinates.
    pub fn to_canvas_space(&self, pointer: Point) -> Point {
        let (dw, dh) = self.displayed;
        // Degenerate surface: fall back to offset subtraction only.
        let sx = if dw > 0.0 { self.logical.0 / dw } else { 1.0 };
        let sy = if dh > 0.0 { self.logical.1 / dh } else { 1.0 };
        Point::new((pointer.x - self.origin.x) * sx, (pointer.y - self.origin.y) * sy)
    }

    /// Converts a point in logical canvas space back to screen space.
    /// Used when painting stored rectangles onto the displayed canvas.
    pub fn to_screen_space(&self, p: Point) -> Point {
        let (dw, dh) = self.displayed;
        let sx = if self.logical.0 > 0.0 { dw / self.logical.0 } else { 1.0 };
        let sy = if self.logical.1 > 0.0 { dh / self.logical.1 } else { 1.0 };
        Point::new(self.origin.x + p.x * sx, self.origin.y + p.y * sy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_order_independent() {
        let a = Point::new(50.0, 10.0);
        let b = Point::new(10.0, 50.0);
        let (tl1, br1) = normalize_corners(a, b);
        let (tl2, br2) = normalize_corners(b, a);
        assert_eq!(tl1, tl2);
        assert_eq!(br1, br2);
        assert_eq!(tl1, Point::new(10.0, 10.0));
        assert_eq!(br1, Point::new(50.0, 50.0));
    }

    #[test]
    fn normalize_holds_invariant_for_any_pair() {
        let pairs = [
            (Point::new(0.0, 0.0), Point::new(100.0, 80.0)),
            (Point::new(100.0, 80.0), Point::new(0.0, 0.0)),
            (Point::new(0.0, 80.0), Point::new(100.0, 0.0)),
            (Point::new(5.5, 5.5), Point::new(5.5, 5.5)),
        ];
        for (a, b) in pairs {
            let (tl, br) = normalize_corners(a, b);
            assert!(tl.x <= br.x);
            assert!(tl.y <= br.y);
        }
    }

    #[test]
    fn identity_mapping_subtracts_offset_only() {
        let mapping = CanvasMapping::new(Point::new(100.0, 40.0), 800.0, 600.0);
        let p = mapping.to_canvas_space(Point::new(150.0, 90.0));
        assert_eq!(p, Point::new(50.0, 50.0));
    }

    #[test]
    fn scaled_display_corrects_coordinates() {
        // Canvas shown at half size: pointer deltas double in logical space.
        let mapping = CanvasMapping::new(Point::new(0.0, 0.0), 400.0, 300.0);
        let p = mapping.to_canvas_space(Point::new(200.0, 150.0));
        assert_eq!(p, Point::new(400.0, 300.0));
    }

    #[test]
    fn screen_space_round_trips() {
        let mapping = CanvasMapping::new(Point::new(20.0, 10.0), 400.0, 300.0);
        let logical = Point::new(640.0, 480.0);
        let screen = mapping.to_screen_space(logical);
        let back = mapping.to_canvas_space(screen);
        assert!((back.x - logical.x).abs() < 1e-3);
        assert!((back.y - logical.y).abs() < 1e-3);
    }
}
