pub mod catalog;
pub mod classify;
pub mod geometry;
pub mod hall;
pub mod render;
pub mod session;
pub mod stats;
pub mod theme;

// Export geometry primitives
pub use geometry::{
    normalize_corners, CanvasMapping, Point, CANVAS_LOGICAL_HEIGHT, CANVAS_LOGICAL_WIDTH,
};

// Export the seat grid model
pub use hall::{BaseColor, HallError, HallView, Row, Seat, SeatRect, MAX_SEATS_PER_ROW};

// Export the drawing-session state machine
pub use session::{DrawingSession, SeatTarget, SessionEffect, MIN_SEAT_EDGE_PX};

// Export the frame builder
pub use render::{build_frame, BackgroundStatus, DrawCmd, PLACEHOLDER_PROMPT};

// Export classification
pub use classify::{
    evaluate_occupancy, save_base_colors, ClassifyError, OccupancySummary, PlaceholderClassifier,
    SeatClassifier,
};

// Export the catalog
pub use catalog::{
    fetch_catalog, parse_catalog, sample_catalog, Camera, Catalog, Entity, Hall,
    DEFAULT_CATALOG_URL,
};

// Export derived statistics
pub use stats::{hall_stats, row_stats, HallStats, RowStats};

// Export theme support
pub use theme::{adjust_brightness, hex_to_color32, with_alpha, Theme, ThemeColors, ThemeManager};
