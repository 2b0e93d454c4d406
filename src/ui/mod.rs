//! UI panel rendering subsystem
//!
//! All panel rendering for the seat mapper:
//! - Header panel (entity/hall/camera pickers, image upload, theme selector)
//! - Canvas panel (hall image, seat overlays, drag capture)
//! - Seat panel (row creation, per-row mapping controls)
//! - Drawing panel (session status, stop control)
//! - Occupancy panel (statistics, progress, classification controls)
//! - Status bar (memory, selection summary, catalog source)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (pointer capture on the canvas)

pub mod canvas_panel;
pub mod drawing_panel;
pub mod header;
pub mod input;
pub mod occupancy_panel;
pub mod panel_manager;
pub mod seat_panel;
pub mod status_bar;
