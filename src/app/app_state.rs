//! Centralized application state for the seat mapper.
//!
//! Composes focused state components, each managing one aspect of the
//! application. Invariants stay local to the components; the drawing
//! session itself is the library's state machine, held here so panels
//! and coordinators share one instance.

use crate::state::{CatalogState, FormState, HallState, ImageState, ThemeState};
use seatmap::{BackgroundStatus, DrawingSession};

/// Main application state composed of focused components.
pub struct AppState {
    /// Catalog data and entity/hall selection
    pub catalog: CatalogState,

    /// Selected camera and its hall view (the seat grid)
    pub hall: HallState,

    /// Hall image texture and decode progress
    pub image: ImageState,

    /// Drawing-session state machine
    pub session: DrawingSession,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Row-creation form buffers
    pub form: FormState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Transient informational message (selection, mapping progress, ...)
    pub notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            catalog: CatalogState::new(),
            hall: HallState::new(),
            image: ImageState::new(),
            session: DrawingSession::new(),
            theme: ThemeState::new(),
            form: FormState::new(),
            error_message: None,
            notice: None,
        }
    }

    /// Creates a new state with a specific theme loaded from storage.
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            ..Self::new()
        }
    }

    /// Whether the renderer has a hall image to draw.
    pub fn background_status(&self) -> BackgroundStatus {
        self.image.background_status()
    }

    /// Resets everything tied to the previous camera when a new one is
    /// selected: the grid, the image and any active drawing session.
    pub fn reset_for_camera_switch(&mut self) {
        self.session.stop();
        self.image.clear();
        self.error_message = None;
    }
}
