//! State components for the seat mapper GUI.
//!
//! State-only logic (no UI concerns):
//! - Catalog state (entities/halls/cameras, selection chain)
//! - Hall state (selected camera and its seat grid)
//! - Image state (background texture, decode progress)
//! - Theme state (theme manager, current theme)
//! - Form state (row-creation input buffers)
//!
//! The drawing-session state machine lives in the `seatmap` library and
//! is composed directly into `AppState`.

mod catalog_state;
mod form_state;
mod hall_state;
mod image_state;
mod theme_state;

pub use catalog_state::{CatalogSource, CatalogState};
pub use form_state::FormState;
pub use hall_state::HallState;
pub use image_state::ImageState;
pub use theme_state::ThemeState;
