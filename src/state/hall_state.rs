//! Selected camera and its hall view.
//!
//! The hall view is owned here exclusively. It is created empty when a
//! camera is selected and replaced wholesale when a different camera is
//! selected; nothing else ever holds a copy of the seat grid.

use seatmap::{Camera, HallView};

/// State for the camera currently being annotated.
#[derive(Default)]
pub struct HallState {
    /// The selected camera (None until one is picked)
    camera: Option<Camera>,
    /// The seat grid for that camera's hall image
    hall_view: HallView,
}

impl HallState {
    pub fn new() -> Self {
        Self {
            camera: None,
            hall_view: HallView::new(),
        }
    }

    /// Replaces the hall view with a fresh, empty grid for `camera`.
    pub fn select_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
        self.hall_view = HallView::new();
    }

    /// Drops the camera and its grid (entity/hall re-selection).
    pub fn clear(&mut self) {
        self.camera = None;
        self.hall_view = HallView::new();
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn has_camera(&self) -> bool {
        self.camera.is_some()
    }

    pub fn hall_view(&self) -> &HallView {
        &self.hall_view
    }

    pub fn hall_view_mut(&mut self) -> &mut HallView {
        &mut self.hall_view
    }
}
