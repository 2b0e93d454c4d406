//! Hall image texture state.
//!
//! Holds the uploaded hall image as a GPU texture plus the decode
//! progress flag. Replacing the image swaps the texture without touching
//! the seat grid.

use seatmap::BackgroundStatus;

/// State for the canvas background image.
#[derive(Default)]
pub struct ImageState {
    /// Decoded hall image, uploaded as an egui texture
    texture: Option<egui::TextureHandle>,
    /// True while a decode is running in the background
    loading: bool,
}

impl ImageState {
    pub fn new() -> Self {
        Self {
            texture: None,
            loading: false,
        }
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// What the frame builder should draw behind the seat boxes.
    pub fn background_status(&self) -> BackgroundStatus {
        if self.texture.is_some() {
            BackgroundStatus::Loaded
        } else {
            BackgroundStatus::Missing
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Installs a freshly decoded image as the background.
    pub fn install(&mut self, texture: egui::TextureHandle) {
        self.texture = Some(texture);
        self.loading = false;
    }

    /// Drops the image (camera switch).
    pub fn clear(&mut self) {
        self.texture = None;
        self.loading = false;
    }
}
