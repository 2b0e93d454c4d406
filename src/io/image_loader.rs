//! Background hall-image decoding.
//!
//! Decodes the uploaded image file on a worker thread, keeping pointer
//! handling responsive; only the texture upload happens on the GUI
//! thread. Completion triggers exactly one repaint.

use crate::io::LoadingState;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// A decoded image ready for texture upload.
pub struct DecodedImage {
    /// Width and height in pixels
    pub size: [usize; 2],
    /// RGBA8 pixel data, row-major
    pub rgba: Vec<u8>,
}

/// Result of a completed image decode.
pub enum ImageLoadResult {
    /// Decoding completed successfully
    Success(DecodedImage),
    /// Decoding failed with an error
    Error(String),
    /// No decode in progress or not finished yet
    None,
}

/// Manages asynchronous decoding of hall image files.
pub struct ImageLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for decode results
    receiver: Option<Receiver<Result<DecodedImage, String>>>,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            receiver: None,
        }
    }

    /// Checks if a decode is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Starts decoding an image file on a background thread.
    ///
    /// Call `check_completion()` once per frame for the result.
    pub fn start_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = image::open(&path)
                .map(|img| {
                    let rgba = img.to_rgba8();
                    let size = [rgba.width() as usize, rgba.height() as usize];
                    DecodedImage {
                        size,
                        rgba: rgba.into_raw(),
                    }
                })
                .map_err(|e| e.to_string());

            let _ = sender.send(result);

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            // Exactly one repaint per completed decode
            ctx_handle.request_repaint();
        });
    }

    /// Checks if background decoding has completed and returns the
    /// result if available.
    pub fn check_completion(&mut self) -> ImageLoadResult {
        if let Some(receiver) = &self.receiver {
            if let Ok(result) = receiver.try_recv() {
                self.receiver = None;
                return match result {
                    Ok(decoded) => ImageLoadResult::Success(decoded),
                    Err(error_msg) => ImageLoadResult::Error(error_msg),
                };
            }
        }
        ImageLoadResult::None
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_starts_idle() {
        let loader = ImageLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn check_completion_when_idle() {
        let mut loader = ImageLoader::new();
        assert!(matches!(loader.check_completion(), ImageLoadResult::None));
    }
}
