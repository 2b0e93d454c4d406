//! Background catalog fetching.
//!
//! Fetches the entity/hall/camera catalog on a worker thread so the
//! annotation UI never blocks on the network. Any failure falls back to
//! the built-in sample catalog; the UI only learns where the data came
//! from.

use seatmap::{fetch_catalog, sample_catalog, Catalog, DEFAULT_CATALOG_URL};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// A catalog delivered by the background fetch.
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// False when the endpoint was unreachable and the sample is used.
    pub remote: bool,
}

/// Manages the one-shot background catalog fetch.
pub struct CatalogLoader {
    /// Channel receiver for the fetch result
    receiver: Option<Receiver<LoadedCatalog>>,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self { receiver: None }
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.receiver.is_some()
    }

    /// Starts fetching the catalog on a background thread.
    ///
    /// The endpoint defaults to [`DEFAULT_CATALOG_URL`] and can be
    /// overridden with `SEATMAP_CATALOG_URL`. Call `check_completion()`
    /// once per frame for the result.
    pub fn start_fetch(&mut self, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let url = std::env::var("SEATMAP_CATALOG_URL")
                .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());

            let loaded = match fetch_catalog(&url) {
                Ok(catalog) => LoadedCatalog {
                    catalog,
                    remote: true,
                },
                Err(_) => LoadedCatalog {
                    catalog: sample_catalog().clone(),
                    remote: false,
                },
            };

            let _ = sender.send(loaded);

            // Notify GUI thread to repaint
            ctx_handle.request_repaint();
        });
    }

    /// Returns the fetched catalog once, when available.
    pub fn check_completion(&mut self) -> Option<LoadedCatalog> {
        if let Some(receiver) = &self.receiver {
            if let Ok(loaded) = receiver.try_recv() {
                self.receiver = None;
                return Some(loaded);
            }
        }
        None
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}
