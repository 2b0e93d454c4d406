//! I/O modules for background catalog fetching and image decoding.

pub mod catalog_loader;
pub mod image_loader;
pub mod loading;

// Re-export commonly used types
pub use catalog_loader::{CatalogLoader, LoadedCatalog};
pub use image_loader::{DecodedImage, ImageLoadResult, ImageLoader};
pub use loading::LoadingState;
