//! Presentation layer for visual styling and color mapping.
//!
//! Presentation logic separated from model logic:
//! - Seat overlay colors derived from the active theme
//! - Theme palette lookup

pub mod color_mapping;
