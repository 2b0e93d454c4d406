//! Low-level rendering for the annotation canvas.

pub mod canvas_renderer;
