//! Input handling for the annotation canvas.

pub mod canvas_input_handler;
