//! Background loading state shared with worker threads.

/// Progress flag for an async loading operation.
///
/// Only the in_progress flag is shared; results come through a channel.
/// Wrapped in an `Arc<Mutex<>>` so the main thread and the worker can
/// both see it.
pub struct LoadingState {
    /// True while a loading operation is in progress
    pub in_progress: bool,
}

impl LoadingState {
    pub fn new() -> Self {
        Self { in_progress: false }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}
