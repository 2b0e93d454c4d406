//! Input buffers for the row-creation form.

/// Text and number buffers backing the "add row" form.
pub struct FormState {
    /// Row name being typed
    pub row_name: String,
    /// Seat count for the new row
    pub seat_count: u32,
}

/// Seat count the form resets to, matching the most common row size.
const DEFAULT_SEAT_COUNT: u32 = 20;

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            row_name: String::new(),
            seat_count: DEFAULT_SEAT_COUNT,
        }
    }

    /// Clears the form after a row was added.
    pub fn reset_after_add(&mut self) {
        self.row_name.clear();
        self.seat_count = DEFAULT_SEAT_COUNT;
    }
}
