//! Derived seat statistics.
//!
//! Pure functions over the grid, recomputed on demand. Nothing here is
//! cached; the counts always reflect the current hall view.

use crate::hall::{HallView, Row};

/// Aggregate counts across the whole hall view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HallStats {
    pub total_seats: usize,
    /// Seats with both corners set.
    pub mapped_seats: usize,
    pub occupied_seats: usize,
    /// Seats with a captured baseline color.
    pub base_color_seats: usize,
}

impl HallStats {
    /// Percent of seats mapped, 0.0 when the hall has no seats.
    pub fn mapping_progress(&self) -> f32 {
        percent(self.mapped_seats, self.total_seats)
    }

    /// Percent of seats occupied, 0.0 when the hall has no seats.
    pub fn occupancy_percent(&self) -> f32 {
        percent(self.occupied_seats, self.total_seats)
    }
}

/// Counts for one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowStats {
    pub seat_count: usize,
    pub mapped_seats: usize,
    pub occupied_seats: usize,
    pub base_color_seats: usize,
}

impl RowStats {
    pub fn occupancy_percent(&self) -> f32 {
        percent(self.occupied_seats, self.seat_count)
    }

    pub fn fully_mapped(&self) -> bool {
        self.seat_count > 0 && self.mapped_seats == self.seat_count
    }
}

fn percent(part: usize, whole: usize) -> f32 {
    if whole == 0 {
        0.0
    } else {
        part as f32 / whole as f32 * 100.0
    }
}

pub fn hall_stats(hall: &HallView) -> HallStats {
    let mut stats = HallStats::default();
    for row in hall.rows() {
        for seat in row.seats() {
            stats.total_seats += 1;
            if seat.is_mapped() {
                stats.mapped_seats += 1;
            }
            if seat.is_occupied() {
                stats.occupied_seats += 1;
            }
            if seat.base_color().is_some() {
                stats.base_color_seats += 1;
            }
        }
    }
    stats
}

pub fn row_stats(row: &Row) -> RowStats {
    RowStats {
        seat_count: row.seat_count(),
        mapped_seats: row.seats().iter().filter(|s| s.is_mapped()).count(),
        occupied_seats: row.seats().iter().filter(|s| s.is_occupied()).count(),
        base_color_seats: row.seats().iter().filter(|s| s.base_color().is_some()).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::hall::SeatRect;

    #[test]
    fn empty_hall_has_zero_percentages() {
        let stats = hall_stats(&HallView::new());
        assert_eq!(stats, HallStats::default());
        assert_eq!(stats.mapping_progress(), 0.0);
        assert_eq!(stats.occupancy_percent(), 0.0);
    }

    #[test]
    fn counts_track_grid_mutations() {
        let mut hall = HallView::new();
        hall.add_row("A", 4).unwrap();
        hall.add_row("B", 2).unwrap();
        hall.commit_seat_rect(
            "A",
            0,
            SeatRect::from_corners(Point::new(0.0, 0.0), Point::new(20.0, 20.0)),
        );
        hall.commit_seat_rect(
            "B",
            1,
            SeatRect::from_corners(Point::new(30.0, 0.0), Point::new(50.0, 20.0)),
        );

        let stats = hall_stats(&hall);
        assert_eq!(stats.total_seats, 6);
        assert_eq!(stats.mapped_seats, 2);
        assert_eq!(stats.occupied_seats, 0);
        assert!((stats.mapping_progress() - 33.333_3).abs() < 0.01);

        let row_a = row_stats(hall.row_by_name("A").unwrap());
        assert_eq!(row_a.seat_count, 4);
        assert_eq!(row_a.mapped_seats, 1);
        assert!(!row_a.fully_mapped());

        let row_b = row_stats(hall.row_by_name("B").unwrap());
        assert_eq!(row_b.mapped_seats, 1);
    }
}
