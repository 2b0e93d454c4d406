//! Base-color capture and occupancy evaluation.
//!
//! No real pixel analysis exists yet, so the classifier is an injected
//! strategy: anything that maps a seat region and its baseline color to a
//! verdict can be plugged in. [`PlaceholderClassifier`] stands in until a
//! real sampler lands, with a seedable RNG so tests stay deterministic.
//!
//! Both batch operations run on demand over the whole grid, never
//! per-frame.

use crate::hall::{BaseColor, HallView, Seat, SeatRect};
use crate::render::BackgroundStatus;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pluggable seat classification strategy.
pub trait SeatClassifier {
    /// Summary color of the hall image region under a mapped seat.
    fn base_color(&mut self, rect: &SeatRect) -> BaseColor;

    /// Occupancy verdict for one seat, given its stored region and
    /// baseline color.
    fn classify(&mut self, seat: &Seat) -> bool;
}

/// Stand-in classifier: constant mid-gray baseline and random occupancy.
pub struct PlaceholderClassifier {
    rng: StdRng,
}

/// Baseline color the placeholder assigns to every mapped seat.
pub const PLACEHOLDER_BASE_COLOR: BaseColor = BaseColor {
    r: 123,
    g: 123,
    b: 123,
};

/// Probability that the placeholder marks a seat occupied.
const OCCUPIED_PROBABILITY: f64 = 0.4;

impl PlaceholderClassifier {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for PlaceholderClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatClassifier for PlaceholderClassifier {
    fn base_color(&mut self, _rect: &SeatRect) -> BaseColor {
        PLACEHOLDER_BASE_COLOR
    }

    fn classify(&mut self, _seat: &Seat) -> bool {
        self.rng.gen::<f64>() < OCCUPIED_PROBABILITY
    }
}

/// Preconditions the batch operations can fail on. Non-fatal; the
/// operation is skipped and the operator retries after fixing the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Base colors need a loaded hall image to sample from.
    NoBackgroundImage,
    /// Occupancy needs at least one captured baseline.
    NoBaseColors,
}

impl std::fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifyError::NoBackgroundImage => write!(f, "Please upload a hall image first"),
            ClassifyError::NoBaseColors => {
                write!(f, "Save base average colors before calculating occupancy")
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Counts reported after an occupancy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancySummary {
    pub occupied: usize,
    pub total: usize,
}

/// Captures a baseline color for every mapped seat.
///
/// Seats without a rectangle have their baseline cleared; replacing a
/// stale baseline from an earlier image is intentional. Returns the
/// number of seats that received a color.
pub fn save_base_colors(
    hall: &mut HallView,
    classifier: &mut dyn SeatClassifier,
    background: BackgroundStatus,
) -> Result<usize, ClassifyError> {
    if background == BackgroundStatus::Missing {
        return Err(ClassifyError::NoBackgroundImage);
    }

    let mut colored = 0;
    for row in hall.rows_mut() {
        for seat in row.seats_mut() {
            let color = seat.rect().copied().map(|rect| classifier.base_color(&rect));
            if color.is_some() {
                colored += 1;
            }
            seat.set_base_color(color);
        }
    }
    Ok(colored)
}

/// Evaluates occupancy for every seat in the grid.
///
/// Requires at least one seat with a captured baseline, matching the
/// operator workflow (base colors first, then occupancy).
pub fn evaluate_occupancy(
    hall: &mut HallView,
    classifier: &mut dyn SeatClassifier,
) -> Result<OccupancySummary, ClassifyError> {
    let any_baseline = hall
        .rows()
        .iter()
        .flat_map(|r| r.seats())
        .any(|s| s.base_color().is_some());
    if !any_baseline {
        return Err(ClassifyError::NoBaseColors);
    }

    let mut occupied = 0;
    let mut total = 0;
    for row in hall.rows_mut() {
        for seat in row.seats_mut() {
            let verdict = classifier.classify(seat);
            seat.set_occupied(verdict);
            total += 1;
            if verdict {
                occupied += 1;
            }
        }
    }
    Ok(OccupancySummary { occupied, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::hall::HallView;

    fn hall_with_mapped_seat() -> HallView {
        let mut hall = HallView::new();
        hall.add_row("A", 3).unwrap();
        hall.commit_seat_rect(
            "A",
            1,
            crate::hall::SeatRect::from_corners(Point::new(10.0, 10.0), Point::new(60.0, 60.0)),
        );
        hall
    }

    #[test]
    fn base_colors_require_an_image() {
        let mut hall = hall_with_mapped_seat();
        let mut classifier = PlaceholderClassifier::seeded(7);
        let err = save_base_colors(&mut hall, &mut classifier, BackgroundStatus::Missing);
        assert_eq!(err, Err(ClassifyError::NoBackgroundImage));
        assert!(hall.rows()[0].seats().iter().all(|s| s.base_color().is_none()));
    }

    #[test]
    fn base_colors_cover_mapped_seats_only() {
        let mut hall = hall_with_mapped_seat();
        let mut classifier = PlaceholderClassifier::seeded(7);
        let colored =
            save_base_colors(&mut hall, &mut classifier, BackgroundStatus::Loaded).unwrap();
        assert_eq!(colored, 1);
        let row = &hall.rows()[0];
        assert!(row.seat(0).unwrap().base_color().is_none());
        assert_eq!(row.seat(1).unwrap().base_color(), Some(&PLACEHOLDER_BASE_COLOR));
        assert!(row.seat(2).unwrap().base_color().is_none());
    }

    #[test]
    fn occupancy_requires_a_baseline() {
        let mut hall = hall_with_mapped_seat();
        let mut classifier = PlaceholderClassifier::seeded(7);
        let err = evaluate_occupancy(&mut hall, &mut classifier);
        assert_eq!(err, Err(ClassifyError::NoBaseColors));
    }

    #[test]
    fn occupancy_summary_counts_the_whole_grid() {
        let mut hall = hall_with_mapped_seat();
        let mut classifier = PlaceholderClassifier::seeded(7);
        save_base_colors(&mut hall, &mut classifier, BackgroundStatus::Loaded).unwrap();
        let summary = evaluate_occupancy(&mut hall, &mut classifier).unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.occupied,
            hall.rows()[0].seats().iter().filter(|s| s.is_occupied()).count()
        );
    }

    #[test]
    fn seeded_classifier_is_deterministic() {
        let run = |seed| {
            let mut hall = hall_with_mapped_seat();
            let mut classifier = PlaceholderClassifier::seeded(seed);
            save_base_colors(&mut hall, &mut classifier, BackgroundStatus::Loaded).unwrap();
            evaluate_occupancy(&mut hall, &mut classifier).unwrap()
        };
        assert_eq!(run(42), run(42));
    }
}
