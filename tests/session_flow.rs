use anyhow::Result;
use seatmap::{
    build_frame, evaluate_occupancy, hall_stats, save_base_colors, BackgroundStatus, DrawCmd,
    DrawingSession, HallView, PlaceholderClassifier, Point, SessionEffect,
};

/// Runs one full drag gesture through the session.
fn drag(
    session: &mut DrawingSession,
    hall: &HallView,
    from: (f32, f32),
    to: (f32, f32),
) -> SessionEffect {
    session.pointer_down(Point::new(from.0, from.1));
    session.pointer_move(Point::new(to.0, to.1));
    session.pointer_up(Point::new(to.0, to.1), hall)
}

#[test]
fn maps_a_two_seat_row_end_to_end() -> Result<()> {
    let mut hall = HallView::new();
    hall.add_row("A", 2)?;

    let mut session = DrawingSession::new();
    session.start_for_row(&hall, "A");

    // First seat: drag from (10,10) to (50,50).
    match drag(&mut session, &hall, (10.0, 10.0), (50.0, 50.0)) {
        SessionEffect::Commit { target, rect, row_complete } => {
            assert_eq!(target.row_name, "A");
            assert_eq!(target.seat_index, 0);
            assert!(!row_complete);
            assert!(hall.commit_seat_rect(&target.row_name, target.seat_index, rect));
        }
        other => panic!("expected commit for seat 1, got {:?}", other),
    }

    let seat1 = hall.row_by_name("A").unwrap().seat(0).unwrap();
    assert_eq!(seat1.rect().unwrap().top_left(), Point::new(10.0, 10.0));
    assert_eq!(seat1.rect().unwrap().bottom_right(), Point::new(50.0, 50.0));

    // Session auto-advanced to seat 2.
    assert_eq!(session.target().unwrap().seat_index, 1);

    // Second seat completes the row and the session goes idle.
    match drag(&mut session, &hall, (60.0, 10.0), (100.0, 50.0)) {
        SessionEffect::Commit { target, rect, row_complete } => {
            assert_eq!(target.seat_index, 1);
            assert!(row_complete);
            assert!(hall.commit_seat_rect(&target.row_name, target.seat_index, rect));
        }
        other => panic!("expected commit for seat 2, got {:?}", other),
    }
    assert!(!session.is_active());

    let stats = hall_stats(&hall);
    assert_eq!(stats.mapped_seats, 2);
    Ok(())
}

#[test]
fn degenerate_drags_never_commit() -> Result<()> {
    let mut hall = HallView::new();
    hall.add_row("A", 2)?;

    let mut session = DrawingSession::new();
    session.start_for_row(&hall, "A");

    // Narrow, short, and exactly-at-threshold drags are all rejected.
    for (from, to) in [
        ((20.0, 20.0), (28.0, 80.0)),
        ((20.0, 20.0), (80.0, 26.0)),
        ((20.0, 20.0), (30.0, 30.0)),
    ] {
        assert_eq!(drag(&mut session, &hall, from, to), SessionEffect::Rejected);
        assert_eq!(session.target().unwrap().seat_index, 0);
    }

    assert_eq!(hall_stats(&hall).mapped_seats, 0);
    Ok(())
}

#[test]
fn stop_mid_capture_keeps_committed_seats() -> Result<()> {
    let mut hall = HallView::new();
    hall.add_row("A", 3)?;

    let mut session = DrawingSession::new();
    session.start_for_row(&hall, "A");

    if let SessionEffect::Commit { target, rect, .. } =
        drag(&mut session, &hall, (10.0, 10.0), (60.0, 60.0))
    {
        hall.commit_seat_rect(&target.row_name, target.seat_index, rect);
    }

    // Start dragging seat 2, then stop before release.
    session.pointer_down(Point::new(70.0, 10.0));
    session.pointer_move(Point::new(140.0, 60.0));
    session.stop();

    assert!(!session.is_active());
    let row = hall.row_by_name("A").unwrap();
    assert!(row.seat(0).unwrap().is_mapped());
    assert!(!row.seat(1).unwrap().is_mapped());
    assert!(!row.seat(2).unwrap().is_mapped());
    Ok(())
}

#[test]
fn full_annotation_and_occupancy_workflow() -> Result<()> {
    let mut hall = HallView::new();
    hall.add_row("A", 2)?;
    hall.add_row("B", 3)?;

    // Map every seat of both rows through the session.
    let mut session = DrawingSession::new();
    for row_name in ["A", "B"] {
        session.start_for_row(&hall, row_name);
        let mut x = 10.0;
        while session.is_active() {
            let effect = drag(&mut session, &hall, (x, 10.0), (x + 30.0, 60.0));
            match effect {
                SessionEffect::Commit { target, rect, .. } => {
                    assert!(hall.commit_seat_rect(&target.row_name, target.seat_index, rect));
                }
                other => panic!("expected commit, got {:?}", other),
            }
            x += 40.0;
        }
    }

    let stats = hall_stats(&hall);
    assert_eq!(stats.total_seats, 5);
    assert_eq!(stats.mapped_seats, 5);
    assert_eq!(stats.mapping_progress(), 100.0);

    // Classification: base colors first, then occupancy.
    let mut classifier = PlaceholderClassifier::seeded(99);
    assert!(evaluate_occupancy(&mut hall, &mut classifier).is_err());

    let colored = save_base_colors(&mut hall, &mut classifier, BackgroundStatus::Loaded)?;
    assert_eq!(colored, 5);

    let summary = evaluate_occupancy(&mut hall, &mut classifier)?;
    assert_eq!(summary.total, 5);
    assert_eq!(summary.occupied, hall_stats(&hall).occupied_seats);
    Ok(())
}

#[test]
fn frame_tracks_the_workflow() -> Result<()> {
    let mut hall = HallView::new();
    hall.add_row("A", 2)?;

    let mut session = DrawingSession::new();
    session.start_for_row(&hall, "A");

    // Mid-drag: one live box on top, no committed seats yet.
    session.pointer_down(Point::new(10.0, 10.0));
    session.pointer_move(Point::new(50.0, 50.0));
    let frame = build_frame(&hall, &session, BackgroundStatus::Missing);
    assert!(matches!(frame.last(), Some(DrawCmd::LiveBox { label, .. }) if label == "A1"));
    assert!(!frame.iter().any(|c| matches!(c, DrawCmd::SeatBox { .. })));

    // After the commit the seat box replaces the live box.
    if let SessionEffect::Commit { target, rect, .. } =
        session.pointer_up(Point::new(50.0, 50.0), &hall)
    {
        hall.commit_seat_rect(&target.row_name, target.seat_index, rect);
    }
    let frame = build_frame(&hall, &session, BackgroundStatus::Missing);
    assert!(!frame.iter().any(|c| matches!(c, DrawCmd::LiveBox { .. })));
    assert_eq!(
        frame
            .iter()
            .filter(|c| matches!(c, DrawCmd::SeatBox { .. }))
            .count(),
        1
    );
    Ok(())
}
