use micrometry_core::geometry::NormPoint;
use micrometry_core::marking::{CoordinateModel, MarkOutcome, SlotSelection};

fn p(x: f64, y: f64) -> NormPoint {
    NormPoint::new(x, y)
}

// ---------------------------------------------------------------------------
// Two-point cap
// ---------------------------------------------------------------------------

#[test]
fn test_marks_up_to_two_points() {
    let mut model = CoordinateModel::new();
    assert_eq!(model.mark(p(0.1, 0.2)), MarkOutcome::Placed);
    assert_eq!(model.mark(p(0.4, 0.2)), MarkOutcome::Placed);
    assert_eq!(model.points().len(), 2);
}

#[test]
fn test_third_mark_rejected_without_slot() {
    let mut model = CoordinateModel::new();
    model.mark(p(0.1, 0.1));
    model.mark(p(0.2, 0.2));

    assert_eq!(model.mark(p(0.3, 0.3)), MarkOutcome::Rejected);
    assert_eq!(model.points(), &[p(0.1, 0.1), p(0.2, 0.2)]);
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

#[test]
fn test_out_of_bounds_mark_is_silent_noop() {
    let mut model = CoordinateModel::new();
    assert_eq!(model.mark(p(1.2, 0.5)), MarkOutcome::OutOfBounds);
    assert_eq!(model.mark(p(0.5, -0.1)), MarkOutcome::OutOfBounds);
    assert!(model.points().is_empty());
}

#[test]
fn test_out_of_bounds_mark_keeps_slot_selected() {
    let mut model = CoordinateModel::new();
    model.mark(p(0.1, 0.1));
    model.mark(p(0.2, 0.2));
    model.select_slot(SlotSelection::Slot2);

    assert_eq!(model.mark(p(2.0, 2.0)), MarkOutcome::OutOfBounds);
    assert_eq!(model.slot(), SlotSelection::Slot2);
}

// ---------------------------------------------------------------------------
// Slot replacement
// ---------------------------------------------------------------------------

#[test]
fn test_slot_mark_replaces_and_deselects() {
    let mut model = CoordinateModel::new();
    model.mark(p(0.1, 0.1));
    model.mark(p(0.2, 0.2));

    model.select_slot(SlotSelection::Slot1);
    assert_eq!(model.mark(p(0.9, 0.9)), MarkOutcome::Replaced(0));
    assert_eq!(model.points(), &[p(0.9, 0.9), p(0.2, 0.2)]);
    assert_eq!(model.slot(), SlotSelection::None);

    // Slot was consumed, so the next mark is a plain (rejected) attempt.
    assert_eq!(model.mark(p(0.5, 0.5)), MarkOutcome::Rejected);
}

#[test]
fn test_slot_selection_is_exclusive() {
    let mut model = CoordinateModel::new();
    model.select_slot(SlotSelection::Slot1);
    model.select_slot(SlotSelection::Slot2);
    assert_eq!(model.slot(), SlotSelection::Slot2);
}

#[test]
fn test_slot_mark_on_empty_set_appends() {
    let mut model = CoordinateModel::new();
    model.select_slot(SlotSelection::Slot1);
    assert_eq!(model.mark(p(0.3, 0.3)), MarkOutcome::Placed);
    assert_eq!(model.points().len(), 1);
    assert_eq!(model.slot(), SlotSelection::None);
}

// ---------------------------------------------------------------------------
// Undo / reset
// ---------------------------------------------------------------------------

#[test]
fn test_undo_is_lifo() {
    let mut model = CoordinateModel::new();
    model.mark(p(0.1, 0.1));
    model.mark(p(0.2, 0.2));

    assert_eq!(model.undo_last(), Some(p(0.2, 0.2)));
    assert_eq!(model.points(), &[p(0.1, 0.1)]);

    assert_eq!(model.undo_last(), Some(p(0.1, 0.1)));
    assert_eq!(model.undo_last(), None);
}

#[test]
fn test_reset_clears_points_and_slot() {
    let mut model = CoordinateModel::new();
    model.mark(p(0.1, 0.1));
    model.select_slot(SlotSelection::Slot1);

    model.reset();
    assert!(model.points().is_empty());
    assert_eq!(model.slot(), SlotSelection::None);
}
