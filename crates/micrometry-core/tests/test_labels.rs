use micrometry_core::calibrate::ScaleFactor;
use micrometry_core::geometry::NormPoint;
use micrometry_core::labels::{LabelStore, MeasurementRecord};

fn record(label: &str, scale: Option<ScaleFactor>) -> MeasurementRecord {
    MeasurementRecord {
        label: label.to_string(),
        points: [NormPoint::new(0.1, 0.2), NormPoint::new(0.4, 0.2)],
        image_uri: "file:///cells.png".to_string(),
        scale,
        pixel_distance: 300.0,
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn test_list_preserves_insertion_order() {
    let mut store = LabelStore::new();
    store.push(record("first", None));
    store.push(record("second", None));
    store.push(record("third", None));

    let labels: Vec<_> = store.list().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["first", "second", "third"]);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn test_delete_removes_exactly_one_and_keeps_order() {
    let mut store = LabelStore::new();
    store.push(record("a", None));
    store.push(record("b", None));
    store.push(record("c", None));

    assert!(store.delete(1));
    let labels: Vec<_> = store.list().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["a", "c"]);
}

#[test]
fn test_delete_out_of_range_is_noop() {
    let mut store = LabelStore::new();
    store.push(record("only", None));

    assert!(!store.delete(5));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_on_empty_store() {
    let mut store = LabelStore::new();
    assert!(!store.delete(0));
    assert!(store.is_empty());
}

// ---------------------------------------------------------------------------
// View rehydration
// ---------------------------------------------------------------------------

#[test]
fn test_view_returns_owned_snapshot() {
    let mut store = LabelStore::new();
    store.push(record("calibrated", Some(ScaleFactor::new(0.1, "µm"))));

    let view = store.view(0).unwrap();
    assert_eq!(view.image_uri, "file:///cells.png");
    assert_eq!(view.pixel_distance, 300.0);
    assert_eq!(view.display, "30.00 µm");
    assert_eq!(view.points[0], NormPoint::new(0.1, 0.2));
}

#[test]
fn test_view_out_of_range_is_none() {
    let store = LabelStore::new();
    assert!(store.view(0).is_none());
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn test_record_serializes_round_trip() {
    let original = record("serialized", Some(ScaleFactor::new(0.1, "µm")));
    let json = serde_json::to_string(&original).unwrap();
    let restored: MeasurementRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

// ---------------------------------------------------------------------------
// Frozen scale factor
// ---------------------------------------------------------------------------

#[test]
fn test_record_display_uses_frozen_scale() {
    let uncalibrated = record("raw", None);
    assert_eq!(uncalibrated.display_value(), "300.00 pixels");

    let calibrated = record("scaled", Some(ScaleFactor::new(0.5, "mm")));
    assert_eq!(calibrated.display_value(), "150.00 mm");
}
