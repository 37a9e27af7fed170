use approx::assert_abs_diff_eq;
use micrometry_core::geometry::{ImageSize, NormPoint, PixelPoint, ScreenPoint};

// ---------------------------------------------------------------------------
// Normalization round trips
// ---------------------------------------------------------------------------

#[test]
fn test_pixel_to_norm_scenario_values() {
    let size = ImageSize::new(1000, 500);
    let p1 = PixelPoint::new(100.0, 100.0).normalized(size);
    let p2 = PixelPoint::new(400.0, 100.0).normalized(size);

    assert_abs_diff_eq!(p1.x, 0.1);
    assert_abs_diff_eq!(p1.y, 0.2);
    assert_abs_diff_eq!(p2.x, 0.4);
    assert_abs_diff_eq!(p2.y, 0.2);
}

#[test]
fn test_norm_to_pixel_round_trip() {
    let size = ImageSize::new(1000, 500);
    let norm = NormPoint::new(0.25, 0.75);
    let px = norm.to_pixels(size);

    assert_abs_diff_eq!(px.x, 250.0);
    assert_abs_diff_eq!(px.y, 375.0);

    let back = px.normalized(size);
    assert_abs_diff_eq!(back.x, norm.x);
    assert_abs_diff_eq!(back.y, norm.y);
}

// ---------------------------------------------------------------------------
// Unit square containment
// ---------------------------------------------------------------------------

#[test]
fn test_in_unit_square_interior_and_edges() {
    assert!(NormPoint::new(0.5, 0.5).in_unit_square());
    assert!(NormPoint::new(0.0, 0.0).in_unit_square());
    assert!(NormPoint::new(1.0, 1.0).in_unit_square());
}

#[test]
fn test_in_unit_square_outside() {
    assert!(!NormPoint::new(-0.001, 0.5).in_unit_square());
    assert!(!NormPoint::new(0.5, 1.001).in_unit_square());
    assert!(!NormPoint::new(1.5, -0.5).in_unit_square());
}

// ---------------------------------------------------------------------------
// Screen distance
// ---------------------------------------------------------------------------

#[test]
fn test_screen_point_distance() {
    let a = ScreenPoint::new(0.0, 0.0);
    let b = ScreenPoint::new(3.0, 4.0);
    assert_abs_diff_eq!(a.distance_to(b), 5.0);
    assert_abs_diff_eq!(b.distance_to(a), 5.0);
}
