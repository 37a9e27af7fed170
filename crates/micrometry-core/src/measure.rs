//! Euclidean pixel distance and display formatting.

use crate::calibrate::ScaleFactor;
use crate::consts::DISPLAY_DECIMALS;
use crate::geometry::{ImageSize, NormPoint};

/// Distance between two normalized points, in image pixels.
///
/// Each point is denormalized against the image's natural size per axis;
/// the result is the Euclidean norm of the difference. Symmetric in its
/// point arguments.
pub fn pixel_distance(p1: NormPoint, p2: NormPoint, size: ImageSize) -> f64 {
    let dx = (p2.x - p1.x) * size.width as f64;
    let dy = (p2.y - p1.y) * size.height as f64;
    dx.hypot(dy)
}

/// Measurement over the live point set: defined iff exactly two points
/// are marked.
pub fn measure(points: &[NormPoint], size: ImageSize) -> Option<f64> {
    match points {
        [p1, p2] => Some(pixel_distance(*p1, *p2, size)),
        _ => None,
    }
}

/// Format a pixel distance for display, converting through the scale
/// factor when one is set.
pub fn display(pixels: f64, scale: Option<&ScaleFactor>) -> String {
    match scale {
        Some(s) => format!("{:.prec$} {}", pixels * s.value, s.unit, prec = DISPLAY_DECIMALS),
        None => format!("{:.prec$} pixels", pixels, prec = DISPLAY_DECIMALS),
    }
}
