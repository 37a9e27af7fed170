use serde::{Deserialize, Serialize};

/// Natural pixel dimensions of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A marked point normalized against the image's natural size.
///
/// Both components lie in `[0, 1]` for points inside the image, which
/// makes the point independent of on-screen zoom and pan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormPoint {
    pub x: f64,
    pub y: f64,
}

impl NormPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether the point lies inside the image, i.e. in `[0,1]×[0,1]`.
    pub fn in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Denormalize to absolute pixel coordinates for the given image size.
    pub fn to_pixels(&self, size: ImageSize) -> PixelPoint {
        PixelPoint {
            x: self.x * size.width as f64,
            y: self.y * size.height as f64,
        }
    }
}

/// A position in image pixel coordinates (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Normalize against the image's natural size.
    pub fn normalized(&self, size: ImageSize) -> NormPoint {
        NormPoint {
            x: self.x / size.width as f64,
            y: self.y / size.height as f64,
        }
    }
}

/// A position in container (on-screen) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another screen point.
    pub fn distance_to(&self, other: ScreenPoint) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
