//! View transform between container (screen) space and image pixel space.
//!
//! Tracks the fit-to-container base zoom, the clamped interactive zoom
//! and the accumulated pan offset. Used only to map screen taps back to
//! image coordinates; measurement math never consumes view state.

use crate::consts::{DRAG_THRESHOLD_PX, FALLBACK_ZOOM_FLOOR, MAX_ZOOM, ZOOM_STEP};
use crate::geometry::{ImageSize, PixelPoint, ScreenPoint};

/// Pixel dimensions of the on-screen container the image is fitted into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl ContainerSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Accumulated pan translation, in container pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

/// An in-flight single-finger gesture.
///
/// `dragged` flips once the pointer moves beyond [`DRAG_THRESHOLD_PX`]
/// from its start; from then on the gesture pans and can no longer mark.
#[derive(Clone, Copy, Debug)]
struct GestureState {
    start: ScreenPoint,
    last: ScreenPoint,
    dragged: bool,
}

/// Maps between container coordinates and image pixel coordinates.
///
/// Render transform: `screen = image_px * zoom + pan`. Any change to the
/// image or the container recomputes the base zoom and resets pan to the
/// origin.
#[derive(Clone, Debug)]
pub struct ViewTransform {
    container: Option<ContainerSize>,
    image: Option<ImageSize>,
    base_zoom: f32,
    zoom: f32,
    pan: PanOffset,
    gesture: Option<GestureState>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            container: None,
            image: None,
            base_zoom: 1.0,
            zoom: 1.0,
            pan: PanOffset::default(),
            gesture: None,
        }
    }
}

impl ViewTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the image being viewed. Recomputes the fit and resets pan.
    pub fn set_image(&mut self, image: ImageSize) {
        self.image = Some(image);
        self.refit();
    }

    /// Replace the container size. Recomputes the fit and resets pan.
    pub fn set_container(&mut self, container: ContainerSize) {
        self.container = Some(container);
        self.refit();
    }

    /// Recompute `base_zoom = min(cw/iw, ch/ih)` and reset zoom/pan.
    fn refit(&mut self) {
        if let (Some(c), Some(i)) = (self.container, self.image) {
            if i.width > 0 && i.height > 0 {
                self.base_zoom = (c.width / i.width as f32).min(c.height / i.height as f32);
            } else {
                self.base_zoom = 1.0;
            }
            self.zoom = self.base_zoom;
        }
        self.pan = PanOffset::default();
        self.gesture = None;
    }

    /// The fit-to-container zoom, which is also the zoom floor once an
    /// image has been fitted.
    pub fn base_zoom(&self) -> f32 {
        self.base_zoom
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> PanOffset {
        self.pan
    }

    fn zoom_floor(&self) -> f32 {
        if self.container.is_some() && self.image.is_some() {
            self.base_zoom
        } else {
            FALLBACK_ZOOM_FLOOR
        }
    }

    /// Set the zoom, clamped to `[floor, MAX_ZOOM]`. Returns the applied value.
    pub fn set_zoom(&mut self, zoom: f32) -> f32 {
        self.zoom = zoom.clamp(self.zoom_floor(), MAX_ZOOM);
        self.zoom
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.set_zoom(self.zoom + ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.set_zoom(self.zoom - ZOOM_STEP)
    }

    /// Accumulate a pan translation, in container pixels.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Invert the render transform: container coordinates to image pixels.
    pub fn screen_to_image(&self, at: ScreenPoint) -> PixelPoint {
        PixelPoint {
            x: ((at.x - self.pan.x) / self.zoom) as f64,
            y: ((at.y - self.pan.y) / self.zoom) as f64,
        }
    }

    /// A single-finger gesture touched down at `at`.
    pub fn begin_gesture(&mut self, at: ScreenPoint) {
        self.gesture = Some(GestureState {
            start: at,
            last: at,
            dragged: false,
        });
    }

    /// The gesture pointer moved to `at`. Once the movement threshold is
    /// crossed the gesture becomes a pan and every subsequent sample
    /// translates the view.
    pub fn move_gesture(&mut self, at: ScreenPoint) {
        let Some(mut g) = self.gesture else {
            return;
        };
        if !g.dragged && g.start.distance_to(at) > DRAG_THRESHOLD_PX {
            g.dragged = true;
        }
        if g.dragged {
            self.pan.x += at.x - g.last.x;
            self.pan.y += at.y - g.last.y;
        }
        g.last = at;
        self.gesture = Some(g);
    }

    /// The gesture ended. Returns the tap position if the gesture stayed
    /// under the movement threshold, `None` if it panned.
    pub fn end_gesture(&mut self) -> Option<ScreenPoint> {
        let g = self.gesture.take()?;
        if g.dragged {
            None
        } else {
            Some(g.last)
        }
    }
}
