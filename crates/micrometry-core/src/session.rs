//! Measurement session orchestrator.
//!
//! Owns the loaded image, the live point set, the view transform, the
//! active scale factor and the label store, and keeps the derived
//! measurement fresh by recomputing it after every relevant mutation.
//! Single-threaded and event-driven: every mutation happens in response
//! to a discrete gesture or provider callback.

use tracing::{debug, info, warn};

use crate::calibrate::{self, Lens, ScaleFactor};
use crate::error::{MicrometryError, Result};
use crate::geometry::{NormPoint, PixelPoint, ScreenPoint};
use crate::labels::{LabelStore, LabelView, MeasurementRecord};
use crate::marking::{CoordinateModel, MarkOutcome, SlotSelection};
use crate::measure;
use crate::provider::{ImageProvider, PermissionGate};
use crate::subject::{ImageSubject, PickedImage};
use crate::view::{ContainerSize, ViewTransform};

/// Which provider operation to acquire an image from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Library,
    Camera,
}

#[derive(Debug, Default)]
pub struct MeasureSession {
    subject: Option<ImageSubject>,
    model: CoordinateModel,
    view: ViewTransform,
    scale: Option<ScaleFactor>,
    labels: LabelStore,
    /// Derived: raw pixel distance, present iff exactly two points are live.
    measurement: Option<f64>,
}

impl MeasureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(&self) -> Option<&ImageSubject> {
        self.subject.as_ref()
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn points(&self) -> &[NormPoint] {
        self.model.points()
    }

    pub fn measurement(&self) -> Option<f64> {
        self.measurement
    }

    pub fn scale(&self) -> Option<&ScaleFactor> {
        self.scale.as_ref()
    }

    /// The current measurement formatted with the active scale factor.
    pub fn display(&self) -> Option<String> {
        self.measurement
            .map(|px| measure::display(px, self.scale.as_ref()))
    }

    // ----- image acquisition ------------------------------------------------

    /// Acquire an image through a provider, gated by permissions.
    ///
    /// Returns `Ok(true)` when a new image was loaded. Permission denial
    /// and user cancellation leave all state untouched and return
    /// `Ok(false)`. If two acquisitions race, whichever resolution is
    /// applied last wins; that is accepted behavior, not guarded against.
    pub fn acquire(
        &mut self,
        provider: &mut dyn ImageProvider,
        gate: &dyn PermissionGate,
        source: ImageSource,
    ) -> Result<bool> {
        let allowed = match source {
            ImageSource::Library => gate.gallery_allowed(),
            ImageSource::Camera => gate.camera_allowed(),
        };
        if !allowed {
            warn!(?source, "image acquisition denied by permission gate");
            return Ok(false);
        }
        let picked = match source {
            ImageSource::Library => provider.pick_from_library()?,
            ImageSource::Camera => provider.capture_from_camera()?,
        };
        match picked {
            Some(image) => {
                self.load_image(image);
                Ok(true)
            }
            None => {
                info!(?source, "image acquisition cancelled");
                Ok(false)
            }
        }
    }

    /// Replace the loaded image. Clears live points, the measurement and
    /// the scale factor; saved labels are untouched. The view is refitted.
    pub fn load_image(&mut self, image: PickedImage) {
        info!(
            uri = %image.uri,
            width = image.size.width,
            height = image.size.height,
            "image loaded"
        );
        self.view.set_image(image.size);
        self.subject = Some(ImageSubject::new(image.uri, image.size));
        self.model.reset();
        self.scale = None;
        self.measurement = None;
    }

    // ----- view -------------------------------------------------------------

    /// The on-screen container was laid out or resized. Refits the image
    /// and resets pan.
    pub fn set_container(&mut self, width: f32, height: f32) {
        self.view.set_container(ContainerSize::new(width, height));
    }

    pub fn set_zoom(&mut self, zoom: f32) -> f32 {
        self.view.set_zoom(zoom)
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.view.zoom_in()
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.view.zoom_out()
    }

    pub fn begin_gesture(&mut self, at: ScreenPoint) {
        self.view.begin_gesture(at);
    }

    pub fn move_gesture(&mut self, at: ScreenPoint) {
        self.view.move_gesture(at);
    }

    /// End the in-flight gesture. A sub-threshold gesture is a tap and
    /// attempts to mark a point; a drag only panned and marks nothing.
    pub fn end_gesture(&mut self) -> Option<MarkOutcome> {
        let tap = self.view.end_gesture()?;
        Some(self.tap(tap))
    }

    // ----- marking ----------------------------------------------------------

    /// Mark a point from a container-space tap by inverting the current
    /// view transform. No-op without a loaded image.
    pub fn tap(&mut self, at: ScreenPoint) -> MarkOutcome {
        let pixel = self.view.screen_to_image(at);
        self.mark_pixel(pixel)
    }

    /// Mark a point given directly in image pixel coordinates.
    pub fn mark_pixel(&mut self, pixel: PixelPoint) -> MarkOutcome {
        let Some(subject) = &self.subject else {
            return MarkOutcome::Rejected;
        };
        let point = pixel.normalized(subject.size);
        let outcome = self.model.mark(point);
        if outcome.accepted() {
            debug!(x = point.x, y = point.y, ?outcome, "point marked");
            self.recompute();
        }
        outcome
    }

    /// Select which live point the next mark replaces.
    pub fn select_slot(&mut self, slot: SlotSelection) {
        self.model.select_slot(slot);
    }

    /// Remove the most recently added point (LIFO).
    pub fn undo_last(&mut self) -> Option<NormPoint> {
        let removed = self.model.undo_last();
        self.recompute();
        removed
    }

    /// Clear all live points and the measurement. Scale factor and saved
    /// labels persist.
    pub fn reset_measurement(&mut self) {
        self.model.reset();
        self.recompute();
    }

    // ----- calibration ------------------------------------------------------

    /// Calibrate from a user-entered known distance between the two
    /// marked points. Sets the active scale factor and returns it.
    pub fn calibrate_manual(&mut self, known_distance: f64, unit: &str) -> Result<ScaleFactor> {
        let measured_px = self.measured_or_err()?;
        let factor = calibrate::manual(known_distance, unit, measured_px)?;
        info!(value = factor.value, unit = %factor.unit, "manual calibration set");
        self.scale = Some(factor.clone());
        Ok(factor)
    }

    /// Calibrate from a lens's field-of-view diameter, treating the two
    /// marked points as spanning it. Sets the active scale factor and
    /// returns it.
    pub fn calibrate_automatic(&mut self, lens: Lens) -> Result<ScaleFactor> {
        let measured_px = self.measured_or_err()?;
        let factor = calibrate::automatic(lens, measured_px);
        info!(%lens, value = factor.value, "automatic calibration set");
        self.scale = Some(factor.clone());
        Ok(factor)
    }

    // ----- labels -----------------------------------------------------------

    /// Snapshot the current measurement into a saved record, then clear
    /// the live points. The scale factor stays active for further
    /// measurements.
    pub fn save_label(&mut self, label: &str) -> Result<MeasurementRecord> {
        let label = label.trim();
        if label.is_empty() {
            return Err(MicrometryError::EmptyLabel);
        }
        let pixel_distance = self.measured_or_err()?;
        let (Some(subject), &[p1, p2]) = (self.subject.as_ref(), self.model.points()) else {
            return Err(MicrometryError::InsufficientPoints {
                have: self.model.points().len(),
            });
        };
        let record = MeasurementRecord {
            label: label.to_string(),
            points: [p1, p2],
            image_uri: subject.uri.clone(),
            scale: self.scale.clone(),
            pixel_distance,
        };
        info!(label = %record.label, display = %record.display_value(), "measurement saved");
        self.labels.push(record.clone());
        self.model.reset();
        self.measurement = None;
        Ok(record)
    }

    /// Saved records, in insertion order.
    pub fn labels(&self) -> &[MeasurementRecord] {
        self.labels.list()
    }

    /// Delete the saved record at `index`. Out-of-range is a no-op.
    pub fn delete_label(&mut self, index: usize) -> bool {
        let removed = self.labels.delete(index);
        if removed {
            info!(index, "label deleted");
        }
        removed
    }

    /// Read-only inspection payload for the saved record at `index`.
    pub fn view_label(&self, index: usize) -> Option<LabelView> {
        self.labels.view(index)
    }

    // ----- derived state ----------------------------------------------------

    fn measured_or_err(&self) -> Result<f64> {
        self.measurement
            .ok_or(MicrometryError::InsufficientPoints {
                have: self.model.points().len(),
            })
    }

    /// Recompute the measurement from the live points. Defined iff
    /// exactly two points are marked; never cached across mutations.
    fn recompute(&mut self) {
        self.measurement = self
            .subject
            .as_ref()
            .and_then(|s| measure::measure(self.model.points(), s.size));
    }
}
