//! Ordered store of saved measurement snapshots.

use serde::{Deserialize, Serialize};

use crate::calibrate::ScaleFactor;
use crate::geometry::NormPoint;
use crate::measure;

/// A named, saved snapshot of a two-point measurement.
///
/// Immutable once created. The scale factor active at save time is frozen
/// into the record; later recalibration never alters it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub label: String,
    pub points: [NormPoint; 2],
    pub image_uri: String,
    pub scale: Option<ScaleFactor>,
    /// Raw pixel distance between the two points.
    pub pixel_distance: f64,
}

impl MeasurementRecord {
    /// Format the stored distance with the record's frozen scale factor.
    pub fn display_value(&self) -> String {
        measure::display(self.pixel_distance, self.scale.as_ref())
    }
}

/// Rehydration payload for presenting a saved record read-only.
///
/// An owned value copy: inspecting it can never alias or mutate the
/// stored record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelView {
    pub points: [NormPoint; 2],
    pub image_uri: String,
    pub scale: Option<ScaleFactor>,
    pub pixel_distance: f64,
    pub display: String,
}

/// Ordered collection of saved measurements. Insertion order is display
/// order.
#[derive(Clone, Debug, Default)]
pub struct LabelStore {
    records: Vec<MeasurementRecord>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the collection.
    pub fn push(&mut self, record: MeasurementRecord) {
        self.records.push(record);
    }

    /// All records, in insertion order.
    pub fn list(&self) -> &[MeasurementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove the record at `index`, preserving the relative order of the
    /// rest. Out-of-range indices are a no-op; returns whether a record
    /// was removed.
    pub fn delete(&mut self, index: usize) -> bool {
        if index < self.records.len() {
            self.records.remove(index);
            true
        } else {
            false
        }
    }

    /// Build the read-only inspection payload for the record at `index`.
    pub fn view(&self, index: usize) -> Option<LabelView> {
        self.records.get(index).map(|r| LabelView {
            points: r.points,
            image_uri: r.image_uri.clone(),
            scale: r.scale.clone(),
            pixel_distance: r.pixel_distance,
            display: r.display_value(),
        })
    }
}
