//! Scale-factor calibration, manual and lens-derived.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    LENS_FOV_100X_MM, LENS_FOV_10X_MM, LENS_FOV_40X_MM, LENS_FOV_4X_MM, MICROMETERS_PER_MM,
    MICROMETER_UNIT,
};
use crate::error::{MicrometryError, Result};

/// Real-world distance per image pixel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactor {
    /// Units per pixel.
    pub value: f64,
    pub unit: String,
}

impl ScaleFactor {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Human-readable confirmation of the derived factor.
    pub fn confirmation(&self) -> String {
        format!("1 pixel = {:.4} {}", self.value, self.unit)
    }
}

/// Microscope objective with a fixed field-of-view diameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lens {
    X4,
    X10,
    X40,
    X100,
}

impl Lens {
    pub const ALL: [Lens; 4] = [Lens::X4, Lens::X10, Lens::X40, Lens::X100];

    /// Diameter (mm) of the circular area visible through this objective.
    pub fn field_diameter_mm(self) -> f64 {
        match self {
            Self::X4 => LENS_FOV_4X_MM,
            Self::X10 => LENS_FOV_10X_MM,
            Self::X40 => LENS_FOV_40X_MM,
            Self::X100 => LENS_FOV_100X_MM,
        }
    }

    pub fn magnification(self) -> u32 {
        match self {
            Self::X4 => 4,
            Self::X10 => 10,
            Self::X40 => 40,
            Self::X100 => 100,
        }
    }

    pub fn from_magnification(magnification: u32) -> Option<Lens> {
        Self::ALL
            .into_iter()
            .find(|l| l.magnification() == magnification)
    }
}

impl fmt::Display for Lens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.magnification())
    }
}

/// Derive a scale factor from a user-entered known distance spanning the
/// measured pixel distance.
pub fn manual(known_distance: f64, unit: &str, measured_px: f64) -> Result<ScaleFactor> {
    if !known_distance.is_finite() || known_distance <= 0.0 {
        return Err(MicrometryError::InvalidKnownDistance(known_distance));
    }
    let unit = unit.trim();
    if unit.is_empty() {
        return Err(MicrometryError::EmptyUnit);
    }
    Ok(ScaleFactor::new(known_distance / measured_px, unit))
}

/// Derive a scale factor from a lens's field-of-view diameter, in
/// micrometers per pixel.
///
/// Usage precondition, not validated here: the two marked points must lie
/// on opposite edges of the circular field of view, so that the measured
/// pixel distance spans the full diameter.
pub fn automatic(lens: Lens, measured_px: f64) -> ScaleFactor {
    let micrometers = lens.field_diameter_mm() * MICROMETERS_PER_MM;
    ScaleFactor::new(micrometers / measured_px, MICROMETER_UNIT)
}
