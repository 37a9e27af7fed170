use serde::{Deserialize, Serialize};

use crate::geometry::ImageSize;

/// Image yielded by a provider, with its natural pixel dimensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickedImage {
    pub uri: String,
    pub size: ImageSize,
}

/// The currently loaded micrograph.
///
/// Immutable once created; loading a new image replaces the whole subject
/// and resets all dependent measurement state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSubject {
    pub uri: String,
    pub size: ImageSize,
}

impl ImageSubject {
    pub fn new(uri: impl Into<String>, size: ImageSize) -> Self {
        Self {
            uri: uri.into(),
            size,
        }
    }
}
