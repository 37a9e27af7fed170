//! Image acquisition seam.
//!
//! Providers supply an image URI together with its natural pixel
//! dimensions; the engine never decodes pixel data itself. Gallery and
//! camera sources on a device implement [`ImageProvider`]; desktop and
//! test code use [`FileImageProvider`], which probes dimensions from the
//! file header.

use std::path::PathBuf;

use crate::error::Result;
use crate::geometry::ImageSize;
use crate::subject::PickedImage;

/// Offers images from a backing source (gallery, camera, file system).
///
/// `Ok(None)` means the user cancelled the selection; it is not an error
/// and must leave any previously loaded image in place.
pub trait ImageProvider {
    fn pick_from_library(&mut self) -> Result<Option<PickedImage>>;
    fn capture_from_camera(&mut self) -> Result<Option<PickedImage>>;
}

/// Grants or denies access to the underlying image sources. A provider
/// call is only attempted after the matching permission is granted.
pub trait PermissionGate {
    fn gallery_allowed(&self) -> bool;
    fn camera_allowed(&self) -> bool;
}

/// Permission gate that grants everything, for desktop use where file
/// access needs no runtime consent.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysAllow;

impl PermissionGate for AlwaysAllow {
    fn gallery_allowed(&self) -> bool {
        true
    }

    fn camera_allowed(&self) -> bool {
        true
    }
}

/// Provider backed by a single image file on disk.
#[derive(Clone, Debug)]
pub struct FileImageProvider {
    path: PathBuf,
}

impl FileImageProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Probe the natural pixel dimensions from the file header without
    /// decoding the pixel data.
    pub fn probe(&self) -> Result<PickedImage> {
        let (width, height) = image::image_dimensions(&self.path)?;
        Ok(PickedImage {
            uri: self.path.display().to_string(),
            size: ImageSize::new(width, height),
        })
    }
}

impl ImageProvider for FileImageProvider {
    fn pick_from_library(&mut self) -> Result<Option<PickedImage>> {
        self.probe().map(Some)
    }

    fn capture_from_camera(&mut self) -> Result<Option<PickedImage>> {
        self.probe().map(Some)
    }
}
