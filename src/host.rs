//! Seams to the surrounding UI toolkit.
//!
//! The engine never scrolls, renders or recognises gestures itself. It reads
//! and writes the host viewport through [`HostViewport`] and learns image
//! sizes through [`DisplayImage`].

use std::path::Path;

use crate::error::Result;
use crate::geometry::{ImageDimensions, Point, Rect, Size};

pub mod simulated;

pub use simulated::SimulatedViewport;

/// Capabilities required from a pannable, zoomable host surface.
///
/// Container space is the host's own coordinate system: the visible region is
/// the rect at `content_offset()` with size `bounds()`. Content space is the
/// unscaled coordinate system of the installed image view.
pub trait HostViewport {
    fn bounds(&self) -> Size;
    /// Apply a new container size. Called by the engine only while bracketing
    /// a resize.
    fn set_bounds(&mut self, bounds: Size);
    fn frame(&self) -> Rect;

    fn zoom_scale(&self) -> f64;
    fn set_zoom_scale(&mut self, scale: f64, animated: bool);
    fn min_zoom_scale(&self) -> f64;
    fn max_zoom_scale(&self) -> f64;
    fn set_zoom_scale_bounds(&mut self, min: f64, max: f64);

    fn content_size(&self) -> Size;
    fn set_content_size(&mut self, size: Size);
    fn content_offset(&self) -> Point;
    fn set_content_offset(&mut self, offset: Point);

    /// Frame origin of the zoomed image view inside the container.
    fn content_origin(&self) -> Point;
    fn set_content_origin(&mut self, origin: Point);

    /// Zoom so that `rect`, given in content space, fills the container.
    fn zoom_to_rect(&mut self, rect: Rect, animated: bool);

    fn convert_to_content(&self, point: Point) -> Point;
    fn convert_from_content(&self, point: Point) -> Point;

    /// Replace the zoomed view with a fresh image view of the given natural
    /// size, at scale 1.
    fn install_content(&mut self, image: ImageDimensions);
}

/// Anything the viewport can display.
pub trait DisplayImage {
    fn natural_size(&self) -> Result<ImageDimensions>;
}

impl DisplayImage for ImageDimensions {
    fn natural_size(&self) -> Result<ImageDimensions> {
        Ok(*self)
    }
}

impl DisplayImage for image::DynamicImage {
    fn natural_size(&self) -> Result<ImageDimensions> {
        ImageDimensions::new(f64::from(self.width()), f64::from(self.height()))
    }
}

impl DisplayImage for image::RgbaImage {
    fn natural_size(&self) -> Result<ImageDimensions> {
        ImageDimensions::new(f64::from(self.width()), f64::from(self.height()))
    }
}

/// Read an image file's natural size from its header without decoding pixels.
pub fn probe_image_file(path: &Path) -> Result<ImageDimensions> {
    let (w, h) = image::image_dimensions(path)?;
    ImageDimensions::new(f64::from(w), f64::from(h))
}
