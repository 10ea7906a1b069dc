use crate::geometry::{ImageDimensions, Point, Rect, Size, clamp_offset};
use crate::host::HostViewport;

/// In-memory host with scroll-view semantics.
///
/// - the zoom scale is clamped to the configured bounds;
/// - content size follows the installed image at the current scale;
/// - content offsets are clamped to the scrollable range;
/// - animations complete immediately.
#[derive(Debug, Clone)]
pub struct SimulatedViewport {
    frame_origin: Point,
    bounds: Size,
    image: Option<Size>,
    zoom_scale: f64,
    min_zoom_scale: f64,
    max_zoom_scale: f64,
    content_size: Size,
    content_offset: Point,
    content_origin: Point,
    last_zoom_rect: Option<Rect>,
}

impl SimulatedViewport {
    pub fn new(bounds: Size) -> Self {
        Self {
            frame_origin: Point::ZERO,
            bounds,
            image: None,
            zoom_scale: 1.0,
            min_zoom_scale: 1.0,
            max_zoom_scale: 1.0,
            content_size: Size::ZERO,
            content_offset: Point::ZERO,
            content_origin: Point::ZERO,
            last_zoom_rect: None,
        }
    }

    /// Centre of the visible region in container space.
    pub fn visible_center(&self) -> Point {
        self.content_offset + self.bounds.half()
    }

    /// Most recent rect passed to [`HostViewport::zoom_to_rect`].
    pub fn last_zoom_rect(&self) -> Option<Rect> {
        self.last_zoom_rect
    }

    fn clamp_current_offset(&mut self) {
        self.content_offset = clamp_offset(self.content_offset, self.content_size, self.bounds);
    }
}

impl HostViewport for SimulatedViewport {
    fn bounds(&self) -> Size {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
        self.clamp_current_offset();
    }

    fn frame(&self) -> Rect {
        Rect::new(self.frame_origin, self.bounds)
    }

    fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    fn set_zoom_scale(&mut self, scale: f64, _animated: bool) {
        self.zoom_scale = scale.max(self.min_zoom_scale).min(self.max_zoom_scale);
        if let Some(image) = self.image {
            self.content_size = image.scaled(self.zoom_scale);
        }
        self.clamp_current_offset();
    }

    fn min_zoom_scale(&self) -> f64 {
        self.min_zoom_scale
    }

    fn max_zoom_scale(&self) -> f64 {
        self.max_zoom_scale
    }

    fn set_zoom_scale_bounds(&mut self, min: f64, max: f64) {
        self.min_zoom_scale = min;
        self.max_zoom_scale = max;
        if self.zoom_scale < min || self.zoom_scale > max {
            self.set_zoom_scale(self.zoom_scale, false);
        }
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
        self.clamp_current_offset();
    }

    fn content_offset(&self) -> Point {
        self.content_offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.content_offset = offset;
        self.clamp_current_offset();
    }

    fn content_origin(&self) -> Point {
        self.content_origin
    }

    fn set_content_origin(&mut self, origin: Point) {
        self.content_origin = origin;
    }

    fn zoom_to_rect(&mut self, rect: Rect, animated: bool) {
        self.last_zoom_rect = Some(rect);
        if rect.size.width <= 0.0 || rect.size.height <= 0.0 {
            return;
        }
        let scale = (self.bounds.width / rect.size.width).min(self.bounds.height / rect.size.height);
        self.set_zoom_scale(scale, animated);
        let target = rect.center() * self.zoom_scale + self.content_origin;
        self.set_content_offset(target - self.bounds.half());
    }

    fn convert_to_content(&self, point: Point) -> Point {
        (point - self.content_origin) / self.zoom_scale
    }

    fn convert_from_content(&self, point: Point) -> Point {
        point * self.zoom_scale + self.content_origin
    }

    fn install_content(&mut self, image: ImageDimensions) {
        self.image = Some(image.size());
        self.zoom_scale = 1.0;
        self.min_zoom_scale = 1.0;
        self.max_zoom_scale = 1.0;
        self.content_size = image.size();
        self.content_offset = Point::ZERO;
        self.content_origin = Point::ZERO;
        self.last_zoom_rect = None;
    }
}
