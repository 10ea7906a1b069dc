//! Plain value types shared by the zoom engine and its hosts.
//!
//! All coordinates are logical points in `f64`. Container space is the host
//! viewport's own coordinate system (its origin moves with the content
//! offset); content space is the unscaled coordinate system of the displayed
//! image.

use std::ops::{Add, Div, Mul, Sub};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both sides finite and strictly positive.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn scaled(&self, factor: f64) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }

    /// Half extents as a point, handy for centring arithmetic.
    pub fn half(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Swap width and height.
    pub fn rotated(&self) -> Size {
        Size::new(self.height, self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn center(&self) -> Point {
        self.origin + self.size.half()
    }
}

/// Natural size of the displayed image. Always drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDimensions(Size);

impl ImageDimensions {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let size = Size::new(width, height);
        if !size.is_drawable() {
            return Err(Error::DegenerateImage { width, height });
        }
        Ok(Self(size))
    }

    pub fn size(&self) -> Size {
        self.0
    }

    pub fn width(&self) -> f64 {
        self.0.width
    }

    pub fn height(&self) -> f64 {
        self.0.height
    }
}

/// Size of the host container. Always drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds(Size);

impl ContainerBounds {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Self::from_size(Size::new(width, height))
    }

    pub fn from_size(size: Size) -> Result<Self> {
        if !size.is_drawable() {
            return Err(Error::DegenerateBounds {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self(size))
    }

    pub fn size(&self) -> Size {
        self.0
    }

    pub fn width(&self) -> f64 {
        self.0.width
    }

    pub fn height(&self) -> f64 {
        self.0.height
    }
}

/// Clamp one axis of a content offset into `[0, content - bounds]`.
///
/// When the content is smaller than the bounds the allowed range collapses
/// to zero.
pub fn clamp_offset_axis(offset: f64, content: f64, bounds: f64) -> f64 {
    let max = (content - bounds).max(0.0);
    offset.min(max).max(0.0)
}

/// Clamp a content offset componentwise into the scrollable range.
pub fn clamp_offset(offset: Point, content: Size, bounds: Size) -> Point {
    Point::new(
        clamp_offset_axis(offset.x, content.width, bounds.width),
        clamp_offset_axis(offset.y, content.height, bounds.height),
    )
}
