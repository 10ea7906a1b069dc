//! Keeps the same part of the image in view while the container changes size.
//!
//! A resize is bracketed: [`prepare`] runs while the old bounds are still in
//! effect, [`recover`] runs once the host reports the new bounds.

use tracing::debug;

use crate::error::Result;
use crate::geometry::{ContainerBounds, ImageDimensions, Point, clamp_offset};
use crate::host::HostViewport;
use crate::processing::fit::{FitPolicy, ScaleBounds, resolve_scale_bounds};
use crate::processing::offset::centered_content_origin;

/// Scale to re-apply after a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RestoreScale {
    /// Keep this scale, clamped to the new range.
    Exact(f64),
    /// The viewport rested at its minimum; lock to the new minimum.
    UseMinimum,
}

impl RestoreScale {
    pub fn resolve(&self, bounds: &ScaleBounds) -> f64 {
        match *self {
            Self::Exact(scale) => bounds.clamp(scale),
            Self::UseMinimum => bounds.min,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSnapshot {
    /// Content-space point that sat at the centre of the container.
    pub focal_content_point: Point,
    pub scale_to_restore: RestoreScale,
}

pub fn prepare<H: HostViewport + ?Sized>(host: &H) -> ResizeSnapshot {
    let bounds_center = host.content_offset() + host.bounds().half();
    let focal_content_point = host.convert_to_content(bounds_center);
    let current = host.zoom_scale();
    let scale_to_restore = if current <= host.min_zoom_scale() + f64::EPSILON {
        RestoreScale::UseMinimum
    } else {
        RestoreScale::Exact(current)
    };
    debug!(
        ?focal_content_point,
        ?scale_to_restore,
        "captured resize snapshot"
    );
    ResizeSnapshot {
        focal_content_point,
        scale_to_restore,
    }
}

/// Re-derive the scale range for the host's current bounds and restore the
/// snapshot's scale and focal point.
///
/// The host is left untouched when the new range cannot be derived.
pub fn recover<H: HostViewport + ?Sized>(
    host: &mut H,
    snapshot: &ResizeSnapshot,
    image: ImageDimensions,
    bounds: ContainerBounds,
    policy: &FitPolicy,
) -> Result<ScaleBounds> {
    let range = resolve_scale_bounds(image, bounds, policy)?;
    host.set_zoom_scale_bounds(range.min, range.max);
    host.set_zoom_scale(snapshot.scale_to_restore.resolve(&range), false);

    let size = bounds.size();
    host.set_content_origin(centered_content_origin(host.content_size(), size));

    let focal_container_point = host.convert_from_content(snapshot.focal_content_point);
    let desired = focal_container_point - size.half();
    let offset = clamp_offset(desired, host.content_size(), size);
    host.set_content_offset(offset);
    debug!(
        scale = host.zoom_scale(),
        ?offset,
        "restored view after resize"
    );
    Ok(range)
}
