use crate::geometry::{Point, Rect, Size};
use crate::processing::fit::ScaleBounds;

/// What a zoom-toggle tap should ask of the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomPlan {
    /// Animate back to this scale.
    ZoomOut { scale: f64 },
    /// Animate to this content-space rect, which implies `scale`.
    ZoomIn { rect: Rect, scale: f64 },
}

/// Content-space rect that, zoomed to fill `container`, yields `scale` with
/// `focal` at the centre.
pub fn zoom_rect_for_scale(scale: f64, focal: Point, container: Size) -> Rect {
    let size = Size::new(container.width / scale, container.height / scale);
    Rect::new(focal - size.half(), size)
}

/// Past the midpoint of the range a tap zooms out to the minimum, otherwise
/// it zooms in to `zoom_in_factor` times the minimum around `tap`.
pub fn plan_zoom_toggle(
    current: f64,
    range: &ScaleBounds,
    zoom_in_factor: f64,
    tap: Point,
    container: Size,
) -> ZoomPlan {
    if current >= range.max / 2.0 {
        ZoomPlan::ZoomOut { scale: range.min }
    } else {
        let scale = zoom_in_factor * range.min;
        ZoomPlan::ZoomIn {
            rect: zoom_rect_for_scale(scale, tap, container),
            scale,
        }
    }
}
