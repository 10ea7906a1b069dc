use crate::config::{FitMode, OffsetMode};
use crate::geometry::{Point, Size, clamp_offset};

/// Content offset for a freshly displayed image.
///
/// `content` is the zoomed content size, i.e. the image size at the scale the
/// viewport has just been set to.
pub fn initial_content_offset(
    bounds: Size,
    content: Size,
    fit: FitMode,
    mode: OffsetMode,
) -> Point {
    let offset = match mode {
        OffsetMode::Beginning => Point::ZERO,
        OffsetMode::Center => {
            let x = overflow_half(content.width, bounds.width);
            let y = overflow_half(content.height, bounds.height);
            match fit {
                FitMode::AspectFit => Point::ZERO,
                FitMode::AspectFill => Point::new(x, y),
                FitMode::HeightFill => Point::new(x, 0.0),
                FitMode::WidthFill => Point::new(0.0, y),
            }
        }
    };
    clamp_offset(offset, content, bounds)
}

fn overflow_half(content: f64, bounds: f64) -> f64 {
    if content < bounds {
        0.0
    } else {
        (content - bounds) / 2.0
    }
}

/// Frame origin that centres content smaller than the container.
///
/// Axes where the content fills or overflows the container stay at zero.
pub fn centered_content_origin(content: Size, bounds: Size) -> Point {
    let centre = |content: f64, bounds: f64| {
        if content < bounds {
            (bounds - content) / 2.0
        } else {
            0.0
        }
    };
    Point::new(
        centre(content.width, bounds.width),
        centre(content.height, bounds.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beginning_is_always_origin() {
        for fit in [
            FitMode::AspectFill,
            FitMode::AspectFit,
            FitMode::WidthFill,
            FitMode::HeightFill,
        ] {
            let p = initial_content_offset(
                Size::new(300.0, 600.0),
                Size::new(2000.0, 2000.0),
                fit,
                OffsetMode::Beginning,
            );
            assert_eq!(p, Point::ZERO);
        }
    }

    #[test]
    fn centre_per_fit_mode() {
        let bounds = Size::new(300.0, 600.0);
        let content = Size::new(1000.0, 800.0);
        let at = |fit| initial_content_offset(bounds, content, fit, OffsetMode::Center);
        assert_eq!(at(FitMode::AspectFit), Point::ZERO);
        assert_eq!(at(FitMode::AspectFill), Point::new(350.0, 100.0));
        assert_eq!(at(FitMode::HeightFill), Point::new(350.0, 0.0));
        assert_eq!(at(FitMode::WidthFill), Point::new(0.0, 100.0));
    }

    #[test]
    fn centre_on_short_axis_stays_at_zero() {
        let p = initial_content_offset(
            Size::new(300.0, 600.0),
            Size::new(900.0, 400.0),
            FitMode::AspectFill,
            OffsetMode::Center,
        );
        assert_eq!(p, Point::new(300.0, 0.0));
    }

    #[test]
    fn centring_origin_for_letterboxed_content() {
        let o = centered_content_origin(Size::new(300.0, 300.0), Size::new(300.0, 600.0));
        assert_eq!(o, Point::new(0.0, 150.0));
        let o = centered_content_origin(Size::new(900.0, 900.0), Size::new(300.0, 600.0));
        assert_eq!(o, Point::ZERO);
    }
}
