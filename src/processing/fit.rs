use crate::config::{FitMode, ViewportConfig};
use crate::error::{Error, Result};
use crate::geometry::{ContainerBounds, ImageDimensions};

/// Zoom scale range the host viewport is allowed to move within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    pub min: f64,
    pub max: f64,
}

impl ScaleBounds {
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }
}

/// Parameters for deriving [`ScaleBounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitPolicy {
    pub mode: FitMode,
    pub max_scale_from_min: f64,
    pub min_scale_slack: f64,
}

impl From<&ViewportConfig> for FitPolicy {
    fn from(cfg: &ViewportConfig) -> Self {
        Self {
            mode: cfg.fit_mode,
            max_scale_from_min: cfg.max_scale_from_min,
            min_scale_slack: cfg.min_scale_slack,
        }
    }
}

/// Scale factors that make the image exactly span the container on each axis.
pub fn axis_scales(image: ImageDimensions, bounds: ContainerBounds) -> (f64, f64) {
    (
        bounds.width() / image.width(),
        bounds.height() / image.height(),
    )
}

/// Minimum scale before the zoom factor clamp and the slack are applied.
pub fn unconstrained_min_scale(
    image: ImageDimensions,
    bounds: ContainerBounds,
    mode: FitMode,
) -> f64 {
    let (x_scale, y_scale) = axis_scales(image, bounds);
    match mode {
        FitMode::AspectFill => x_scale.max(y_scale),
        FitMode::AspectFit => x_scale.min(y_scale),
        FitMode::WidthFill => x_scale,
        FitMode::HeightFill => y_scale,
    }
}

/// Derive the zoom range for `image` inside `bounds`.
///
/// Guarantees `0 < min <= max`, both finite. Extreme size ratios that would
/// overflow or underflow the scale are rejected as a degenerate image.
pub fn resolve_scale_bounds(
    image: ImageDimensions,
    bounds: ContainerBounds,
    policy: &FitPolicy,
) -> Result<ScaleBounds> {
    if !(policy.max_scale_from_min.is_finite() && policy.max_scale_from_min > 0.0) {
        return Err(Error::InvalidConfig(format!(
            "max-scale-from-min {} is not a finite positive value",
            policy.max_scale_from_min
        )));
    }
    if !(policy.min_scale_slack > 0.0 && policy.min_scale_slack <= 1.0) {
        return Err(Error::InvalidConfig(format!(
            "min-scale-slack {} is outside (0, 1]",
            policy.min_scale_slack
        )));
    }

    let mut min = unconstrained_min_scale(image, bounds, policy.mode);
    let max = policy.max_scale_from_min * min;
    if min > max {
        min = max;
    }
    let min = min * policy.min_scale_slack;
    if !(min.is_finite() && max.is_finite() && min > 0.0) {
        return Err(Error::DegenerateImage {
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(ScaleBounds { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(mode: FitMode) -> FitPolicy {
        FitPolicy {
            mode,
            max_scale_from_min: 3.0,
            min_scale_slack: 1.0,
        }
    }

    #[test]
    fn portrait_container_square_image() {
        let image = ImageDimensions::new(1000.0, 1000.0).unwrap();
        let bounds = ContainerBounds::new(300.0, 600.0).unwrap();
        let fill = resolve_scale_bounds(image, bounds, &policy(FitMode::AspectFill)).unwrap();
        assert!((fill.min - 0.6).abs() < 1e-12);
        assert!((fill.max - 1.8).abs() < 1e-12);
        let fit = resolve_scale_bounds(image, bounds, &policy(FitMode::AspectFit)).unwrap();
        assert!((fit.min - 0.3).abs() < 1e-12);
        assert!((fit.max - 0.9).abs() < 1e-12);
    }

    #[test]
    fn axis_modes_ignore_the_other_axis() {
        let image = ImageDimensions::new(400.0, 200.0).unwrap();
        let bounds = ContainerBounds::new(800.0, 100.0).unwrap();
        assert_eq!(
            unconstrained_min_scale(image, bounds, FitMode::WidthFill),
            2.0
        );
        assert_eq!(
            unconstrained_min_scale(image, bounds, FitMode::HeightFill),
            0.5
        );
    }

    #[test]
    fn slack_only_touches_minimum() {
        let image = ImageDimensions::new(1000.0, 1000.0).unwrap();
        let bounds = ContainerBounds::new(300.0, 600.0).unwrap();
        let mut p = policy(FitMode::AspectFill);
        p.min_scale_slack = 0.999;
        let b = resolve_scale_bounds(image, bounds, &p).unwrap();
        assert!((b.min - 0.6 * 0.999).abs() < 1e-12);
        assert!((b.max - 1.8).abs() < 1e-12);
    }

    #[test]
    fn small_zoom_factor_pulls_minimum_down() {
        let image = ImageDimensions::new(100.0, 100.0).unwrap();
        let bounds = ContainerBounds::new(200.0, 200.0).unwrap();
        let mut p = policy(FitMode::AspectFit);
        p.max_scale_from_min = 0.5;
        let b = resolve_scale_bounds(image, bounds, &p).unwrap();
        assert_eq!(b.max, 1.0);
        assert_eq!(b.min, 1.0);
    }

    #[test]
    fn overflowing_ratio_is_rejected() {
        let image = ImageDimensions::new(1e-300, 1e-300).unwrap();
        let bounds = ContainerBounds::new(1e10, 1e10).unwrap();
        let err = resolve_scale_bounds(image, bounds, &policy(FitMode::AspectFill)).unwrap_err();
        assert!(matches!(err, Error::DegenerateImage { .. }));
    }

    #[test]
    fn underflowing_ratio_is_rejected() {
        let image = ImageDimensions::new(1e300, 1e300).unwrap();
        let bounds = ContainerBounds::new(1e-300, 1e-300).unwrap();
        let err = resolve_scale_bounds(image, bounds, &policy(FitMode::AspectFit)).unwrap_err();
        assert!(matches!(err, Error::DegenerateImage { .. }));
    }

    #[test]
    fn hand_built_policy_is_checked() {
        let image = ImageDimensions::new(100.0, 100.0).unwrap();
        let bounds = ContainerBounds::new(200.0, 200.0).unwrap();
        let mut p = policy(FitMode::AspectFit);
        p.max_scale_from_min = 0.0;
        assert!(matches!(
            resolve_scale_bounds(image, bounds, &p),
            Err(Error::InvalidConfig(_))
        ));
        let mut p = policy(FitMode::AspectFit);
        p.min_scale_slack = 0.0;
        assert!(matches!(
            resolve_scale_bounds(image, bounds, &p),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn clamp_respects_range() {
        let b = ScaleBounds { min: 0.5, max: 1.5 };
        assert_eq!(b.clamp(0.1), 0.5);
        assert_eq!(b.clamp(9.0), 1.5);
        assert_eq!(b.clamp(1.0), 1.0);
    }
}
