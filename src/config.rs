use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// How the minimum zoom scale is derived from image and container geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// Cover the container; the image may overflow on one axis.
    AspectFill,
    /// Show the whole image; the container may letterbox on one axis.
    AspectFit,
    WidthFill,
    HeightFill,
}

/// Where the view lands when a new image is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OffsetMode {
    Beginning,
    Center,
}

impl FitMode {
    fn as_str(&self) -> &'static str {
        match self {
            Self::AspectFill => "aspect-fill",
            Self::AspectFit => "aspect-fit",
            Self::WidthFill => "width-fill",
            Self::HeightFill => "height-fill",
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for FitMode {
    fn default() -> Self {
        Self::AspectFill
    }
}

impl Default for OffsetMode {
    fn default() -> Self {
        Self::Beginning
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ViewportConfig {
    /// Policy for the minimum zoom scale.
    pub fit_mode: FitMode,
    /// Placement of a freshly displayed image.
    pub initial_offset: OffsetMode,
    /// Maximum scale as a multiple of the minimum scale. Below 1.0 the
    /// minimum is pulled down to the maximum.
    pub max_scale_from_min: f64,
    /// Target scale of a zoom-in tap, as a multiple of the minimum scale.
    pub zoom_in_factor: f64,
    /// Factor applied to the minimum scale after derivation. Values below 1.0
    /// keep the resting scale strictly above the minimum, which paged hosts
    /// need to keep their own swipe gestures working. 1.0 disables it.
    pub min_scale_slack: f64,
    /// Number of taps that toggles zoom.
    pub zoom_gesture_taps: u32,
}

impl ViewportConfig {
    const fn default_max_scale_from_min() -> f64 {
        3.0
    }

    const fn default_zoom_in_factor() -> f64 {
        2.0
    }

    const fn default_min_scale_slack() -> f64 {
        0.999
    }

    const fn default_zoom_gesture_taps() -> u32 {
        2
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure(
            self.max_scale_from_min.is_finite() && self.max_scale_from_min > 0.0,
            "max-scale-from-min must be a finite positive value",
        )?;
        ensure(
            self.zoom_in_factor.is_finite() && self.zoom_in_factor > 0.0,
            "zoom-in-factor must be a finite positive value",
        )?;
        ensure(
            self.min_scale_slack > 0.0 && self.min_scale_slack <= 1.0,
            "min-scale-slack must be in (0, 1]",
        )?;
        ensure(
            self.zoom_gesture_taps >= 1,
            "zoom-gesture-taps must be at least 1",
        )?;
        Ok(self)
    }
}

fn ensure(condition: bool, msg: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidConfig(msg.to_string()))
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            fit_mode: FitMode::default(),
            initial_offset: OffsetMode::default(),
            max_scale_from_min: Self::default_max_scale_from_min(),
            zoom_in_factor: Self::default_zoom_in_factor(),
            min_scale_slack: Self::default_min_scale_slack(),
            zoom_gesture_taps: Self::default_zoom_gesture_taps(),
        }
    }
}
