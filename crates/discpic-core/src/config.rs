//! Crop screen configuration.
//!
//! Holds the layout and gesture limits the crop screen is built with. The
//! host can override any subset of fields; missing fields take the defaults
//! below.

use serde::{Deserialize, Serialize};

use crate::crop::{CropCalculationParams, CropError, CropTransforms, ImageDimensions};

/// Guide diameter as a fraction of the container side.
pub const DEFAULT_CIRCLE_RATIO: f64 = 0.7;
/// Smallest zoom the pinch gesture allows.
pub const DEFAULT_MIN_SCALE: f64 = 1.0;
/// Largest zoom the pinch gesture allows.
pub const DEFAULT_MAX_SCALE: f64 = 3.0;
/// Longest side of a saved crop, in pixels.
pub const DEFAULT_MAX_OUTPUT_DIMENSION: u32 = 1920;

/// Layout and limits for the circular crop screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropGuideConfig {
    /// Guide diameter as a fraction of the container (0 to 1]
    pub circle_ratio: f64,
    /// Minimum zoom scale
    pub min_scale: f64,
    /// Maximum zoom scale
    pub max_scale: f64,
    /// Longest edge of the output image
    pub max_output_dimension: u32,
}

impl Default for CropGuideConfig {
    fn default() -> Self {
        Self {
            circle_ratio: DEFAULT_CIRCLE_RATIO,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            max_output_dimension: DEFAULT_MAX_OUTPUT_DIMENSION,
        }
    }
}

impl CropGuideConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the config describes a usable crop screen.
    pub fn validate(&self) -> Result<(), CropError> {
        if !self.circle_ratio.is_finite() {
            return Err(CropError::NonFiniteInput("circleRatio"));
        }
        if self.circle_ratio <= 0.0 {
            return Err(CropError::InvalidCircle(self.circle_ratio));
        }
        if self.circle_ratio > 1.0 {
            return Err(CropError::GuideExceedsContainer {
                circle_size: self.circle_ratio,
                container_size: 1.0,
            });
        }
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(CropError::InvalidScale(self.min_scale));
        }
        if !(self.max_scale.is_finite() && self.max_scale >= self.min_scale) {
            return Err(CropError::InvalidScale(self.max_scale));
        }
        if self.max_output_dimension == 0 {
            return Err(CropError::InvalidDimensions {
                width: 0.0,
                height: 0.0,
            });
        }
        Ok(())
    }

    /// Guide diameter for a container of the given side.
    pub fn circle_size(&self, container_size: f64) -> f64 {
        container_size * self.circle_ratio
    }

    /// Clamp the zoom into `[min_scale, max_scale]`, leaving the pan alone.
    ///
    /// An inverted range resolves to `max_scale`; a NaN bound is ignored.
    pub fn clamp_transforms(&self, transforms: CropTransforms) -> CropTransforms {
        CropTransforms {
            scale: transforms.scale.max(self.min_scale).min(self.max_scale),
            ..transforms
        }
    }

    /// Build calculation params for a container of the given side.
    ///
    /// The guide is sized from `circle_ratio` and the zoom is clamped to the
    /// configured range.
    pub fn params(
        &self,
        original_image: ImageDimensions,
        container_size: f64,
        transforms: CropTransforms,
    ) -> CropCalculationParams {
        CropCalculationParams {
            original_image,
            container_size,
            circle_size: self.circle_size(container_size),
            user_transforms: self.clamp_transforms(transforms),
        }
    }
}
