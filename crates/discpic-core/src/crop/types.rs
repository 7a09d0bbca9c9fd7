//! Value types shared by the cover-mode calculator and the crop resolver.
//!
//! Every type serializes with camelCase field names so the JavaScript host
//! can hand over and read back plain objects (`translateX`, `originX`, ...).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for crop parameter validation.
///
/// The calculators themselves never fail; these are produced only by
/// [`CropCalculationParams::validate`] and the config layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CropError {
    /// Image width or height is zero, negative, or not finite.
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// Container size is zero, negative, or not finite.
    #[error("Invalid container size: {0}")]
    InvalidContainer(f64),

    /// Circle guide size is zero, negative, or not finite.
    #[error("Invalid crop guide size: {0}")]
    InvalidCircle(f64),

    /// Zoom factor is zero, negative, or not finite.
    #[error("Invalid zoom scale: {0}")]
    InvalidScale(f64),

    /// A pan offset or config value is NaN or infinite.
    #[error("Non-finite value for {0}")]
    NonFiniteInput(&'static str),

    /// The circular guide does not fit inside the square container.
    #[error("Crop guide ({circle_size}) is larger than its container ({container_size})")]
    GuideExceedsContainer {
        circle_size: f64,
        container_size: f64,
    },
}

/// Natural or displayed size of an image.
///
/// Source images carry whole pixel counts, but displayed sizes produced by
/// cover-mode scaling are fractional, so both axes are `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: f64,
    pub height: f64,
}

impl ImageDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// True when both axes are positive and finite.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl From<(u32, u32)> for ImageDimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

/// A point or offset in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pan/zoom state captured from the crop gesture.
///
/// `scale` zooms around the center of the displayed image component and
/// the translation is applied after scaling, both in screen pixels:
///
/// ```text
/// screen = origin + scale * local + translate
/// ```
///
/// [`to_screen`](Self::to_screen) and [`to_local`](Self::to_local) are the
/// forward and inverse halves of that mapping, with points expressed relative
/// to the transform origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropTransforms {
    /// Multiplicative zoom factor (must be > 0).
    pub scale: f64,
    /// Horizontal pan in screen pixels (positive = image moved right).
    pub translate_x: f64,
    /// Vertical pan in screen pixels (positive = image moved down).
    pub translate_y: f64,
}

impl Default for CropTransforms {
    fn default() -> Self {
        Self::identity()
    }
}

impl CropTransforms {
    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    /// No zoom and no pan.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Map a point in the untransformed component space to where it is drawn
    /// on screen.
    pub fn to_screen(&self, local: Point) -> Point {
        Point {
            x: local.x * self.scale + self.translate_x,
            y: local.y * self.scale + self.translate_y,
        }
    }

    /// Map an on-screen point back into the untransformed component space.
    pub fn to_local(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.translate_x) / self.scale,
            y: (screen.y - self.translate_y) / self.scale,
        }
    }
}

/// Square region of the original image, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRegion {
    pub origin_x: u32,
    pub origin_y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Center of the region in original-image pixels.
    pub fn center(&self) -> Point {
        Point {
            x: self.origin_x as f64 + self.width as f64 / 2.0,
            y: self.origin_y as f64 + self.height as f64 / 2.0,
        }
    }

    /// Check the region lies fully inside an image of the given size.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.origin_x as u64 + self.width as u64 <= image_width as u64
            && self.origin_y as u64 + self.height as u64 <= image_height as u64
    }
}

/// Complete input for [`calculate_crop_region`](super::calculate_crop_region).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropCalculationParams {
    /// Natural pixel size of the source image.
    pub original_image: ImageDimensions,
    /// Side of the square on-screen component showing the image.
    pub container_size: f64,
    /// Diameter of the centered circular guide, in the same units.
    pub circle_size: f64,
    /// Pan/zoom applied by the user.
    #[serde(default)]
    pub user_transforms: CropTransforms,
}

impl CropCalculationParams {
    /// Check every precondition the calculators rely on.
    ///
    /// The calculators do not call this; it is the caller's guard against
    /// host input that would produce meaningless geometry.
    pub fn validate(&self) -> Result<(), CropError> {
        if !self.original_image.is_valid() {
            return Err(CropError::InvalidDimensions {
                width: self.original_image.width,
                height: self.original_image.height,
            });
        }
        if !(self.container_size.is_finite() && self.container_size > 0.0) {
            return Err(CropError::InvalidContainer(self.container_size));
        }
        if !(self.circle_size.is_finite() && self.circle_size > 0.0) {
            return Err(CropError::InvalidCircle(self.circle_size));
        }
        if self.circle_size > self.container_size {
            return Err(CropError::GuideExceedsContainer {
                circle_size: self.circle_size,
                container_size: self.container_size,
            });
        }

        let t = &self.user_transforms;
        if !(t.scale.is_finite() && t.scale > 0.0) {
            return Err(CropError::InvalidScale(t.scale));
        }
        if !t.translate_x.is_finite() {
            return Err(CropError::NonFiniteInput("translateX"));
        }
        if !t.translate_y.is_finite() {
            return Err(CropError::NonFiniteInput("translateY"));
        }
        Ok(())
    }
}

/// How a cover-mode image sits inside its square container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverModeDisplay {
    pub display_width: f64,
    pub display_height: f64,
    /// Left edge of the image relative to the container (<= 0).
    pub offset_x: f64,
    /// Top edge of the image relative to the container (<= 0).
    pub offset_y: f64,
    /// Source pixels per displayed pixel.
    pub scale_factor: f64,
}

impl CoverModeDisplay {
    pub fn display_size(&self) -> ImageDimensions {
        ImageDimensions::new(self.display_width, self.display_height)
    }

    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }
}

/// Resolved crop plus the intermediate cover-mode geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropCalculationResult {
    pub crop_region: CropRegion,
    pub display_size: ImageDimensions,
    pub offset: Point,
    pub scale_factor: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> CropCalculationParams {
        CropCalculationParams {
            original_image: ImageDimensions::new(3024.0, 4032.0),
            container_size: 393.0,
            circle_size: 275.0,
            user_transforms: CropTransforms::identity(),
        }
    }

    #[test]
    fn test_transforms_round_trip() {
        let t = CropTransforms::new(2.5, -40.0, 17.0);
        let local = Point::new(12.0, -30.0);
        let back = t.to_local(t.to_screen(local));

        assert!((back.x - local.x).abs() < 1e-9);
        assert!((back.y - local.y).abs() < 1e-9);
    }

    #[test]
    fn test_to_local_sign() {
        // Image dragged left: the screen center now shows content right of center
        let t = CropTransforms::new(1.0, -50.0, 0.0);
        let local = t.to_local(Point::default());
        assert_eq!(local.x, 50.0);
        assert_eq!(local.y, 0.0);
    }

    #[test]
    fn test_identity_is_default() {
        assert_eq!(CropTransforms::default(), CropTransforms::identity());
    }

    #[test]
    fn test_validate_accepts_valid_params() {
        assert_eq!(valid_params().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_dimensions() {
        let mut params = valid_params();
        params.original_image.width = 0.0;
        assert!(matches!(
            params.validate(),
            Err(CropError::InvalidDimensions { .. })
        ));

        params.original_image.width = f64::NAN;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        let mut params = valid_params();
        params.user_transforms.scale = 0.0;
        assert_eq!(params.validate(), Err(CropError::InvalidScale(0.0)));

        params.user_transforms.scale = -1.0;
        assert_eq!(params.validate(), Err(CropError::InvalidScale(-1.0)));
    }

    #[test]
    fn test_validate_rejects_non_finite_pan() {
        let mut params = valid_params();
        params.user_transforms.translate_y = f64::INFINITY;
        assert_eq!(
            params.validate(),
            Err(CropError::NonFiniteInput("translateY"))
        );
    }

    #[test]
    fn test_validate_rejects_oversized_guide() {
        let mut params = valid_params();
        params.circle_size = 400.0;
        assert_eq!(
            params.validate(),
            Err(CropError::GuideExceedsContainer {
                circle_size: 400.0,
                container_size: 393.0,
            })
        );
    }

    #[test]
    fn test_validate_accepts_guide_equal_to_container() {
        let mut params = valid_params();
        params.circle_size = params.container_size;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_crop_region_fits_within() {
        let region = CropRegion {
            origin_x: 10,
            origin_y: 10,
            width: 90,
            height: 90,
        };
        assert!(region.fits_within(100, 100));
        assert!(!region.fits_within(99, 100));
        assert_eq!(region.center(), Point::new(55.0, 55.0));
    }

    #[test]
    fn test_params_camel_case_json() {
        let json = r#"{
            "originalImage": { "width": 2000, "height": 1000 },
            "containerSize": 400,
            "circleSize": 280,
            "userTransforms": { "scale": 1.5, "translateX": -10, "translateY": 4 }
        }"#;
        let params: CropCalculationParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.original_image.width, 2000.0);
        assert_eq!(params.user_transforms.scale, 1.5);
        assert_eq!(params.user_transforms.translate_x, -10.0);
    }

    #[test]
    fn test_params_missing_transforms_defaults_to_identity() {
        let json = r#"{
            "originalImage": { "width": 2000, "height": 1000 },
            "containerSize": 400,
            "circleSize": 280
        }"#;
        let params: CropCalculationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.user_transforms, CropTransforms::identity());
    }

    #[test]
    fn test_crop_error_display() {
        let err = CropError::InvalidScale(0.0);
        assert_eq!(err.to_string(), "Invalid zoom scale: 0");

        let err = CropError::GuideExceedsContainer {
            circle_size: 500.0,
            container_size: 400.0,
        };
        assert_eq!(
            err.to_string(),
            "Crop guide (500) is larger than its container (400)"
        );
    }
}
