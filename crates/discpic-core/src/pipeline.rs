//! The full confirm-crop path: geometry, extraction, and downsizing.

use thiserror::Error;

use crate::config::CropGuideConfig;
use crate::crop::{calculate_crop_region, CropCalculationParams, CropError, CropRegion};
use crate::pixels::{extract_region, resize_to_max_dimension, FilterType, PixelBuffer, PixelError};

/// Errors from [`crop_circle_photo`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CropPhotoError {
    #[error(transparent)]
    Crop(#[from] CropError),

    #[error(transparent)]
    Pixels(#[from] PixelError),
}

/// A saved crop and the region it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct CroppedPhoto {
    /// Region of the source image that was kept.
    pub region: CropRegion,
    /// Cropped (and possibly downsized) pixels.
    pub image: PixelBuffer,
}

/// Crop a photo to what the circular guide covers.
///
/// Validates the config and params, checks the buffer is the image the crop
/// was computed for, resolves the region, cuts it out, and caps the result at
/// `config.max_output_dimension` using Lanczos3.
///
/// # Errors
///
/// - [`CropPhotoError::Crop`] for invalid config or params
/// - [`CropPhotoError::Pixels`] if the buffer's size differs from
///   `params.original_image`
pub fn crop_circle_photo(
    image: &PixelBuffer,
    params: &CropCalculationParams,
    config: &CropGuideConfig,
) -> Result<CroppedPhoto, CropPhotoError> {
    config.validate()?;
    params.validate()?;

    let expected_width = params.original_image.width.round() as u32;
    let expected_height = params.original_image.height.round() as u32;
    if (expected_width, expected_height) != image.dimensions() {
        return Err(PixelError::DimensionMismatch {
            expected_width,
            expected_height,
            actual_width: image.width,
            actual_height: image.height,
        }
        .into());
    }

    let result = calculate_crop_region(params);
    let cropped = extract_region(image, &result.crop_region)?;
    let output = resize_to_max_dimension(&cropped, config.max_output_dimension, FilterType::Lanczos3)?;

    log::info!(
        "cropped {}x{} photo to {}x{} (region {:?})",
        image.width,
        image.height,
        output.width,
        output.height,
        result.crop_region
    );

    Ok(CroppedPhoto {
        region: result.crop_region,
        image: output,
    })
}
