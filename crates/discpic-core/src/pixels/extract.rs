//! Copying a crop region out of a pixel buffer.
//!
//! Regions from the crop resolver are already clamped to the image, so an
//! out-of-bounds region here means it was computed for a different image and
//! is reported rather than silently clamped again.

use super::{PixelBuffer, PixelError};
use crate::crop::CropRegion;

/// Copy the pixels of `region` into a new buffer.
///
/// # Errors
///
/// - [`PixelError::EmptyRegion`] if the region has zero width or height
/// - [`PixelError::RegionOutOfBounds`] if any part lies outside the image
pub fn extract_region(image: &PixelBuffer, region: &CropRegion) -> Result<PixelBuffer, PixelError> {
    if region.width == 0 || region.height == 0 {
        return Err(PixelError::EmptyRegion);
    }
    if !region.fits_within(image.width, image.height) {
        return Err(PixelError::RegionOutOfBounds {
            origin_x: region.origin_x,
            origin_y: region.origin_y,
            width: region.width,
            height: region.height,
            image_width: image.width,
            image_height: image.height,
        });
    }

    // Full-image region: nothing to cut
    if region.origin_x == 0
        && region.origin_y == 0
        && region.width == image.width
        && region.height == image.height
    {
        return Ok(image.clone());
    }

    let src_stride = image.width as usize * 3;
    let row_len = region.width as usize * 3;
    let mut output = Vec::with_capacity(row_len * region.height as usize);

    for y in region.origin_y..region.origin_y + region.height {
        let start = y as usize * src_stride + region.origin_x as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    Ok(PixelBuffer {
        width: region.width,
        height: region.height,
        pixels: output,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
