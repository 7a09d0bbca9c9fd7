//! Downsizing crops before they are saved.
//!
//! Photos from phone cameras are far larger than a profile or disc picture
//! needs. Output is capped on its longest side; smaller images pass through
//! untouched and are never upscaled.

use super::{FilterType, PixelBuffer, PixelError};
use crate::crop::ImageDimensions;

/// Calculate the size that fits `max_dimension` on the longest side.
///
/// Returns `None` when the image already fits, otherwise both sides scaled by
/// `max_dimension / longest_side` and rounded to whole pixels.
pub fn calculate_resize_dimensions(
    width: u32,
    height: u32,
    max_dimension: u32,
) -> Option<ImageDimensions> {
    let longest = width.max(height);
    if longest <= max_dimension {
        return None;
    }

    let scale = max_dimension as f64 / longest as f64;
    Some(ImageDimensions::new(
        (width as f64 * scale).round().max(1.0),
        (height as f64 * scale).round().max(1.0),
    ))
}

/// Resize an image so its longest side is at most `max_dimension`.
///
/// # Errors
///
/// Returns [`PixelError::InvalidDimensions`] if `max_dimension` is zero and
/// [`PixelError::BufferSizeMismatch`] if the buffer is inconsistent.
pub fn resize_to_max_dimension(
    image: &PixelBuffer,
    max_dimension: u32,
    filter: FilterType,
) -> Result<PixelBuffer, PixelError> {
    if max_dimension == 0 {
        return Err(PixelError::InvalidDimensions {
            width: max_dimension,
            height: max_dimension,
        });
    }

    let Some(target) = calculate_resize_dimensions(image.width, image.height, max_dimension) else {
        return Ok(image.clone());
    };

    let rgb_image = image.to_rgb_image().ok_or(PixelError::BufferSizeMismatch {
        expected: (image.width as usize) * (image.height as usize) * 3,
        actual: image.pixels.len(),
    })?;

    let resized = image::imageops::resize(
        &rgb_image,
        target.width as u32,
        target.height as u32,
        filter.to_image_filter(),
    );

    log::debug!(
        "resized {}x{} -> {}x{}",
        image.width,
        image.height,
        resized.width(),
        resized.height()
    );

    Ok(PixelBuffer::from_rgb_image(resized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> PixelBuffer {
        // Simple gradient image for testing
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
            }
        }
        PixelBuffer {
            width,
            height,
            pixels,
        }
    }

    #[test]
    fn test_no_resize_when_within_limit() {
        assert_eq!(calculate_resize_dimensions(1920, 1080, 1920), None);
        assert_eq!(calculate_resize_dimensions(800, 600, 1920), None);
    }

    #[test]
    fn test_resize_dimensions_landscape() {
        let d = calculate_resize_dimensions(4032, 3024, 1920).unwrap();
        assert_eq!(d.width, 1920.0);
        assert_eq!(d.height, 1440.0);
    }

    #[test]
    fn test_resize_dimensions_portrait() {
        let d = calculate_resize_dimensions(3024, 4032, 1920).unwrap();
        assert_eq!(d.width, 1440.0);
        assert_eq!(d.height, 1920.0);
    }

    #[test]
    fn test_resize_dimensions_rounds() {
        // scale = 0.32, 3001 * 0.32 = 960.32
        let d = calculate_resize_dimensions(6000, 3001, 1920).unwrap();
        assert_eq!(d.width, 1920.0);
        assert_eq!(d.height, 960.0);
    }

    #[test]
    fn test_resize_dimensions_thin_strip_keeps_one_pixel() {
        let d = calculate_resize_dimensions(10000, 1, 100).unwrap();
        assert_eq!(d.height, 1.0);
    }

    #[test]
    fn test_resize_square_crop() {
        let img = create_test_image(400, 400);
        let resized = resize_to_max_dimension(&img, 100, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 100);
        assert_eq!(resized.pixels.len(), 100 * 100 * 3);
    }

    #[test]
    fn test_resize_small_image_unchanged() {
        let img = create_test_image(50, 50);
        let resized = resize_to_max_dimension(&img, 100, FilterType::Lanczos3).unwrap();
        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_zero_max_error() {
        let img = create_test_image(50, 50);
        assert!(resize_to_max_dimension(&img, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(120, 60);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize_to_max_dimension(&img, 60, filter).unwrap();
            assert_eq!(resized.width, 60);
            assert_eq!(resized.height, 30);
        }
    }
}
