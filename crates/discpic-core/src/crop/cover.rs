//! Cover-mode layout inside a square container.
//!
//! Cover mode scales the image uniformly until it fills the container. The
//! dimension that fits exactly drives the scale; the other overflows and is
//! centered, so its offset is negative (the image starts before the
//! container's edge).

use super::types::CoverModeDisplay;

/// Calculate how an image is laid out with cover scaling in a square container.
///
/// # Arguments
///
/// * `image_width` - Natural width of the image in pixels (> 0)
/// * `image_height` - Natural height of the image in pixels (> 0)
/// * `container_size` - Side of the square container in screen pixels (> 0)
///
/// # Behavior
///
/// - Landscape (`aspect > 1`): height fits, width overflows horizontally
/// - Portrait or square: width fits, height overflows vertically
/// - `scale_factor` is taken from the fitting dimension
///
/// Inputs are not validated; see
/// [`CropCalculationParams::validate`](super::CropCalculationParams::validate).
pub fn calculate_cover_mode_display(
    image_width: f64,
    image_height: f64,
    container_size: f64,
) -> CoverModeDisplay {
    let aspect = image_width / image_height;

    if aspect > 1.0 {
        // Landscape: fit height, center the horizontal overflow
        let display_height = container_size;
        let display_width = container_size * aspect;
        CoverModeDisplay {
            display_width,
            display_height,
            offset_x: (container_size - display_width) / 2.0,
            offset_y: 0.0,
            scale_factor: image_height / display_height,
        }
    } else {
        // Portrait or square: fit width, center the vertical overflow
        let display_width = container_size;
        let display_height = container_size / aspect;
        CoverModeDisplay {
            display_width,
            display_height,
            offset_x: 0.0,
            offset_y: (container_size - display_height) / 2.0,
            scale_factor: image_width / display_width,
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
