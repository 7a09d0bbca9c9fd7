//! Resolving the circular guide to a square region of the original image.
//!
//! The guide is drawn at a fixed place on screen, over an image that is laid
//! out in cover mode and then panned/zoomed by the user. Finding what it
//! covers means walking back through each space in turn:
//!
//! 1. screen space (the container, guide centered in it)
//! 2. component space (undo the user's pan and zoom)
//! 3. displayed-image space (undo the cover-mode offset)
//! 4. original-image space (multiply by the cover-mode scale factor)
//!
//! The resulting square is then clamped into the image and rounded to whole
//! pixels.

use super::cover::calculate_cover_mode_display;
use super::types::{
    CropCalculationParams, CropCalculationResult, CropError, CropRegion, Point,
};

/// Calculate the region of the original image under the circular crop guide.
///
/// # Arguments
///
/// * `params` - Image size, container and guide sizes, and the user's pan/zoom
///
/// # Returns
///
/// The clamped, rounded square region together with the cover-mode display
/// size, offset, and scale factor that were used to compute it.
///
/// # Behavior
///
/// - Never fails; inputs are assumed to satisfy
///   [`CropCalculationParams::validate`]
/// - With no pan or zoom the region is centered on the image
/// - Panning the image left (negative `translate_x`) moves the region right
/// - Region side length is proportional to `1 / scale`
/// - Regions that would leave the image are pulled back inside, and shrunk
///   (staying square) when the image is too small to hold them
pub fn calculate_crop_region(params: &CropCalculationParams) -> CropCalculationResult {
    let image = params.original_image;
    let transforms = params.user_transforms;
    let display = calculate_cover_mode_display(image.width, image.height, params.container_size);

    // Guide and component are both centered in the container
    let circle_center = Point::new(params.container_size / 2.0, params.container_size / 2.0);
    let component_center = Point::new(params.container_size / 2.0, params.container_size / 2.0);
    let circle_rel = Point::new(
        circle_center.x - component_center.x,
        circle_center.y - component_center.y,
    );

    let local = transforms.to_local(circle_rel);

    // Position of the guide center on the displayed (cover-scaled) image
    let image_x = component_center.x + local.x - display.offset_x;
    let image_y = component_center.y + local.y - display.offset_y;
    let circle_radius = params.circle_size / 2.0 / transforms.scale;

    let crop_center = Point::new(image_x * display.scale_factor, image_y * display.scale_factor);
    let crop_radius = circle_radius * display.scale_factor;

    let crop_region = clamp_square(
        crop_center.x - crop_radius,
        crop_center.y - crop_radius,
        crop_radius * 2.0,
        image.width,
        image.height,
    );

    log::debug!(
        "crop: image={}x{} display={:.1}x{:.1} offset=({:.1}, {:.1}) transforms=({:.3}, {:.1}, {:.1}) center=({:.1}, {:.1}) radius={:.1} region={:?}",
        image.width,
        image.height,
        display.display_width,
        display.display_height,
        display.offset_x,
        display.offset_y,
        transforms.scale,
        transforms.translate_x,
        transforms.translate_y,
        crop_center.x,
        crop_center.y,
        crop_radius,
        crop_region,
    );

    CropCalculationResult {
        crop_region,
        display_size: display.display_size(),
        offset: display.offset(),
        scale_factor: display.scale_factor,
    }
}

/// Validate `params` and then calculate the crop region.
///
/// # Errors
///
/// Returns the first [`CropError`] reported by
/// [`CropCalculationParams::validate`].
pub fn try_calculate_crop_region(
    params: &CropCalculationParams,
) -> Result<CropCalculationResult, CropError> {
    if let Err(e) = params.validate() {
        log::warn!("rejected crop parameters: {}", e);
        return Err(e);
    }
    Ok(calculate_crop_region(params))
}

/// Clamp a candidate square into the image and round it to whole pixels.
///
/// The origin is first pulled inside `[0, image_dim - size]`; if the image is
/// smaller than the square, the side shrinks to the smaller remaining extent
/// so the result stays square.
fn clamp_square(x: f64, y: f64, size: f64, image_width: f64, image_height: f64) -> CropRegion {
    let x = x.max(0.0);
    let y = y.max(0.0);
    let x = x.min(image_width - size).max(0.0);
    let y = y.min(image_height - size).max(0.0);
    let size = size.min(image_width - x).min(image_height - y);

    // Rounding each value independently can overshoot the far edge by a pixel;
    // a fractional image size only holds whole pixels up to its floor
    let bound_w = image_width.floor().max(1.0) as u32;
    let bound_h = image_height.floor().max(1.0) as u32;
    let origin_x = (x.round() as u32).min(bound_w - 1);
    let origin_y = (y.round() as u32).min(bound_h - 1);
    let side = (size.round() as u32)
        .max(1)
        .min(bound_w - origin_x)
        .min(bound_h - origin_y);

    CropRegion {
        origin_x,
        origin_y,
        width: side,
        height: side,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
