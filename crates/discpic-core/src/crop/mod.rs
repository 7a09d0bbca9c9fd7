//! Circular crop geometry.
//!
//! The crop screen shows the photo in a square container with cover scaling,
//! lets the user pan and zoom it, and draws a fixed circular guide in the
//! middle. This module turns that on-screen state into the square region of
//! the original photo that the guide covers.
//!
//! # Coordinate System
//!
//! - Container, guide, and pan values are in screen pixels
//! - Zoom is applied around the center of the container
//! - Crop regions are in original-image pixels, origin top-left
//!
//! # Example
//!
//! ```ignore
//! let result = calculate_crop_region(&CropCalculationParams {
//!     original_image: ImageDimensions::new(3024.0, 4032.0),
//!     container_size: 393.0,
//!     circle_size: 275.1,
//!     user_transforms: CropTransforms::identity(),
//! });
//! // result.crop_region is centered on (1512, 2016)
//! ```

mod cover;
mod region;
mod types;

pub use cover::calculate_cover_mode_display;
pub use region::{calculate_crop_region, try_calculate_crop_region};
pub use types::{
    CoverModeDisplay, CropCalculationParams, CropCalculationResult, CropError, CropRegion,
    CropTransforms, ImageDimensions, Point,
};
