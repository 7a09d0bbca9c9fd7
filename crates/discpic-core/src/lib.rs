//! discpic Core - circular crop geometry for disc and profile photos
//!
//! This crate provides the pure geometry behind the app's circular crop
//! screen (cover-mode layout and crop region resolution), the configuration
//! the screen is built with, and the pixel operations for saving a crop.

pub mod config;
pub mod crop;
pub mod pipeline;
pub mod pixels;

pub use config::CropGuideConfig;
pub use crop::{
    calculate_cover_mode_display, calculate_crop_region, try_calculate_crop_region,
    CoverModeDisplay, CropCalculationParams, CropCalculationResult, CropError, CropRegion,
    CropTransforms, ImageDimensions, Point,
};
pub use pipeline::{crop_circle_photo, CropPhotoError, CroppedPhoto};
pub use pixels::{FilterType, PixelBuffer, PixelError};
