//! Pixel operations for saving a crop.
//!
//! Once the crop region is known, the host can either hand it to a native
//! image manipulator or run it through here: cut the region out of an
//! in-memory RGB buffer and cap its size. Decoding and encoding are the
//! host's job.

mod extract;
mod resize;
mod types;

pub use extract::extract_region;
pub use resize::{calculate_resize_dimensions, resize_to_max_dimension};
pub use types::{FilterType, PixelBuffer, PixelError};
