//! discpic WASM - WebAssembly bindings for discpic
//!
//! This crate exposes the discpic-core crop geometry to the mobile app's
//! JavaScript layer.
//!
//! # Module Structure
//!
//! - `crop` - Cover-mode layout, crop region resolution, crop screen config
//! - `pixels` - Cutting and downsizing crops held in memory
//! - `types` - WASM-compatible wrapper for RGB pixel buffers
//! - `logger` - Routes `log` output to the JS console
//!
//! # Usage
//!
//! ```typescript
//! import init, { calculate_crop_region, set_log_level } from '@discpic/wasm';
//!
//! await init();
//! set_log_level('debug');
//!
//! const { cropRegion } = calculate_crop_region(params);
//! await manipulateAsync(uri, [{ crop: cropRegion }]);
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod logger;
mod pixels;
mod types;

// Re-export public types
pub use crop::{
    calculate_cover_mode_display, calculate_crop_region, crop_params_for_screen,
    default_crop_config,
};
pub use pixels::{crop_circle_photo, crop_image, resize_to_max_dimension};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(log::LevelFilter::Warn);
}

/// Set how much crop diagnostics reach the console.
///
/// Accepts `off`, `error`, `warn`, `info`, `debug`, or `trace`.
///
/// # Errors
/// Throws on an unknown level name.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logger::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    logger::install(filter);
    log::set_max_level(filter);
    Ok(())
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
