//! Crop geometry WASM bindings.
//!
//! All inputs and outputs are plain JS objects with camelCase fields, the
//! same shapes the crop screen already works with.
//!
//! # Example
//!
//! ```typescript
//! import { calculate_crop_region } from '@discpic/wasm';
//!
//! const { cropRegion } = calculate_crop_region({
//!   originalImage: { width: 3024, height: 4032 },
//!   containerSize: 393,
//!   circleSize: 275.1,
//!   userTransforms: { scale: 1, translateX: 0, translateY: 0 },
//! });
//! ```

use discpic_core::crop::{self, CropCalculationParams, CropTransforms, ImageDimensions};
use discpic_core::CropGuideConfig;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read an optional config object; `undefined`/`null` means defaults.
pub(crate) fn config_from_js(config: JsValue) -> Result<CropGuideConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(CropGuideConfig::default());
    }
    let config: CropGuideConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop config: {}", e)))?;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

pub(crate) fn params_from_js(params: JsValue) -> Result<CropCalculationParams, JsValue> {
    serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop parameters: {}", e)))
}

/// Cover-mode layout of an image in a square container.
///
/// Returns `{ displayWidth, displayHeight, offsetX, offsetY, scaleFactor }`.
#[wasm_bindgen]
pub fn calculate_cover_mode_display(
    image_width: f64,
    image_height: f64,
    container_size: f64,
) -> Result<JsValue, JsValue> {
    to_js(&crop::calculate_cover_mode_display(
        image_width,
        image_height,
        container_size,
    ))
}

/// Region of the original image under the circular guide.
///
/// Takes `{ originalImage, containerSize, circleSize, userTransforms }` and
/// returns `{ cropRegion, displaySize, offset, scaleFactor }`.
///
/// # Errors
/// Throws if the object is malformed or fails validation (non-positive
/// sizes, `scale <= 0`, or a guide larger than the container).
#[wasm_bindgen]
pub fn calculate_crop_region(params: JsValue) -> Result<JsValue, JsValue> {
    let params = params_from_js(params)?;
    let result =
        crop::try_calculate_crop_region(&params).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&result)
}

/// Default crop screen configuration.
#[wasm_bindgen]
pub fn default_crop_config() -> Result<JsValue, JsValue> {
    to_js(&CropGuideConfig::default())
}

/// Build crop parameters from the screen layout.
///
/// Sizes the guide from `config.circleRatio` and clamps the zoom into
/// `[config.minScale, config.maxScale]`. `config` may be omitted.
#[wasm_bindgen]
pub fn crop_params_for_screen(
    image_width: f64,
    image_height: f64,
    container_size: f64,
    transforms: JsValue,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let transforms: CropTransforms = if transforms.is_undefined() || transforms.is_null() {
        CropTransforms::identity()
    } else {
        serde_wasm_bindgen::from_value(transforms)
            .map_err(|e| JsValue::from_str(&format!("Invalid transforms: {}", e)))?
    };

    let params = config.params(
        ImageDimensions::new(image_width, image_height),
        container_size,
        transforms,
    );
    to_js(&params)
}
