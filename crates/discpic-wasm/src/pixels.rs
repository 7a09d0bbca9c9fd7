//! WASM bindings for cutting and downsizing crops.
//!
//! For hosts that hold decoded RGB data in memory. Hosts that use a native
//! image manipulator only need the region from `calculate_crop_region`.

use crate::crop::{config_from_js, params_from_js};
use crate::types::JsPixelBuffer;
use discpic_core::crop::CropRegion;
use discpic_core::pipeline;
use discpic_core::pixels::{self, FilterType};
use wasm_bindgen::prelude::*;

/// Copy a `{ originX, originY, width, height }` region out of an image.
///
/// # Errors
/// Throws if the region is malformed, empty, or outside the image.
#[wasm_bindgen]
pub fn crop_image(image: &JsPixelBuffer, region: JsValue) -> Result<JsPixelBuffer, JsValue> {
    let region: CropRegion = serde_wasm_bindgen::from_value(region)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop region: {}", e)))?;
    pixels::extract_region(image.buffer(), &region)
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Downsize an image so its longest side is at most `max_dimension`.
///
/// `filter`: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3 (others = Bilinear).
#[wasm_bindgen]
pub fn resize_to_max_dimension(
    image: &JsPixelBuffer,
    max_dimension: u32,
    filter: u8,
) -> Result<JsPixelBuffer, JsValue> {
    pixels::resize_to_max_dimension(image.buffer(), max_dimension, FilterType::from(filter))
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resolve, cut, and downsize in one call.
///
/// `params` has the `calculate_crop_region` shape; `config` may be omitted.
#[wasm_bindgen]
pub fn crop_circle_photo(
    image: &JsPixelBuffer,
    params: JsValue,
    config: JsValue,
) -> Result<JsPixelBuffer, JsValue> {
    let params = params_from_js(params)?;
    let config = config_from_js(config)?;
    pipeline::crop_circle_photo(image.buffer(), &params, &config)
        .map(|photo| JsPixelBuffer::from_buffer(photo.image))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use discpic_core::{CropCalculationParams, CropTransforms, ImageDimensions};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_image(width: u32, height: u32) -> JsPixelBuffer {
        let pixels: Vec<u8> = (0..(width * height * 3) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsPixelBuffer::new(width, height, pixels).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_crop_image_region() {
        let img = test_image(100, 80);
        let region = serde_wasm_bindgen::to_value(&CropRegion {
            origin_x: 10,
            origin_y: 5,
            width: 40,
            height: 40,
        })
        .unwrap();

        let result = crop_image(&img, region).unwrap();
        assert_eq!(result.width(), 40);
        assert_eq!(result.height(), 40);
    }

    #[wasm_bindgen_test]
    fn test_crop_image_out_of_bounds() {
        let img = test_image(50, 50);
        let region = serde_wasm_bindgen::to_value(&CropRegion {
            origin_x: 30,
            origin_y: 30,
            width: 40,
            height: 40,
        })
        .unwrap();

        assert!(crop_image(&img, region).is_err());
    }

    #[wasm_bindgen_test]
    fn test_resize_to_max_dimension() {
        let img = test_image(200, 100);
        let result = resize_to_max_dimension(&img, 50, 1).unwrap();
        assert_eq!(result.width(), 50);
        assert_eq!(result.height(), 25);
    }

    #[wasm_bindgen_test]
    fn test_crop_circle_photo() {
        let img = test_image(600, 400);
        let params = serde_wasm_bindgen::to_value(&CropCalculationParams {
            original_image: ImageDimensions::new(600.0, 400.0),
            container_size: 300.0,
            circle_size: 210.0,
            user_transforms: CropTransforms::identity(),
        })
        .unwrap();

        let result = crop_circle_photo(&img, params, JsValue::UNDEFINED).unwrap();
        assert_eq!(result.width(), 280);
        assert_eq!(result.height(), 280);
    }
}
