//! WASM-compatible wrapper types for pixel data.

use discpic_core::pixels::PixelBuffer;
use wasm_bindgen::prelude::*;

/// An RGB pixel buffer wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out to a
/// `Uint8Array`. `free()` releases the WASM side early; otherwise
/// wasm-bindgen's finalizer handles it.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a buffer from dimensions and RGB data (3 bytes per pixel,
    /// row-major).
    ///
    /// # Errors
    /// Throws if the data length doesn't match `width * height * 3` or a
    /// dimension is zero.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::new(width, height, pixels)
            .map(Self::from_buffer)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns RGB pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelBuffer {
    pub(crate) fn from_buffer(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn buffer(&self) -> &PixelBuffer {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_buffer_accessors() {
        let buf = PixelBuffer::new(100, 50, vec![0u8; 100 * 50 * 3]).unwrap();
        let js = JsPixelBuffer::from_buffer(buf);

        assert_eq!(js.width(), 100);
        assert_eq!(js.height(), 50);
        assert_eq!(js.byte_length(), 15000);
    }

    #[test]
    fn test_pixels_copy() {
        let data = vec![255u8, 128, 64, 32, 16, 8];
        let js = JsPixelBuffer::from_buffer(PixelBuffer::new(2, 1, data.clone()).unwrap());

        assert_eq!(js.pixels(), data);
        assert_eq!(js.buffer().pixels, data);
    }
}
