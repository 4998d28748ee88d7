//! WASM bindings for browser-based table generation.
//!
//! This module exposes the conversion pipeline to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{TableConfig, convert};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Convert pasted HTML into a screenshot table with default settings.
///
/// Throws "no images found in input" when the HTML has no usable images.
#[wasm_bindgen]
pub fn html_to_table(html: &str) -> Result<String, JsValue> {
    convert(html, &TableConfig::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert pasted HTML with a custom image width and summary text.
#[wasm_bindgen]
pub fn html_to_table_with(html: &str, image_width: u32, summary: &str) -> Result<String, JsValue> {
    let config = TableConfig::new()
        .with_image_width(image_width)
        .with_summary(summary);
    convert(html, &config).map_err(|e| JsValue::from_str(&e.to_string()))
}
