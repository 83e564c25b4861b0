//! Shared helpers for WASM API operations
//!
//! Serialization to JavaScript values with error logging.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::renderers::svg::RenderError;

/// Serialize a value to JavaScript, logging and wrapping any failure
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let err = RenderError::Serialization(format!("{}: {}", error_context, e));
        log::error!("{}", err);
        JsValue::from(err)
    })
}

/// Serialize a value to JSON text, logging and wrapping any failure
pub fn to_json<T: Serialize>(value: &T, error_context: &str) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| {
        let err = RenderError::Serialization(format!("{}: {}", error_context, e));
        log::error!("{}", err);
        JsValue::from(err)
    })
}

/// Log a render error and hand it back as a JS value
pub fn report(err: RenderError) -> JsValue {
    log::error!("{}", err);
    JsValue::from(err)
}
