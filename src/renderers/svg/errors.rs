//! Error types for host-facing rendering
//!
//! Building the icon tree cannot fail; these cover the DOM and JS boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// No global `window` (not running in a browser context)
    #[error("no global window available")]
    NoWindow,

    /// `window.document` is missing
    #[error("window has no document")]
    NoDocument,

    /// A DOM call was rejected
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Converting the tree for JavaScript failed
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl RenderError {
    /// Wrap a rejected DOM call, keeping the JS error text when there is one
    pub fn from_js(context: &str, value: JsValue) -> Self {
        let detail = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        RenderError::Dom(format!("{}: {}", context, detail))
    }
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
