//! Icon exports
//!
//! JavaScript-facing entry points for the arrow drop-up icon.

use wasm_bindgen::prelude::*;

use super::helpers::{report, serialize, to_json};
use crate::icons::arrow_dropup;
use crate::renderers::svg::{SVGDocumentGenerator, SVGRenderer};

/// Icon tree as a plain JS object `{ tag, attributes, children }`
#[wasm_bindgen(js_name = arrowDropup)]
pub fn arrow_dropup_tree() -> Result<JsValue, JsValue> {
    serialize(&arrow_dropup(), "Failed to serialize arrow drop-up tree")
}

/// Icon markup
#[wasm_bindgen(js_name = arrowDropupMarkup)]
pub fn arrow_dropup_markup() -> String {
    SVGRenderer::render_arrow_dropup()
}

/// Icon tree as JSON text
#[wasm_bindgen(js_name = arrowDropupJson)]
pub fn arrow_dropup_json() -> Result<String, JsValue> {
    to_json(&arrow_dropup(), "Failed to encode arrow drop-up tree")
}

/// Mount the icon under `parent` and return the new `<svg>` element
#[wasm_bindgen(js_name = mountArrowDropup)]
pub fn mount_arrow_dropup(parent: &web_sys::Element) -> Result<web_sys::Element, JsValue> {
    SVGDocumentGenerator::mount(parent, &arrow_dropup()).map_err(report)
}
