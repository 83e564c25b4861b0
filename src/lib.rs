//! Arrow Drop-Up Icon WASM Module
//!
//! Renders a fixed SVG "arrow drop-up" glyph for a host UI framework, as a
//! markup tree, as SVG text, or as live DOM nodes.

pub mod api;
pub mod icons;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use icons::arrow_dropup;
pub use models::svg::{Attribute, SvgElement};
pub use renderers::svg::{RenderError, SVGRenderer};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Arrow drop-up icon WASM module initialized");
}
