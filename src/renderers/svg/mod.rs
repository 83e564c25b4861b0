//! SVG rendering output
//!
//! This module turns icon markup trees into SVG text and live DOM nodes.

pub mod elements;
pub mod document;
pub mod errors;

pub use elements::*;
pub use document::*;
pub use errors::RenderError;

use crate::icons::arrow_dropup;

/// SVG markup generator
pub struct SVGRenderer;

impl SVGRenderer {
    /// Markup for the arrow drop-up icon
    pub fn render_arrow_dropup() -> String {
        let markup = SVGElementRenderer::to_markup(&arrow_dropup());
        log::debug!("rendered arrow drop-up markup ({} bytes)", markup.len());
        markup
    }
}
