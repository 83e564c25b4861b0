//! Arrow drop-up icon
//!
//! A 24x24 glyph: a transparent square covering the viewbox, and a small
//! upward-pointing triangle filled with the current text color.

use crate::models::svg::SvgElement;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const VIEW_BOX: &str = "0 0 24 24";
pub const WIDTH_CLASS: &str = "w-5";

/// Transparent background covering the full viewbox
pub const BACKGROUND_PATH: &str = "M0 0h24v24H0z";
pub const BACKGROUND_FILL: &str = "none";

/// The visible triangle
pub const GLYPH_PATH: &str = "M7 14l5-5 5 5z";
pub const GLYPH_FILL: &str = "currentColor";

/// Build the arrow drop-up markup tree.
///
/// Pure and infallible; every call returns an equal tree.
pub fn arrow_dropup() -> SvgElement {
    SvgElement::new("svg")
        .with_attr("xmlns", SVG_NAMESPACE)
        .with_attr("class", WIDTH_CLASS)
        .with_attr("viewBox", VIEW_BOX)
        .with_child(
            SvgElement::new("path")
                .with_attr("d", BACKGROUND_PATH)
                .with_attr("fill", BACKGROUND_FILL),
        )
        .with_child(
            SvgElement::new("path")
                .with_attr("d", GLYPH_PATH)
                .with_attr("fill", GLYPH_FILL),
        )
}
