//! Renderers module
//!
//! Output formats for icon markup trees.

pub mod svg;
