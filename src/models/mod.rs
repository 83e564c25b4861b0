//! Data models for icon markup

pub mod svg;

pub use svg::*;
