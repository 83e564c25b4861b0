//! Icon WASM API
//!
//! This module provides the JavaScript-facing API for the icon components.
//!
//! - `helpers`: serialization and error reporting at the JS boundary
//! - `icons`: per-icon exports

pub mod helpers;
pub mod icons;

pub use icons::{arrow_dropup_json, arrow_dropup_markup, arrow_dropup_tree, mount_arrow_dropup};
