//! Icon components
//!
//! Each icon is a zero-argument function returning its fixed markup tree.

pub mod arrow_dropup;

pub use arrow_dropup::arrow_dropup;
