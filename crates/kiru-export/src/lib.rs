//! kiru-export: Pure format serializers (sans-IO)
//!
//! Converts segmentation masks into downloadable file formats.
//! Currently supports PNG.

pub mod png;

pub use png::{PngError, to_png};
