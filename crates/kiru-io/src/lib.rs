//! kiru-io: Browser I/O and Dioxus component library.
//!
//! Handles file uploads, Blob downloads, raster image encoding, and
//! provides the reusable UI components for the kiru web application.

pub mod components;
pub mod download;
pub mod raster;

pub use components::{
    ExportPanel, FileUpload, HistogramPanel, MethodControls, SegmentPreview, ThresholdReadout,
};
