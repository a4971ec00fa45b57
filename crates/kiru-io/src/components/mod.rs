//! Dioxus UI components for kiru.
//!
//! Provides the file upload zone, segmentation method controls, the
//! active-threshold readout, the intensity histogram panel, the
//! side-by-side preview, and the export panel.

mod controls;
mod export;
mod histogram;
mod preview;
mod readout;
mod upload;

pub use controls::MethodControls;
pub use export::ExportPanel;
pub use histogram::HistogramPanel;
pub use preview::SegmentPreview;
pub use readout::ThresholdReadout;
pub use upload::FileUpload;
