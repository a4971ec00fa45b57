//! Export panel component with the mask download button.

use std::rc::Rc;

use dioxus::prelude::*;
use kiru_segment::StagedSegmentation;

use crate::download;

/// Download filename for the segmented mask.
pub const MASK_FILENAME: &str = "hasil_segmentasi.png";

/// MIME type for the mask download.
const MASK_MIME: &str = "image/png";

/// Props for the [`ExportPanel`] component.
#[derive(Props, Clone)]
pub struct ExportPanelProps {
    /// The segmentation result to export. `None` disables the button.
    /// Wrapped in `Rc` to avoid cloning pixel data on each render.
    result: Option<Rc<StagedSegmentation>>,
}

impl PartialEq for ExportPanelProps {
    fn eq(&self, other: &Self) -> bool {
        match (&self.result, &other.result) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Export panel with a PNG download button for the current mask.
#[component]
pub fn ExportPanel(props: ExportPanelProps) -> Element {
    let has_result = props.result.is_some();
    let mut export_error = use_signal(|| Option::<String>::None);

    // Clear stale export errors when the segmentation result changes.
    let result_present = props.result.is_some();
    use_effect(move || {
        // Subscribe to result_present so this fires on each change.
        let _ = result_present;
        export_error.set(None);
    });

    let png_click = {
        let result = props.result.clone();
        move |_| {
            if let Some(ref res) = result {
                match kiru_export::to_png(&res.mask) {
                    Ok(bytes) => {
                        if let Err(e) = download::trigger_download(&bytes, MASK_FILENAME, MASK_MIME)
                        {
                            export_error.set(Some(format!("Download failed: {e}")));
                        } else {
                            export_error.set(None);
                        }
                    }
                    Err(e) => {
                        export_error.set(Some(format!("Export failed: {e}")));
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "export-panel",
            h3 { class: "export-heading", "Export" }

            if let Some(ref err) = export_error() {
                p { class: "export-error", "{err}" }
            }

            button {
                class: if has_result { "export-button" } else { "export-button disabled" },
                disabled: !has_result,
                onclick: png_click,
                "Download PNG"
            }

            p { class: "export-note", "Saves the mask as {MASK_FILENAME}" }
        }
    }
}
