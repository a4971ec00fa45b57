use std::rc::Rc;

use dioxus::prelude::*;
use kiru_io::{
    ExportPanel, FileUpload, HistogramPanel, MethodControls, SegmentPreview, ThresholdReadout,
};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Manages the core application state via Dioxus signals and wires
/// together the upload, preview, histogram, controls, readout, and
/// export components.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut image_bytes = use_signal(|| Option::<Vec<u8>>::None);
    let mut result = use_signal(|| Option::<Rc<kiru_segment::StagedSegmentation>>::None);
    let mut processing = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut generation = use_signal(|| 0u64);
    let mut config = use_signal(kiru_segment::SegmentConfig::default);

    // --- File upload handler ---
    let on_upload = move |(bytes, _name): (Vec<u8>, String)| {
        result.set(None);
        error.set(None);
        image_bytes.set(Some(bytes));
    };

    // --- Segmentation effect ---
    // Re-runs whenever image_bytes or config changes.
    // Spawns an async task so the "Processing..." indicator renders
    // before the synchronous segmentation work blocks the thread.
    use_effect(move || {
        let Some(bytes) = image_bytes() else {
            return;
        };
        let cfg = config();

        // Increment generation so any in-flight task from a prior
        // trigger knows it is stale and should discard its result.
        generation += 1;
        let my_generation = *generation.peek();

        processing.set(true);
        error.set(None);

        spawn(async move {
            // Yield to the browser event loop so it can paint the
            // "Processing..." state before we block on the pipeline.
            gloo_timers::future::TimeoutFuture::new(0).await;

            let outcome = kiru_segment::process_staged(&bytes, &cfg);

            // If another run was triggered while we were processing,
            // discard this stale result silently.
            if *generation.peek() != my_generation {
                return;
            }

            match outcome {
                Ok(res) => {
                    result.set(Some(Rc::new(res)));
                    error.set(None);
                }
                Err(e) => {
                    error.set(Some(format!("{e}")));
                    // Keep the previous result visible if one exists.
                }
            }

            processing.set(false);
        });
    });

    // --- Config change handler ---
    let on_config_change = move |new_config: kiru_segment::SegmentConfig| {
        config.set(new_config);
    };

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/kiru.css") }

        div { class: "app",
            // Header
            header { class: "app-header",
                h1 { class: "app-title", "kiru" }
                p { class: "app-subtitle",
                    "Interactive image segmentation: manual, optimal, and range thresholding"
                }
            }

            // Main content area
            div { class: "app-main",
                // Left column: preview
                div { class: "app-preview-column",
                    if processing() {
                        div { class: "app-placeholder",
                            p { class: "status-message", "Processing..." }
                        }
                    } else if let Some(ref staged) = result() {
                        SegmentPreview { staged: Rc::clone(staged) }
                    } else if image_bytes().is_some() {
                        div { class: "app-placeholder",
                            p { class: "placeholder-message", "Processing failed" }
                        }
                    } else {
                        div { class: "app-placeholder",
                            p { class: "placeholder-message",
                                "Upload an image to get started"
                            }
                        }
                    }

                    // Error display
                    if let Some(ref err) = error() {
                        div { class: "error-banner",
                            p { "{err}" }
                        }
                    }
                }

                // Right sidebar: controls, readout, histogram, export
                div { class: "app-sidebar",
                    MethodControls {
                        config: config(),
                        on_config_change: on_config_change,
                    }

                    ThresholdReadout {
                        threshold: result().map(|r| r.threshold),
                    }

                    if let Some(ref staged) = result() {
                        HistogramPanel { histogram: staged.histogram }
                    }

                    ExportPanel { result: result() }
                }
            }

            // Footer: upload zone
            div { class: "app-footer",
                FileUpload { on_upload: on_upload }
            }
        }
    }
}
