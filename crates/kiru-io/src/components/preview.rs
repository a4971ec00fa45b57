//! Side-by-side preview of the original, intensity, and mask images.
//!
//! Each image is encoded to PNG and displayed as an `<img>` over a
//! Blob URL. URLs are revoked on re-render and on unmount so rapid
//! parameter changes do not leak object URLs.

use std::rc::Rc;

use dioxus::prelude::*;
use kiru_segment::StagedSegmentation;

use crate::raster;

/// Props for the [`SegmentPreview`] component.
#[derive(Props, Clone)]
pub struct SegmentPreviewProps {
    /// Full pipeline result with all intermediate images.
    /// Wrapped in `Rc` to avoid cloning pixel data on each render.
    staged: Rc<StagedSegmentation>,
}

impl PartialEq for SegmentPreviewProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.staged, &other.staged)
    }
}

/// Side-by-side tiles for the decoded original, its intensity
/// reduction, and the segmentation mask, with the image dimensions
/// underneath.
#[component]
pub fn SegmentPreview(props: SegmentPreviewProps) -> Element {
    let staged = &props.staged;
    let w = staged.dimensions.width;
    let h = staged.dimensions.height;

    // Track outstanding Blob URLs so they can be revoked on re-render
    // (rapid slider changes re-render faster than images load) and on
    // unmount.
    let mut prev_urls: Signal<Vec<String>> = use_signal(Vec::new);
    {
        let prev_urls = prev_urls;
        use_drop(move || {
            for url in prev_urls.peek().iter() {
                raster::revoke_blob_url(url);
            }
        });
    }

    // Revoke the previous render's URLs before creating new ones.
    for url in prev_urls.take() {
        raster::revoke_blob_url(&url);
    }

    let urls = raster::rgba_image_to_blob_url(&staged.original).and_then(|original| {
        let grayscale = raster::gray_image_to_blob_url(&staged.grayscale)?;
        let mask = raster::gray_image_to_blob_url(&staged.mask)?;
        Ok((original, grayscale, mask))
    });

    match urls {
        Ok((original_url, gray_url, mask_url)) => {
            prev_urls.set(vec![
                original_url.clone(),
                gray_url.clone(),
                mask_url.clone(),
            ]);
            rsx! {
                div { class: "preview-grid",
                    {render_tile(&original_url, "Original")}
                    {render_tile(&gray_url, "Grayscale")}
                    {render_tile(&mask_url, "Mask")}
                }
                p { class: "preview-dimensions", "{w} × {h} px" }
            }
        }
        Err(e) => rsx! {
            p { class: "preview-error", "Failed to render preview: {e}" }
        },
    }
}

/// Render one captioned preview tile.
fn render_tile(url: &str, caption: &str) -> Element {
    let url = url.to_string();
    let caption = caption.to_string();

    rsx! {
        figure { class: "preview-tile",
            img {
                src: "{url}",
                class: "preview-image",
                alt: "{caption} preview",
            }
            figcaption { class: "preview-caption", "{caption}" }
        }
    }
}
