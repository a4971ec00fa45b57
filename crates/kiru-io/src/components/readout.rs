//! Active-threshold readout card.

use dioxus::prelude::*;
use kiru_segment::ActiveThreshold;

/// Props for the [`ThresholdReadout`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ThresholdReadoutProps {
    /// The effective threshold of the latest segmentation, if any.
    threshold: Option<ActiveThreshold>,
}

/// Metric card showing the threshold that was actually applied.
///
/// For the automatic method this is the computed level, so the card
/// always reflects the effective parameters rather than raw widget
/// state.
#[component]
pub fn ThresholdReadout(props: ThresholdReadoutProps) -> Element {
    let value = props
        .threshold
        .map_or_else(|| "—".to_string(), |t| t.to_string());

    rsx! {
        div { class: "readout-card",
            p { class: "readout-label", "Active Threshold" }
            p { class: "readout-value", "{value}" }
        }
    }
}
