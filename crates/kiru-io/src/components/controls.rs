//! Segmentation parameter controls.
//!
//! Renders the method selector, the parameter sliders appropriate to
//! the chosen method, and the invert toggle. Only the selected
//! method's parameters are shown, reinforcing the connection between
//! the chosen rule and what can be adjusted.

use dioxus::prelude::*;
use kiru_segment::{SegmentConfig, SegmentMethod};

/// Props for the [`MethodControls`] component.
#[derive(Props, Clone, PartialEq)]
pub struct MethodControlsProps {
    /// Current segmentation configuration (read-only).
    config: SegmentConfig,
    /// Callback fired when any parameter changes.
    on_config_change: EventHandler<SegmentConfig>,
}

/// Renders the segmentation controls.
///
/// The method selector switches between the three rules; each switch
/// resets that method's parameters to its slider defaults. The range
/// sliders cross-clamp so `lower <= upper` always holds at the UI
/// level — the core still validates, but a paired slider can never
/// produce inverted bounds here.
#[component]
pub fn MethodControls(props: MethodControlsProps) -> Element {
    let config = props.config;
    let on_change = props.on_config_change;

    let method_params = match config.method {
        SegmentMethod::Manual { threshold } => rsx! {
            {render_slider(
                "threshold",
                "Threshold",
                "Cutoff intensity. Samples above it become foreground.",
                threshold,
                move |v: u8| {
                    let mut c = config;
                    c.method = SegmentMethod::Manual { threshold: v };
                    on_change.call(c);
                },
            )}
        },

        SegmentMethod::Automatic => rsx! {
            p { class: "control-note",
                "The optimal level is computed from the image histogram."
            }
        },

        SegmentMethod::Range { lower, upper } => rsx! {
            {render_slider(
                "range_lower",
                "Lower Bound",
                "Inclusive start of the foreground interval.",
                lower,
                move |v: u8| {
                    let mut c = config;
                    // Enforce lower <= upper.
                    c.method = SegmentMethod::Range {
                        lower: v.min(upper),
                        upper,
                    };
                    on_change.call(c);
                },
            )}
            {render_slider(
                "range_upper",
                "Upper Bound",
                "Inclusive end of the foreground interval.",
                upper,
                move |v: u8| {
                    let mut c = config;
                    // Enforce lower <= upper.
                    c.method = SegmentMethod::Range {
                        lower,
                        upper: v.max(lower),
                    };
                    on_change.call(c);
                },
            )}
        },
    };

    rsx! {
        div { class: "controls",
            {render_select(
                "method",
                "Segmentation Method",
                "Which rule classifies samples as foreground.",
                &[
                    ("Manual", "Manual Threshold"),
                    ("Automatic", "Automatic (Optimal)"),
                    ("Range", "Range (Multilevel)"),
                ],
                match config.method {
                    SegmentMethod::Manual { .. } => "Manual",
                    SegmentMethod::Automatic => "Automatic",
                    SegmentMethod::Range { .. } => "Range",
                },
                move |v: String| {
                    let mut c = config;
                    c.method = method_defaults(&v);
                    on_change.call(c);
                },
            )}

            {method_params}

            {render_toggle(
                "invert",
                "Invert",
                "Flip foreground and background in the mask.",
                config.invert,
                move |v: bool| {
                    let mut c = config;
                    c.invert = v;
                    on_change.call(c);
                },
            )}
        }
    }
}

/// Default parameters applied when the user switches to a method.
fn method_defaults(name: &str) -> SegmentMethod {
    match name {
        "Automatic" => SegmentMethod::Automatic,
        "Range" => SegmentMethod::Range {
            lower: 50,
            upper: 200,
        },
        _ => SegmentMethod::Manual { threshold: 127 },
    }
}

/// Render a labeled intensity slider (0-255) with a description.
fn render_slider(
    id: &str,
    label: &str,
    description: &str,
    value: u8,
    on_input: impl Fn(u8) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let description = description.to_string();

    rsx! {
        div { class: "control-row",
            div { class: "control-label-row",
                label { r#for: "{id}", class: "control-label", "{label}" }
                span { class: "control-value", "{value}" }
            }
            p { class: "control-desc", "{description}" }
            input {
                r#type: "range",
                id: "{id}",
                min: "0",
                max: "255",
                step: "1",
                value: "{value}",
                class: "control-slider",
                oninput: move |e| {
                    match e.value().parse::<u8>() {
                        Ok(v) => on_input(v),
                        Err(err) => {
                            web_sys::console::warn_1(
                                &format!("slider parse failure: {err:?} from {:?}", e.value())
                                    .into(),
                            );
                        }
                    }
                },
            }
        }
    }
}

/// Render a labeled toggle with a description.
fn render_toggle(
    id: &str,
    label: &str,
    description: &str,
    checked: bool,
    on_change: impl Fn(bool) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let description = description.to_string();

    rsx! {
        div { class: "control-row",
            div { class: "control-label-row",
                label { r#for: "{id}", class: "control-label", "{label}" }
                input {
                    r#type: "checkbox",
                    id: "{id}",
                    checked: checked,
                    class: "control-toggle",
                    onchange: move |e| {
                        on_change(e.checked());
                    },
                }
            }
            p { class: "control-desc", "{description}" }
        }
    }
}

/// Render a labeled select dropdown with a description.
fn render_select(
    id: &str,
    label: &str,
    description: &str,
    options: &[(&str, &str)],
    selected: &str,
    on_change: impl Fn(String) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let description = description.to_string();
    let options: Vec<(String, String)> = options
        .iter()
        .map(|(v, l)| ((*v).to_string(), (*l).to_string()))
        .collect();
    let selected = selected.to_string();

    rsx! {
        div { class: "control-row",
            label { r#for: "{id}", class: "control-label", "{label}" }
            p { class: "control-desc", "{description}" }
            select {
                id: "{id}",
                class: "control-select",
                value: "{selected}",
                onchange: move |e| {
                    on_change(e.value());
                },

                for (value, display) in options.iter() {
                    option {
                        value: "{value}",
                        selected: value == &selected,
                        "{display}"
                    }
                }
            }
        }
    }
}
