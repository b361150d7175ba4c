use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use super::{Gesture, Sections, Selection};
use crate::primitives::{Point, Rotation};
use crate::theme::Theme;

const DIAL_ID: &str = "rotary-dial";
const DIAL_SIZE: f64 = 300.0;
const KNOB_SIZE: f64 = 140.0;
const LABEL_DISTANCE: f64 = 120.0;

/// Client-space centre of the dial, or `None` if it is not laid out.
fn measure_center() -> Option<Point> {
    let rect = web_sys::window()?
        .document()?
        .get_element_by_id(DIAL_ID)?
        .get_bounding_client_rect();
    (rect.width() > 0.0 && rect.height() > 0.0)
        .then(|| Point::rect_center(rect.x(), rect.y(), rect.width(), rect.height()))
}

fn client_point(e: &Event<MouseData>) -> Point {
    let p = e.client_coordinates();
    Point::new(p.x, p.y)
}

/// Label placement: rotate out to the anchor, push outward, rotate back upright.
fn label_transform(anchor: f64) -> String {
    format!(
        "translate(-50%, -50%) rotate({anchor}deg) translateY(-{LABEL_DISTANCE}px) rotate({}deg)",
        -anchor
    )
}

#[component]
pub fn RotaryDial(
    sections: Sections,
    rotation: f64,
    selected: usize,
    on_select: EventHandler<Selection>,
    on_rotate: EventHandler<f64>,
    #[props(default)] theme: Theme,
    #[props(default)] hint: String,
) -> Element {
    let mut gesture = use_signal(Gesture::default);
    let dragging = gesture.read().is_dragging();
    let palette = theme.palette();
    let knob_bg = palette.knob;
    let border = palette.border;
    let accent = palette.accent;
    let muted = palette.muted;
    let knob_transform = Rotation::new(rotation).to_css();
    let cursor = if dragging { "grabbing" } else { "grab" };
    let sections_root = sections.clone();
    let sections_up = sections.clone();
    let sections_leave = sections.clone();

    let finish = move |selection: Selection| {
        on_rotate.call(selection.rotation);
        on_select.call(selection);
    };

    rsx! {
        div {
            id: DIAL_ID,
            style: "position: relative; width: {DIAL_SIZE}px; height: {DIAL_SIZE}px; flex-shrink: 0; user-select: none; cursor: {cursor};",
            onmousedown: move |e: Event<MouseData>| {
                e.prevent_default();
                let center = measure_center();
                if center.is_none() {
                    warn!("dial not measurable, drag ignored");
                }
                if gesture.write().press(center, client_point(&e), rotation) {
                    debug!(rotation, "drag started");
                }
            },
            // A release can land before the capture layer has mounted
            onmouseup: move |e: Event<MouseData>| {
                let selection = gesture.write().release(client_point(&e), &sections_root);
                if let Some(selection) = selection {
                    debug!(index = selection.index, rotation = selection.rotation, "drag released on dial");
                    finish(selection);
                }
            },

            // Knob with indicator arrow
            div {
                style: "position: absolute; left: 50%; top: 50%; width: {KNOB_SIZE}px; height: {KNOB_SIZE}px; border-radius: 50%; background: {knob_bg}; border: 2px solid {border}; box-shadow: 0 4px 16px rgba(0,0,0,0.2); transform: translate(-50%, -50%) {knob_transform};",
                div {
                    style: "position: absolute; left: 50%; top: 6px; width: 0; height: 0; transform: translateX(-50%); border-left: 10px solid transparent; border-right: 10px solid transparent; border-bottom: 18px solid {accent};",
                }
            }

            if !hint.is_empty() {
                p {
                    style: "position: absolute; left: 50%; top: 50%; transform: translate(-50%, -50%); margin: 0; font-size: 12px; color: {muted}; pointer-events: none; text-align: center; width: {KNOB_SIZE}px;",
                    "{hint}"
                }
            }

            // Label ring
            for (index, label) in sections.iter() {
                {
                    let transform = label_transform(sections.anchor(index));
                    let is_active = index == selected;
                    let weight = if is_active { "700" } else { "400" };
                    let color = if is_active { palette.accent } else { palette.text };
                    let label = label.to_string();
                    let sections = sections.clone();
                    rsx! {
                        span {
                            key: "{index}",
                            "data-index": "{index}",
                            style: "position: absolute; left: 50%; top: 50%; transform: {transform}; white-space: nowrap; font-size: 15px; font-weight: {weight}; color: {color}; cursor: pointer; padding: 4px 6px;",
                            onmousedown: move |e: Event<MouseData>| e.stop_propagation(),
                            onclick: move |e: Event<MouseData>| {
                                e.stop_propagation();
                                match sections.select(index, rotation) {
                                    Ok(selection) => {
                                        debug!(index, rotation = selection.rotation, "label selected");
                                        on_select.call(selection);
                                    }
                                    Err(err) => warn!("label click ignored: {err}"),
                                }
                            },
                            "{label}"
                        }
                    }
                }
            }
        }

        // Page-wide capture layer, present only while dragging
        if dragging {
            div {
                style: "position: fixed; inset: 0; z-index: 1000; cursor: grabbing;",
                onmousemove: move |e: Event<MouseData>| {
                    e.prevent_default();
                    let next = gesture.write().motion(client_point(&e));
                    if let Some(next) = next {
                        on_rotate.call(next);
                    }
                },
                onmouseup: move |e: Event<MouseData>| {
                    let selection = gesture.write().release(client_point(&e), &sections_up);
                    if let Some(selection) = selection {
                        debug!(index = selection.index, rotation = selection.rotation, "drag released");
                        finish(selection);
                    }
                },
                onmouseleave: move |_| {
                    let selection = gesture.write().release_at_last(&sections_leave);
                    if let Some(selection) = selection {
                        debug!(index = selection.index, "drag left page, settled");
                        finish(selection);
                    }
                },
            }
        }
    }
}
