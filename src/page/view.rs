use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::{PageState, Startup};
use crate::content::{self, AGE, DIAL_HINT, EMAIL, NAME, SectionDisplay};
use crate::dial::{RotaryDial, Selection};

const ICON_FONT: &str = "https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined";
const UP_ICON: &str = "https://img.icons8.com/ios/50/FFFFFF/up--v1.png";

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

#[component]
pub fn Resume() -> Element {
    let startup = use_context::<Startup>();
    let mut state = use_signal(move || PageState::new(startup.theme));
    let sections = use_hook(content::navigable_sections);

    let st = *state.read();
    let palette = st.theme.palette();
    let (background, text, muted, accent) = (palette.background, palette.text, palette.muted, palette.accent);
    let toggle_icon = st.theme.toggle_icon();
    let active = content::resolve(&sections, st.selected);
    let readout = st.readout(&sections);

    rsx! {
        document::Link { rel: "stylesheet", href: ICON_FONT }

        div {
            class: if st.theme.is_dark() { "resume-container dark-mode" } else { "resume-container" },
            style: "min-height: 100vh; background: {background}; color: {text}; display: flex; flex-direction: column; align-items: center; padding: 40px 20px 80px; box-sizing: border-box; font-family: system-ui, -apple-system, sans-serif; transition: background 0.2s, color 0.2s;",

            // Theme toggle
            div {
                style: "align-self: flex-end;",
                button {
                    style: "background: none; border: 1px solid {muted}; border-radius: 50%; width: 40px; height: 40px; cursor: pointer; color: {text}; display: flex; align-items: center; justify-content: center;",
                    onclick: move |_| {
                        state.write().toggle_theme();
                        debug!(theme = state.peek().theme.name(), "theme toggled");
                    },
                    span { class: "material-symbols-outlined", "{toggle_icon}" }
                }
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 48px; align-items: center; justify-content: center; width: 100%; max-width: 900px;",

                header {
                    style: "min-width: 220px;",
                    h1 {
                        style: "font-size: 40px; font-weight: 700; margin: 0 0 12px 0;",
                        "{NAME}"
                    }
                    p { style: "margin: 0 0 6px 0; color: {muted};", "age：{AGE}" }
                    p {
                        style: "margin: 0; color: {muted};",
                        span { "Email：" }
                        a { href: "mailto:{EMAIL}", style: "color: {accent};", "{EMAIL}" }
                    }
                }

                RotaryDial {
                    sections: sections.clone(),
                    rotation: st.rotation,
                    selected: st.selected,
                    theme: st.theme,
                    hint: DIAL_HINT.to_string(),
                    on_select: move |selection: Selection| state.write().apply(selection),
                    on_rotate: move |rotation: f64| state.write().rotate(rotation),
                }
            }

            SectionDisplay { kind: active, theme: st.theme }

            if startup.config.debug {
                div {
                    id: "dial-readout",
                    style: "margin-top: 24px; font-family: monospace; font-size: 12px; color: {muted};",
                    "{readout}"
                }
            }

            button {
                style: "position: fixed; right: 24px; bottom: 24px; width: 48px; height: 48px; border-radius: 50%; border: none; background: {accent}; cursor: pointer; box-shadow: 0 4px 12px rgba(0,0,0,0.3); display: flex; align-items: center; justify-content: center;",
                onclick: move |_| scroll_to_top(),
                img { src: UP_ICON, alt: "Back to top", width: "24", height: "24" }
            }
        }
    }
}
