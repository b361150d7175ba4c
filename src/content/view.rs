use dioxus::prelude::*;

use super::{
    BIOGRAPHY, EDUCATION, LANGUAGES, PROJECTS, SKILLS, SectionKind, WORK_HISTORY, paragraphs,
};
use crate::theme::Theme;

#[component]
fn Paragraphs(text: &'static str, #[props(default)] highlight_first: bool, accent: String) -> Element {
    rsx! {
        for (i, line) in paragraphs(text).into_iter().enumerate() {
            if highlight_first && i == 0 {
                p {
                    style: "font-weight: 700; font-size: 17px; color: {accent}; margin: 0 0 6px 0;",
                    "{line}"
                }
            } else {
                p {
                    style: "margin: 0 0 10px 0; line-height: 1.7;",
                    "{line}"
                }
            }
        }
    }
}

/// Static block for one résumé section; `None` renders nothing.
#[component]
pub fn SectionDisplay(kind: Option<SectionKind>, theme: Theme) -> Element {
    let Some(kind) = kind else {
        return rsx! {};
    };
    let palette = theme.palette();
    let surface = palette.surface;
    let border = palette.border;
    let text = palette.text;
    let muted = palette.muted;
    let accent = palette.accent.to_string();
    let id = kind.anchor_id();
    let title = kind.label();

    rsx! {
        section {
            id: "{id}",
            style: "width: 100%; max-width: 800px; box-sizing: border-box; background: {surface}; color: {text}; border: 1px solid {border}; border-radius: 12px; padding: 24px 32px; margin-top: 32px;",
            h2 {
                style: "margin: 0 0 16px 0; font-size: 24px;",
                "{title}"
            }

            {match kind {
                SectionKind::Skills => rsx! {
                    ul {
                        style: "margin: 0; padding-left: 20px;",
                        for skill in SKILLS.iter() {
                            li { style: "margin-bottom: 14px;", "{skill}" }
                        }
                    }
                },
                SectionKind::Biography => rsx! {
                    Paragraphs { text: BIOGRAPHY, accent: accent.clone() }
                },
                SectionKind::WorkHistory => rsx! {
                    for job in WORK_HISTORY.iter() {
                        div {
                            h3 { style: "margin: 0 0 4px 0; font-size: 18px;", {job.title} }
                            p { style: "margin: 0 0 12px 0; color: {muted};", {job.period} }
                            ul {
                                style: "margin: 0; padding-left: 20px;",
                                for duty in job.duties.iter() {
                                    li { style: "margin-bottom: 14px;", "{duty}" }
                                }
                            }
                        }
                    }
                },
                SectionKind::Education => rsx! {
                    for school in EDUCATION.iter() {
                        div {
                            h3 { style: "margin: 0 0 4px 0; font-size: 18px;", {school.name} }
                            p { style: "margin: 0; color: {muted};", {school.period} }
                        }
                    }
                },
                SectionKind::Languages => rsx! {
                    ul {
                        style: "margin: 0; padding-left: 20px;",
                        for lang in LANGUAGES.iter() {
                            li { "{lang}" }
                        }
                    }
                },
                SectionKind::Projects => rsx! {
                    ul {
                        style: "margin: 0; padding-left: 20px;",
                        for (i, project) in PROJECTS.iter().enumerate() {
                            li {
                                key: "{i}",
                                style: "margin-bottom: 24px;",
                                Paragraphs { text: *project, highlight_first: true, accent: accent.clone() }
                            }
                        }
                    }
                },
            }}
        }
    }
}
