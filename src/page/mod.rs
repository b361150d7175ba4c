//! Page shell - owns the dial's selected index and rotation
//!
//! `PageState` is the only mutable state on the page. Startup inputs (query
//! config, system colour scheme) are read once in `App` and handed down as a
//! `Startup` context so the page itself never reads the environment.

mod view;

pub use view::Resume;

use crate::config::PageConfig;
use crate::dial::{Sections, Selection};
use crate::primitives::normalize_angle;
use crate::theme::Theme;

/// Environment read once at launch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Startup {
    pub config: PageConfig,
    pub theme: Theme,
}

impl Startup {
    pub fn new(config: PageConfig, prefers_dark: bool) -> Self {
        Self {
            theme: config.initial_theme(prefers_dark),
            config,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageState {
    pub selected: usize,
    pub rotation: f64,
    pub theme: Theme,
}

impl PageState {
    pub fn new(theme: Theme) -> Self {
        Self {
            selected: 0,
            rotation: 0.0,
            theme,
        }
    }

    pub fn apply(&mut self, selection: Selection) {
        self.rotation = selection.rotation;
        self.selected = selection.index;
    }

    /// Live rotation during a drag; the selection only changes on release.
    pub fn rotate(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// One-line dial state for the debug panel
    pub fn readout(&self, sections: &Sections) -> String {
        format!(
            "rotation: {:.2}  normalized: {:.2}  index: {}  anchor: {:.2}",
            self.rotation,
            normalize_angle(self.rotation),
            self.selected,
            sections.anchor(self.selected),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DialError;
    use crate::primitives::angle::approx;

    fn sections() -> Sections {
        crate::content::navigable_sections()
    }

    #[test]
    fn starts_at_first_section() {
        let s = PageState::new(Theme::Light);
        assert_eq!(s.selected, 0);
        assert_eq!(s.rotation, 0.0);
    }

    #[test]
    fn startup_injects_theme() {
        let st = Startup::new(PageConfig::default(), true);
        assert_eq!(PageState::new(st.theme).theme, Theme::Dark);
        let st = Startup::new(PageConfig::from_query("theme=light"), true);
        assert_eq!(st.theme, Theme::Light);
    }

    #[test]
    fn drag_then_click_stay_aligned() {
        let sections = sections();
        let mut s = PageState::new(Theme::Light);

        // drag past a full turn, then settle
        s.rotate(400.0);
        s.apply(sections.snap(s.rotation));
        assert_eq!(s.selected, 1);
        assert!(approx(s.rotation, 420.0));

        s.apply(sections.select(5, s.rotation).unwrap());
        assert_eq!(s.selected, 5);
        assert!(approx(s.rotation, 300.0));
        assert!(approx(normalize_angle(s.rotation), sections.anchor(5)));
    }

    #[test]
    fn rotate_does_not_change_selection() {
        let mut s = PageState::new(Theme::Light);
        s.rotate(95.0);
        assert_eq!(s.selected, 0);
        assert_eq!(s.rotation, 95.0);
    }

    #[test]
    fn bad_index_leaves_state_alone() {
        let mut s = PageState::new(Theme::Dark);
        s.rotation = 42.0;
        let before = s;
        let result = sections().select(17, s.rotation);
        assert!(matches!(
            result,
            Err(DialError::IndexOutOfRange { index: 17, len: 6 })
        ));
        if let Ok(selection) = result {
            s.apply(selection);
        }
        assert_eq!(s, before);
    }

    #[test]
    fn theme_toggles() {
        let mut s = PageState::new(Theme::Light);
        s.toggle_theme();
        assert_eq!(s.theme, Theme::Dark);
    }

    #[test]
    fn readout_format() {
        let mut s = PageState::new(Theme::Light);
        s.apply(Selection { index: 3, rotation: -180.0 });
        assert_eq!(
            s.readout(&sections()),
            "rotation: -180.00  normalized: 180.00  index: 3  anchor: 180.00"
        );
    }
}
