//! Page configuration from the URL query string
//!
//! `?theme=dark|light` overrides the system colour scheme, `?debug=1` shows the
//! dial readout. Unknown keys and bad values are ignored.

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageConfig {
    pub theme: Option<Theme>,
    pub debug: bool,
}

impl PageConfig {
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "theme" => {
                    if let Some(theme) = Theme::parse(value) {
                        config.theme = Some(theme);
                    }
                }
                "debug" => match value {
                    "1" | "true" => config.debug = true,
                    "0" | "false" => config.debug = false,
                    _ => {}
                },
                _ => {}
            }
        }
        config
    }

    /// Read from `window.location.search`.
    pub fn from_location() -> Self {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|q| Self::from_query(&q))
            .unwrap_or_default()
    }

    /// Explicit override wins over the system preference.
    pub fn initial_theme(&self, prefers_dark: bool) -> Theme {
        self.theme
            .unwrap_or_else(|| Theme::from_prefers_dark(prefers_dark))
    }
}
