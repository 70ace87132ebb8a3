use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_TRANSITION_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class placed on the root element.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn color_scheme(self) -> &'static str {
        self.class()
    }

    pub fn theme_color(self) -> &'static str {
        match self {
            Theme::Dark => "#0B0F14",
            Theme::Light => "#F5F7FA",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }
}
