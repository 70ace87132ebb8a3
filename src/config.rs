use chrono::{DateTime, Datelike, Utc};

use crate::motion::FxDurations;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/maqdlbza";
pub const SITE_TITLE: &str = "Rishi Patel | CS Student & Developer";
pub const SITE_DESCRIPTION: &str = "Portfolio of a passionate third-year Computer Science student specializing in full-stack development, building elegant digital experiences.";
pub const SITE_KEYWORDS: &str =
    "developer, portfolio, computer science, web development, react, full-stack";
pub const LOADER_TEXT: &str = "WELCOME";

/// Compile-time settings for the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub contact_endpoint: &'static str,
    pub build_time: &'static str,
    pub fx_durations: FxDurations,
    pub nav_hide_delay_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: option_env!("CONTACT_ENDPOINT").unwrap_or(DEFAULT_CONTACT_ENDPOINT),
            build_time: env!("BUILD_TIME"),
            fx_durations: FxDurations::default(),
            nav_hide_delay_ms: 4500,
        }
    }
}

impl SiteConfig {
    pub fn build_date(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.build_time)
            .ok()
            .map(|d| d.with_timezone(&Utc))
    }

    /// Copyright year, taken from the build so server and browser agree.
    pub fn copyright_year(&self) -> i32 {
        self.build_date()
            .map(|d| d.year())
            .unwrap_or_else(|| Utc::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert!(config.contact_endpoint.starts_with("https://"));
        assert_eq!(config.nav_hide_delay_ms, 4500);
        assert_eq!(config.fx_durations.snap_ms, 800);
    }

    #[test]
    fn test_build_year_from_build_time() {
        let config = SiteConfig {
            build_time: "2025-03-04T05:06:07+00:00",
            ..SiteConfig::default()
        };
        assert_eq!(config.copyright_year(), 2025);
        let broken = SiteConfig {
            build_time: "yesterday",
            ..SiteConfig::default()
        };
        assert!(broken.build_date().is_none());
        assert!(broken.copyright_year() >= 2025);
    }
}
