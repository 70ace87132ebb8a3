use crate::content::SectionId;

/// Scroll offset under which the navbar never hides and `Home` is active.
pub const NAV_TOP_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub visible: bool,
    pub active: SectionId,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            visible: true,
            active: SectionId::Home,
        }
    }
}

impl NavState {
    /// Any scroll reveals the navbar. `measured` is the section under the
    /// viewport midline, if one could be found. Returns true when a hide timer
    /// should be armed.
    pub fn on_scroll(&mut self, scroll_y: f64, measured: Option<SectionId>) -> bool {
        if scroll_y < NAV_TOP_THRESHOLD {
            self.active = SectionId::Home;
        } else if let Some(section) = measured {
            self.active = section;
        }
        self.on_activity()
    }

    /// Pointer or touch activity reveals the navbar. Returns true when a hide
    /// timer should be armed; it never hides over the home section.
    pub fn on_activity(&mut self) -> bool {
        self.visible = true;
        self.active != SectionId::Home
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn set_active(&mut self, section: SectionId) {
        self.active = section;
    }
}

/// The section crossing the viewport's horizontal midline.
///
/// `tops` are document offsets of the sections; sections not on the page are
/// skipped by the caller.
pub fn active_section(
    scroll_y: f64,
    viewport_h: f64,
    tops: &[(SectionId, f64)],
) -> Option<SectionId> {
    let midline = scroll_y + viewport_h / 2.0;
    tops.iter()
        .filter(|(_, top)| *top <= midline)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(section, _)| *section)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<(SectionId, f64)> {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| (*s, i as f64 * 1000.0))
            .collect()
    }

    #[test]
    fn test_scroll_near_top_forces_home() {
        let mut nav = NavState::default();
        nav.set_active(SectionId::Skills);
        nav.hide();
        assert!(!nav.on_scroll(40.0, Some(SectionId::Skills)));
        assert!(nav.visible);
        assert_eq!(nav.active, SectionId::Home);
    }

    #[test]
    fn test_scroll_further_arms_hide() {
        let mut nav = NavState::default();
        assert!(nav.on_scroll(1500.0, Some(SectionId::About)));
        assert_eq!(nav.active, SectionId::About);
        assert!(nav.visible);
        nav.hide();
        assert!(!nav.visible);
    }

    #[test]
    fn test_stays_visible_deep_in_home() {
        let mut nav = NavState::default();
        assert!(!nav.on_scroll(1500.0, Some(SectionId::Home)));
        assert!(!nav.on_scroll(1600.0, None));
        assert_eq!(nav.active, SectionId::Home);
        assert!(nav.visible);
    }

    #[test]
    fn test_activity_reveals_and_rearms_outside_home() {
        let mut nav = NavState::default();
        nav.hide();
        assert!(!nav.on_activity());
        assert!(nav.visible);

        nav.set_active(SectionId::Projects);
        nav.hide();
        assert!(nav.on_activity());
        assert!(nav.visible);
    }

    #[test]
    fn test_active_section_uses_midline() {
        let tops = layout();
        assert_eq!(active_section(0.0, 800.0, &tops), Some(SectionId::Home));
        assert_eq!(active_section(550.0, 800.0, &tops), Some(SectionId::Home));
        assert_eq!(active_section(600.0, 800.0, &tops), Some(SectionId::About));
        assert_eq!(
            active_section(5200.0, 800.0, &tops),
            Some(SectionId::Contact)
        );
        assert_eq!(active_section(0.0, 800.0, &[]), None);
    }
}
