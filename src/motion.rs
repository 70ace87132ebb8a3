mod loader;
mod nav;
mod scroll_fx;
mod timeline;

pub use loader::{LoaderTimeline, LINES_DESKTOP, LINES_MOBILE};
pub use nav::{active_section, NavState, NAV_TOP_THRESHOLD};
pub use scroll_fx::{
    snap_positions, BgPose, BgTransition, Direction, FxDurations, FxTransition, RailSide,
    RailPose, ScrollFx, WordPose,
};
pub use timeline::{pinned_progress, rail_fill_percent, snapped_progress, timeline_index};

pub fn clamp_index(index: usize, total: usize) -> usize {
    index.min(total.saturating_sub(1))
}

/// Linear interpolation of `value` from `input` onto `output`, clamped to the
/// output range.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if (in_hi - in_lo).abs() < f64::EPSILON {
        return out_lo;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Enter,
    Exit,
    Bounce,
    Smooth,
    Reveal,
    Card,
    Power2Out,
    Power3Out,
    Power2InOut,
}

impl Easing {
    pub fn points(self) -> [f64; 4] {
        match self {
            Easing::Enter => [0.22, 1.0, 0.36, 1.0],
            Easing::Exit => [0.55, 0.0, 1.0, 0.45],
            Easing::Bounce => [0.34, 1.56, 0.64, 1.0],
            Easing::Smooth => [0.76, 0.0, 0.24, 1.0],
            Easing::Reveal => [0.16, 1.0, 0.3, 1.0],
            Easing::Card => [0.32, 0.72, 0.0, 1.0],
            Easing::Power2Out => [0.215, 0.61, 0.355, 1.0],
            Easing::Power3Out => [0.165, 0.84, 0.44, 1.0],
            Easing::Power2InOut => [0.645, 0.045, 0.355, 1.0],
        }
    }

    pub fn css(self) -> String {
        let [a, b, c, d] = self.points();
        format!("cubic-bezier({a}, {b}, {c}, {d})")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaggerFrom {
    #[default]
    Start,
    End,
    Center,
    Edges,
}

/// Per-item delays in seconds for `count` items staggered by `each`.
pub fn stagger_delays(count: usize, each: f64, from: StaggerFrom) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let last = (count - 1) as f64;
    let mid = last / 2.0;
    (0..count)
        .map(|i| {
            let i = i as f64;
            let steps = match from {
                StaggerFrom::Start => i,
                StaggerFrom::End => last - i,
                StaggerFrom::Center => (i - mid).abs(),
                StaggerFrom::Edges => mid - (i - mid).abs(),
            };
            steps * each
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

/// One-shot entrance animation for an element scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub direction: RevealDirection,
    pub distance: f64,
    pub delay: f64,
    pub duration: f64,
    pub blur: bool,
    pub scale: bool,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            direction: RevealDirection::Up,
            distance: 30.0,
            delay: 0.0,
            duration: 0.6,
            blur: false,
            scale: false,
        }
    }
}

impl Reveal {
    fn offset(&self) -> (f64, f64) {
        match self.direction {
            RevealDirection::Up => (0.0, self.distance),
            RevealDirection::Down => (0.0, -self.distance),
            RevealDirection::Left => (self.distance, 0.0),
            RevealDirection::Right => (-self.distance, 0.0),
        }
    }

    pub fn hidden_style(&self) -> String {
        let (x, y) = self.offset();
        let scale = if self.scale { 0.8 } else { 1.0 };
        let mut style = format!("opacity: 0; transform: translate3d({x}px, {y}px, 0) scale({scale});");
        if self.blur {
            style.push_str(" filter: blur(10px);");
        }
        style
    }

    pub fn shown_style(&self) -> String {
        let mut style = "opacity: 1; transform: translate3d(0px, 0px, 0) scale(1);".to_string();
        if self.blur {
            style.push_str(" filter: blur(0px);");
        }
        style
    }

    pub fn transition(&self) -> String {
        let ease = Easing::Enter.css();
        format!(
            "transition: opacity {d}s {ease} {delay}s, transform {d}s {ease} {delay}s, filter {d}s {ease} {delay}s;",
            d = self.duration,
            delay = self.delay,
        )
    }

    /// Full inline style for the current visibility. With reduced motion the
    /// element is always shown and never transitions.
    pub fn style(&self, visible: bool, reduce_motion: bool) -> String {
        if reduce_motion {
            return self.shown_style();
        }
        let pose = if visible {
            self.shown_style()
        } else {
            self.hidden_style()
        };
        format!("{pose} {}", self.transition())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(0, 0), 0);
        assert_eq!(clamp_index(7, 4), 3);
        assert_eq!(clamp_index(2, 4), 2);
    }

    #[test]
    fn test_map_range_clamps() {
        assert_eq!(map_range(0.5, (0.75, 1.0), (0.0, 1.0)), 0.0);
        assert_eq!(map_range(0.875, (0.75, 1.0), (0.0, 1.0)), 0.5);
        assert_eq!(map_range(1.5, (0.75, 1.0), (0.0, 1.0)), 1.0);
        assert_eq!(map_range(0.5, (0.0, 1.0), (0.0, -50.0)), -25.0);
        assert_eq!(map_range(3.0, (1.0, 1.0), (2.0, 4.0)), 2.0);
    }

    #[test]
    fn test_easing_css() {
        assert_eq!(Easing::Enter.css(), "cubic-bezier(0.22, 1, 0.36, 1)");
        assert_eq!(Easing::Exit.css(), "cubic-bezier(0.55, 0, 1, 0.45)");
    }

    #[test]
    fn test_stagger_start_and_end() {
        assert_eq!(stagger_delays(3, 0.5, StaggerFrom::Start), vec![0.0, 0.5, 1.0]);
        assert_eq!(stagger_delays(3, 0.5, StaggerFrom::End), vec![1.0, 0.5, 0.0]);
        assert!(stagger_delays(0, 0.5, StaggerFrom::Center).is_empty());
    }

    #[test]
    fn test_stagger_center_and_edges() {
        assert_eq!(
            stagger_delays(5, 1.0, StaggerFrom::Center),
            vec![2.0, 1.0, 0.0, 1.0, 2.0]
        );
        assert_eq!(
            stagger_delays(5, 1.0, StaggerFrom::Edges),
            vec![0.0, 1.0, 2.0, 1.0, 0.0]
        );
        // even counts split the middle
        assert_eq!(
            stagger_delays(4, 1.0, StaggerFrom::Center),
            vec![1.5, 0.5, 0.5, 1.5]
        );
    }

    #[test]
    fn test_reveal_offsets() {
        let up = Reveal::default();
        assert!(up.hidden_style().contains("translate3d(0px, 30px, 0)"));
        let left = Reveal {
            direction: RevealDirection::Left,
            distance: 80.0,
            blur: true,
            scale: true,
            ..Reveal::default()
        };
        let hidden = left.hidden_style();
        assert!(hidden.contains("translate3d(80px, 0px, 0) scale(0.8)"));
        assert!(hidden.contains("blur(10px)"));
        assert!(left.shown_style().contains("blur(0px)"));
        let right = Reveal {
            direction: RevealDirection::Right,
            ..Reveal::default()
        };
        assert!(right.hidden_style().contains("translate3d(-30px, 0px, 0)"));
    }

    #[test]
    fn test_reveal_reduced_motion_is_static() {
        let reveal = Reveal::default();
        let style = reveal.style(false, true);
        assert!(style.contains("opacity: 1"));
        assert!(!style.contains("transition"));
        assert!(reveal.style(false, false).contains("opacity: 0"));
    }
}
