use super::clamp_index;

const OUT_WORD_STAGGER: f64 = 0.03;
const IN_WORD_STAGGER: f64 = 0.05;
const RAIL_NUDGE_PX: f64 = 10.0;
const RAIL_DIM_OPACITY: f64 = 0.35;
const BG_PARK_SCALE: f64 = 1.04;
const SNAP_RELEASE_NO_SCROLL_MS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FxDurations {
    /// Section change duration in seconds.
    pub change: f64,
    /// Scroll snap duration in milliseconds.
    pub snap_ms: u64,
}

impl Default for FxDurations {
    fn default() -> Self {
        Self {
            change: 0.7,
            snap_ms: 800,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BgTransition {
    #[default]
    Fade,
    Clip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FxTransition {
    pub from: usize,
    pub to: usize,
}

impl FxTransition {
    pub fn direction(&self) -> Direction {
        if self.to > self.from {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordPose {
    pub y_percent: f64,
    pub opacity: f64,
    pub delay: f64,
    pub duration: f64,
}

impl WordPose {
    pub fn style(&self) -> String {
        format!(
            "display: inline-block; transform: translateY({}%); opacity: {}; transition: transform {d}s {ease} {delay}s, opacity {d}s {ease} {delay}s;",
            self.y_percent,
            self.opacity,
            d = self.duration,
            delay = self.delay,
            ease = super::Easing::Power3Out.css(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BgPose {
    pub opacity: f64,
    pub scale: f64,
    pub y_percent: f64,
    pub clip: Option<&'static str>,
    pub duration: f64,
}

impl BgPose {
    pub fn style(&self) -> String {
        let ease = super::Easing::Power2Out.css();
        let mut style = format!(
            "opacity: {}; transform: translateY({}%) scale({}); transition: opacity {d}s {ease}, transform {d}s {ease}, clip-path {d}s {ease};",
            self.opacity,
            self.y_percent,
            self.scale,
            d = self.duration,
        );
        if let Some(clip) = self.clip {
            style.push_str(&format!(" clip-path: {clip};"));
        }
        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailPose {
    pub active: bool,
    pub opacity: f64,
    pub x: f64,
    pub duration: f64,
}

impl RailPose {
    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: translateX({}px); transition: opacity {d}s {ease}, transform {d}s {ease};",
            self.opacity,
            self.x,
            d = self.duration,
            ease = super::Easing::Power3Out.css(),
        )
    }
}

/// Scroll driven slideshow state for the pinned hero.
///
/// `index` is the committed section, `displayed` is what the page is
/// animating towards. The two differ only while a transition is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFx {
    total: usize,
    index: usize,
    displayed: usize,
    animating: bool,
    snapping: bool,
    reduce_motion: bool,
    durations: FxDurations,
    bg_transition: BgTransition,
    parallax: f64,
    transition: Option<FxTransition>,
}

impl ScrollFx {
    pub fn new(total: usize, initial: usize, durations: FxDurations, reduce_motion: bool) -> Self {
        let index = clamp_index(initial, total);
        Self {
            total,
            index,
            displayed: index,
            animating: false,
            snapping: false,
            reduce_motion,
            durations,
            bg_transition: BgTransition::Fade,
            parallax: 4.0,
            transition: None,
        }
    }

    pub fn with_background(mut self, bg_transition: BgTransition, parallax: f64) -> Self {
        self.bg_transition = bg_transition;
        self.parallax = parallax;
        self
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_snapping(&self) -> bool {
        self.snapping
    }

    pub fn durations(&self) -> FxDurations {
        self.durations
    }

    pub fn transition(&self) -> Option<FxTransition> {
        self.transition
    }

    pub fn set_reduce_motion(&mut self, reduce_motion: bool) {
        self.reduce_motion = reduce_motion;
    }

    pub fn target_for_progress(&self, progress: f64) -> usize {
        if self.total == 0 {
            return 0;
        }
        let progress = progress.clamp(0.0, 1.0);
        let target = (progress * self.total as f64).floor() as usize;
        target.min(self.total - 1)
    }

    /// Whether `on_progress(progress)` would start a transition.
    pub fn steps_on(&self, progress: f64) -> bool {
        !(self.reduce_motion || self.snapping || self.animating || self.total == 0)
            && self.target_for_progress(progress) != self.index
    }

    /// Feeds the pinned region's scroll progress (0..=1). Moves at most one
    /// section per call, and only when nothing is animating.
    pub fn on_progress(&mut self, progress: f64) -> Option<FxTransition> {
        if !self.steps_on(progress) {
            return None;
        }
        let target = self.target_for_progress(progress);
        let next = if target > self.index {
            self.index + 1
        } else {
            self.index - 1
        };
        self.go_to(next)
    }

    pub fn go_to(&mut self, to: usize) -> Option<FxTransition> {
        if self.total == 0 {
            return None;
        }
        let to = clamp_index(to, self.total);
        if to == self.index || self.animating {
            return None;
        }
        let transition = FxTransition {
            from: self.index,
            to,
        };
        self.snapping = true;
        self.animating = true;
        self.displayed = to;
        self.transition = Some(transition);
        Some(transition)
    }

    pub fn next(&mut self) -> Option<FxTransition> {
        self.go_to(self.displayed + 1)
    }

    pub fn prev(&mut self) -> Option<FxTransition> {
        self.go_to(self.displayed.saturating_sub(1))
    }

    /// Commits the in-flight transition. Call `durations().change` seconds
    /// after a transition started.
    pub fn finish_transition(&mut self) {
        self.index = self.displayed;
        self.animating = false;
        self.transition = None;
    }

    pub fn finish_snap(&mut self) {
        self.snapping = false;
    }

    /// How long scroll updates are ignored after a jump.
    pub fn snap_release_ms(&self, with_scroll: bool) -> u64 {
        if with_scroll {
            self.durations.snap_ms
        } else {
            SNAP_RELEASE_NO_SCROLL_MS
        }
    }

    pub fn progress_percent(&self) -> f64 {
        let span = self.total.saturating_sub(1).max(1);
        self.displayed as f64 / span as f64 * 100.0
    }

    pub fn counter_label(index: usize) -> String {
        format!("{:02}", index + 1)
    }

    pub fn word_pose(&self, section: usize, word: usize, word_count: usize) -> WordPose {
        let current = self.displayed;
        let (y_percent, opacity) = if section == current {
            (0.0, 1.0)
        } else if section < current {
            (-100.0, 0.0)
        } else {
            (100.0, 0.0)
        };
        let d = self.durations.change;
        let (delay, duration) = match self.transition {
            Some(t) if section == t.to => (stagger_step(t, word, word_count, IN_WORD_STAGGER), d),
            Some(t) if section == t.from => {
                (stagger_step(t, word, word_count, OUT_WORD_STAGGER), d * 0.6)
            }
            _ => (0.0, 0.0),
        };
        WordPose {
            y_percent,
            opacity,
            delay,
            duration,
        }
    }

    pub fn background_pose(&self, section: usize) -> BgPose {
        let current = self.displayed;
        let d = self.durations.change;
        let from = self.transition.map(|t| t.from);
        let entering = self.transition.is_some() && section == current;
        match self.bg_transition {
            BgTransition::Fade => {
                if section == current {
                    BgPose {
                        opacity: 1.0,
                        scale: 1.0,
                        y_percent: 0.0,
                        clip: None,
                        duration: if entering { d } else { 0.0 },
                    }
                } else if Some(section) == from {
                    let y = if section < current {
                        -self.parallax
                    } else {
                        self.parallax
                    };
                    BgPose {
                        opacity: 0.0,
                        scale: 1.0,
                        y_percent: y,
                        clip: None,
                        duration: d,
                    }
                } else {
                    BgPose {
                        opacity: 0.0,
                        scale: BG_PARK_SCALE,
                        y_percent: if section < current { -1.0 } else { 1.0 },
                        clip: None,
                        duration: 0.0,
                    }
                }
            }
            BgTransition::Clip => {
                if section == current {
                    BgPose {
                        opacity: 1.0,
                        scale: 1.0,
                        y_percent: 0.0,
                        clip: Some("inset(0 0 0 0)"),
                        duration: if entering { d } else { 0.0 },
                    }
                } else if Some(section) == from {
                    BgPose {
                        opacity: 0.0,
                        scale: 1.0,
                        y_percent: 0.0,
                        clip: Some("inset(0 0 0 0)"),
                        duration: d * 0.8,
                    }
                } else {
                    BgPose {
                        opacity: 0.0,
                        scale: 1.0,
                        y_percent: 0.0,
                        clip: Some(if section > current {
                            "inset(100% 0 0 0)"
                        } else {
                            "inset(0 0 100% 0)"
                        }),
                        duration: 0.0,
                    }
                }
            }
        }
    }

    pub fn rail_pose(&self, item: usize, side: RailSide) -> RailPose {
        let active = item == self.displayed;
        let nudge = match side {
            RailSide::Left => RAIL_NUDGE_PX,
            RailSide::Right => -RAIL_NUDGE_PX,
        };
        RailPose {
            active,
            opacity: if active { 1.0 } else { RAIL_DIM_OPACITY },
            x: if active { nudge } else { 0.0 },
            duration: self.durations.change * 0.6,
        }
    }

    /// Vertical offset that centres the active rail row in a container of
    /// `container_h`.
    pub fn rail_offset(container_h: f64, row_h: f64, index: usize) -> f64 {
        container_h / 2.0 - row_h / 2.0 - index as f64 * row_h
    }
}

fn stagger_step(t: FxTransition, word: usize, word_count: usize, each: f64) -> f64 {
    let order = match t.direction() {
        Direction::Down => word,
        Direction::Up => word_count.saturating_sub(1).saturating_sub(word),
    };
    order as f64 * each
}

/// Scroll offsets at which each section of a pinned region begins.
pub fn snap_positions(top: f64, height: f64, total: usize) -> Vec<f64> {
    (0..total)
        .map(|i| top + height * i as f64 / total as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_on_matches_on_progress() {
        let mut fx = fx(4);
        assert!(!fx.steps_on(0.1));
        assert!(fx.on_progress(0.1).is_none());

        assert!(fx.steps_on(0.6));
        fx.on_progress(0.6).unwrap();
        // mid-animation nothing else starts
        assert!(!fx.steps_on(0.9));
        assert!(fx.on_progress(0.9).is_none());

        fx.finish_transition();
        fx.finish_snap();
        assert!(!fx.steps_on(0.3));
        assert!(fx.steps_on(0.6));

        fx.set_reduce_motion(true);
        assert!(!fx.steps_on(0.9));
    }

    fn fx(total: usize) -> ScrollFx {
        ScrollFx::new(total, 0, FxDurations::default(), false)
    }

    fn settle(fx: &mut ScrollFx) {
        fx.finish_transition();
        fx.finish_snap();
    }

    #[test]
    fn test_initial_index_is_clamped() {
        let fx = ScrollFx::new(4, 9, FxDurations::default(), false);
        assert_eq!(fx.index(), 3);
        assert_eq!(fx.displayed(), 3);
        let empty = ScrollFx::new(0, 2, FxDurations::default(), false);
        assert_eq!(empty.index(), 0);
    }

    #[test]
    fn test_target_for_progress() {
        let fx = fx(4);
        assert_eq!(fx.target_for_progress(0.0), 0);
        assert_eq!(fx.target_for_progress(0.24), 0);
        assert_eq!(fx.target_for_progress(0.25), 1);
        assert_eq!(fx.target_for_progress(0.99), 3);
        assert_eq!(fx.target_for_progress(1.0), 3);
        assert_eq!(fx.target_for_progress(-2.0), 0);
    }

    #[test]
    fn test_progress_steps_one_section_at_a_time() {
        let mut fx = fx(4);
        let t = fx.on_progress(0.95).expect("should start a transition");
        assert_eq!(t, FxTransition { from: 0, to: 1 });
        assert_eq!(t.direction(), Direction::Down);
        assert_eq!(fx.displayed(), 1);
        assert_eq!(fx.index(), 0);
        settle(&mut fx);
        assert_eq!(fx.index(), 1);
        let t = fx.on_progress(0.95).unwrap();
        assert_eq!(t, FxTransition { from: 1, to: 2 });
    }

    #[test]
    fn test_no_new_transition_while_animating() {
        let mut fx = fx(4);
        fx.on_progress(0.3).unwrap();
        fx.finish_snap();
        assert!(fx.is_animating());
        assert_eq!(fx.on_progress(0.6), None);
        assert_eq!(fx.go_to(3), None);
        fx.finish_transition();
        assert_eq!(fx.go_to(3), Some(FxTransition { from: 1, to: 3 }));
    }

    #[test]
    fn test_snapping_ignores_progress() {
        let mut fx = fx(4);
        fx.go_to(2).unwrap();
        fx.finish_transition();
        assert!(fx.is_snapping());
        assert_eq!(fx.on_progress(0.0), None);
        fx.finish_snap();
        assert_eq!(fx.on_progress(0.0), Some(FxTransition { from: 2, to: 1 }));
    }

    #[test]
    fn test_reduce_motion_ignores_progress_but_allows_jumps() {
        let mut fx = ScrollFx::new(4, 0, FxDurations::default(), true);
        assert_eq!(fx.on_progress(0.9), None);
        assert_eq!(fx.go_to(2), Some(FxTransition { from: 0, to: 2 }));
    }

    #[test]
    fn test_go_to_same_index_is_noop() {
        let mut fx = fx(3);
        assert_eq!(fx.go_to(0), None);
        assert!(!fx.is_snapping());
        assert_eq!(fx.prev(), None);
    }

    #[test]
    fn test_next_and_prev_clamp() {
        let mut fx = ScrollFx::new(2, 1, FxDurations::default(), false);
        assert_eq!(fx.next(), None);
        assert_eq!(fx.prev(), Some(FxTransition { from: 1, to: 0 }));
        assert_eq!(fx.transition().unwrap().direction(), Direction::Up);
    }

    #[test]
    fn test_progress_percent_and_counter() {
        let mut fx = fx(4);
        assert_eq!(fx.progress_percent(), 0.0);
        fx.go_to(3).unwrap();
        assert_eq!(fx.progress_percent(), 100.0);
        let single = ScrollFx::new(1, 0, FxDurations::default(), false);
        assert_eq!(single.progress_percent(), 0.0);
        assert_eq!(ScrollFx::counter_label(0), "01");
        assert_eq!(ScrollFx::counter_label(11), "12");
    }

    #[test]
    fn test_snap_release() {
        let fx = fx(4);
        assert_eq!(fx.snap_release_ms(true), 800);
        assert_eq!(fx.snap_release_ms(false), 10);
    }

    #[test]
    fn test_snap_positions() {
        assert_eq!(
            snap_positions(100.0, 400.0, 4),
            vec![100.0, 200.0, 300.0, 400.0]
        );
        assert!(snap_positions(0.0, 100.0, 0).is_empty());
    }

    #[test]
    fn test_word_poses_moving_down() {
        let mut fx = fx(3);
        fx.go_to(1).unwrap();
        // incoming words settle and stagger forward
        let first = fx.word_pose(1, 0, 2);
        let second = fx.word_pose(1, 1, 2);
        assert_eq!((first.y_percent, first.opacity), (0.0, 1.0));
        assert_eq!(first.delay, 0.0);
        assert!((second.delay - 0.05).abs() < 1e-9);
        assert!((first.duration - 0.7).abs() < 1e-9);
        // outgoing words leave upwards
        let out = fx.word_pose(0, 0, 3);
        assert_eq!((out.y_percent, out.opacity), (-100.0, 0.0));
        assert!((out.duration - 0.42).abs() < 1e-9);
        // bystanders wait below without animating
        let parked = fx.word_pose(2, 0, 3);
        assert_eq!((parked.y_percent, parked.duration), (100.0, 0.0));
    }

    #[test]
    fn test_word_stagger_reverses_moving_up() {
        let mut fx = ScrollFx::new(3, 2, FxDurations::default(), false);
        fx.go_to(1).unwrap();
        let last = fx.word_pose(1, 2, 3);
        let first = fx.word_pose(1, 0, 3);
        assert_eq!(last.delay, 0.0);
        assert!((first.delay - 0.1).abs() < 1e-9);
        let out = fx.word_pose(2, 0, 1);
        assert_eq!(out.y_percent, 100.0);
    }

    #[test]
    fn test_background_fade_poses() {
        let mut fx = fx(3).with_background(BgTransition::Fade, 4.0);
        let still = fx.background_pose(0);
        assert_eq!((still.opacity, still.duration), (1.0, 0.0));
        fx.go_to(1).unwrap();
        let incoming = fx.background_pose(1);
        assert_eq!((incoming.opacity, incoming.scale), (1.0, 1.0));
        assert!((incoming.duration - 0.7).abs() < 1e-9);
        let outgoing = fx.background_pose(0);
        assert_eq!((outgoing.opacity, outgoing.y_percent), (0.0, -4.0));
        let parked = fx.background_pose(2);
        assert_eq!((parked.scale, parked.y_percent), (1.04, 1.0));
    }

    #[test]
    fn test_background_clip_poses() {
        let mut fx = fx(3).with_background(BgTransition::Clip, 4.0);
        fx.go_to(1).unwrap();
        assert_eq!(fx.background_pose(1).clip, Some("inset(0 0 0 0)"));
        assert_eq!(fx.background_pose(2).clip, Some("inset(100% 0 0 0)"));
        assert!((fx.background_pose(0).duration - 0.56).abs() < 1e-9);
        assert!(fx.background_pose(1).style().contains("clip-path: inset(0 0 0 0)"));
    }

    #[test]
    fn test_rail_poses_and_offset() {
        let mut fx = fx(4);
        fx.go_to(2).unwrap();
        let left = fx.rail_pose(2, RailSide::Left);
        let right = fx.rail_pose(2, RailSide::Right);
        assert!(left.active);
        assert_eq!((left.x, right.x), (10.0, -10.0));
        let dim = fx.rail_pose(0, RailSide::Left);
        assert_eq!((dim.opacity, dim.x), (0.35, 0.0));
        assert_eq!(ScrollFx::rail_offset(200.0, 40.0, 0), 80.0);
        assert_eq!(ScrollFx::rail_offset(200.0, 40.0, 2), 0.0);
        assert_eq!(ScrollFx::rail_offset(0.0, 2.0, 1), -3.0);
    }
}
