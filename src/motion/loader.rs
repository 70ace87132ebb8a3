use super::{stagger_delays, StaggerFrom};

pub const LINES_DESKTOP: usize = 10;
pub const LINES_MOBILE: usize = 6;

const LETTER_STAGGER: f64 = 0.05;
const LETTER_DURATION: f64 = 0.3;
const LINES_PAUSE: f64 = 1.0;
const LINE_STAGGER: f64 = 0.1;
const LINE_DURATION: f64 = 0.6;
const TEXT_FADE_DURATION: f64 = 0.3;
const OVERLAY_FADE_DURATION: f64 = 0.2;

/// Timing of the intro overlay: letters rise in, the background columns slide
/// away, the text fades, then the overlay itself fades out.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderTimeline {
    pub text: String,
    pub lines: usize,
    pub stagger_from: StaggerFrom,
    pub text_fade_delay: f64,
}

impl LoaderTimeline {
    pub fn new(text: &str, mobile: bool) -> Self {
        Self {
            text: text.to_string(),
            lines: Self::lines_for_width(mobile),
            stagger_from: StaggerFrom::Center,
            text_fade_delay: 0.5,
        }
    }

    pub fn lines_for_width(mobile: bool) -> usize {
        if mobile {
            LINES_MOBILE
        } else {
            LINES_DESKTOP
        }
    }

    pub fn letters(&self) -> Vec<char> {
        self.text.chars().collect()
    }

    pub fn letter_delay(&self, index: usize) -> f64 {
        index as f64 * LETTER_STAGGER
    }

    pub fn letter_duration(&self) -> f64 {
        LETTER_DURATION
    }

    pub fn letters_end(&self) -> f64 {
        let count = self.text.chars().count();
        if count == 0 {
            return 0.0;
        }
        self.letter_delay(count - 1) + LETTER_DURATION
    }

    pub fn lines_start(&self) -> f64 {
        self.letters_end() + LINES_PAUSE
    }

    /// Absolute start time of each background column's exit.
    pub fn line_starts(&self) -> Vec<f64> {
        let start = self.lines_start();
        stagger_delays(self.lines, LINE_STAGGER, self.stagger_from)
            .into_iter()
            .map(|d| start + d)
            .collect()
    }

    pub fn line_duration(&self) -> f64 {
        LINE_DURATION
    }

    pub fn line_width_percent(&self) -> f64 {
        100.0 / self.lines.max(1) as f64
    }

    fn lines_end(&self) -> f64 {
        self.line_starts()
            .into_iter()
            .fold(self.lines_start(), f64::max)
            + LINE_DURATION
    }

    pub fn text_fade_start(&self) -> f64 {
        self.lines_start() + self.text_fade_delay
    }

    pub fn text_fade_duration(&self) -> f64 {
        TEXT_FADE_DURATION
    }

    pub fn overlay_fade_start(&self) -> f64 {
        self.lines_end()
            .max(self.text_fade_start() + TEXT_FADE_DURATION)
    }

    pub fn overlay_fade_duration(&self) -> f64 {
        OVERLAY_FADE_DURATION
    }

    /// Seconds until the overlay is gone and the page can be revealed.
    pub fn total_duration(&self) -> f64 {
        self.overlay_fade_start() + OVERLAY_FADE_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_line_count_by_width() {
        assert_eq!(LoaderTimeline::new("WELCOME", true).lines, 6);
        assert_eq!(LoaderTimeline::new("WELCOME", false).lines, 10);
    }

    #[test]
    fn test_welcome_timeline() {
        let tl = LoaderTimeline::new("WELCOME", false);
        assert!(close(tl.letters_end(), 0.6));
        assert!(close(tl.lines_start(), 1.6));
        let starts = tl.line_starts();
        assert_eq!(starts.len(), 10);
        // centre columns leave first
        assert!(starts[4] < starts[0]);
        assert!(close(starts[4], starts[5]));
        assert!(close(tl.text_fade_start(), 2.1));
        assert!(close(tl.overlay_fade_start(), 2.65));
        assert!(close(tl.total_duration(), 2.85));
    }

    #[test]
    fn test_empty_text() {
        let tl = LoaderTimeline::new("", true);
        assert_eq!(tl.letters_end(), 0.0);
        assert!(close(tl.lines_start(), 1.0));
        assert!(tl.total_duration() > tl.lines_start());
    }

    #[test]
    fn test_line_width() {
        let tl = LoaderTimeline::new("HI", true);
        assert!(close(tl.line_width_percent(), 100.0 / 6.0));
    }
}
