const LOOK_AHEAD: f64 = 0.15;

/// Active entry of a scroll-driven timeline with `count` entries.
///
/// Each entry owns an equal share of the scroll progress; the next entry
/// activates slightly before its share begins.
pub fn timeline_index(progress: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let step = 1.0 / count as f64;
    let buffered = step * LOOK_AHEAD;
    let index = ((progress.max(0.0) + buffered) / step).floor() as usize;
    index.min(count - 1)
}

/// Progress rounded down to the start of the current entry's share.
pub fn snapped_progress(progress: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let step = 1.0 / count as f64;
    ((progress.max(0.0) / step).floor() * step).min(1.0)
}

/// Height of the timeline's filled rail, as a percentage of its track.
pub fn rail_fill_percent(progress: f64, count: usize) -> f64 {
    (snapped_progress(progress, count) * 100.0).clamp(0.0, 100.0)
}

/// Scroll progress (0..=1) through a region taller than the viewport, from
/// its top meeting the viewport top to its bottom meeting the viewport bottom.
///
/// `top` is the region's viewport-relative top, as reported by
/// `getBoundingClientRect`.
pub fn pinned_progress(top: f64, height: f64, viewport_h: f64) -> f64 {
    let range = height - viewport_h;
    if range <= 0.0 {
        return if top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-top / range).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_index_with_buffer() {
        assert_eq!(timeline_index(0.0, 3), 0);
        assert_eq!(timeline_index(0.2, 3), 0);
        // 1/3 - 0.05 is inside the look-ahead window
        assert_eq!(timeline_index(0.29, 3), 1);
        assert_eq!(timeline_index(0.62, 3), 2);
        assert_eq!(timeline_index(1.0, 3), 2);
        assert_eq!(timeline_index(0.5, 0), 0);
    }

    #[test]
    fn test_pinned_progress() {
        assert_eq!(pinned_progress(120.0, 4000.0, 1000.0), 0.0);
        assert_eq!(pinned_progress(0.0, 4000.0, 1000.0), 0.0);
        assert_eq!(pinned_progress(-1500.0, 4000.0, 1000.0), 0.5);
        assert_eq!(pinned_progress(-3500.0, 4000.0, 1000.0), 1.0);
        // regions no taller than the viewport jump straight through
        assert_eq!(pinned_progress(10.0, 800.0, 1000.0), 0.0);
        assert_eq!(pinned_progress(-10.0, 800.0, 1000.0), 1.0);
    }

    #[test]
    fn test_rail_fill_stays_inside_track() {
        assert_eq!(rail_fill_percent(0.0, 3), 0.0);
        assert!((rail_fill_percent(0.5, 3) - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(rail_fill_percent(1.0, 3), 100.0);
        assert_eq!(rail_fill_percent(1.7, 3), 100.0);
        assert_eq!(rail_fill_percent(0.5, 0), 0.0);
    }

    #[test]
    fn test_snapped_progress() {
        assert_eq!(snapped_progress(0.1, 4), 0.0);
        assert_eq!(snapped_progress(0.3, 4), 0.25);
        assert_eq!(snapped_progress(0.99, 4), 0.75);
        assert_eq!(snapped_progress(1.0, 4), 1.0);
        assert_eq!(snapped_progress(0.4, 0), 0.0);
    }
}
