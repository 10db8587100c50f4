//! Scroll position to frame index mapping.

/// Scroll state sampled from the window on each scroll tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset in pixels.
    pub scroll_y: f64,
    /// Total scrollable height of the document in pixels.
    pub document_height: f64,
    /// Height of the viewport in pixels.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Maps the scroll position linearly onto a 1-based display index.
    ///
    /// The top of the page maps to index 1 and the maximum scroll offset to
    /// index `frame_count`. A page that cannot scroll maps to index 1.
    ///
    /// The result is not clamped: elastic overscroll below the top rounds
    /// under 1 (saturating to 0) and overscroll past the bottom rounds over
    /// `frame_count`. Both are outside the sequence and leave the displayed
    /// frame unchanged when looked up.
    pub fn display_index(&self, frame_count: usize) -> usize {
        let scroll_range = self.document_height - self.viewport_height;
        if scroll_range <= 0.0 {
            return 1;
        }
        let fraction = self.scroll_y / scroll_range;
        (fraction * (frame_count as f64 - 1.0) + 1.0).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_COUNT: usize = 179;

    fn metrics(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            document_height: 5000.0,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn test_top_of_page_maps_to_first_frame() {
        assert_eq!(metrics(0.0).display_index(FRAME_COUNT), 1);
    }

    #[test]
    fn test_max_scroll_maps_to_last_frame() {
        assert_eq!(metrics(4200.0).display_index(FRAME_COUNT), FRAME_COUNT);
    }

    #[test]
    fn test_midpoint_rounds_to_middle_frame() {
        // 0.5 * 178 + 1 = 90
        assert_eq!(metrics(2100.0).display_index(FRAME_COUNT), 90);
    }

    #[test]
    fn test_non_scrollable_page_maps_to_first_frame() {
        let flat = ScrollMetrics {
            scroll_y: 0.0,
            document_height: 800.0,
            viewport_height: 800.0,
        };
        assert_eq!(flat.display_index(FRAME_COUNT), 1);
    }

    #[test]
    fn test_overscroll_lands_outside_the_sequence() {
        assert_eq!(metrics(-300.0).display_index(FRAME_COUNT), 0);
        assert!(metrics(4500.0).display_index(FRAME_COUNT) > FRAME_COUNT);
    }

    #[test]
    fn test_single_frame_sequence_pins_to_one() {
        assert_eq!(metrics(0.0).display_index(1), 1);
        assert_eq!(metrics(4200.0).display_index(1), 1);
    }
}
