//! Scroll-driven page helpers: sticky navbar, active section, reveal stagger.

use std::time::Duration;

/// Navbar switches to its compact style past this many pixels
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 30.0;

/// Look-ahead added to the scroll position when picking the active section
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

const REVEAL_STEP_MS: u64 = 80;
const REVEAL_MAX_MS: u64 = 400;

/// Vertical extent of a page section, in document pixels
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// Id of the section the nav should highlight, if any.
///
/// When sections overlap the last matching one wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .filter(|s| s.contains(probe))
        .last()
        .map(|s| s.id.as_str())
}

/// Stagger delay for the `position`-th element revealed in a group.
pub fn reveal_delay(position: usize) -> Duration {
    let ms = (position as u64)
        .saturating_mul(REVEAL_STEP_MS)
        .min(REVEAL_MAX_MS);
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("hero", 0.0, 700.0),
            SectionBounds::new("about", 700.0, 500.0),
            SectionBounds::new("projects", 1200.0, 900.0),
        ]
    }

    #[test]
    fn test_navbar_threshold() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(30.0));
        assert!(navbar_scrolled(30.5));
    }

    #[test]
    fn test_active_section_uses_offset() {
        let s = sections();
        assert_eq!(active_section(0.0, &s), Some("hero"));
        assert_eq!(active_section(599.0, &s), Some("hero"));
        assert_eq!(active_section(600.0, &s), Some("about"));
        assert_eq!(active_section(1100.0, &s), Some("projects"));
    }

    #[test]
    fn test_no_active_section_past_end() {
        assert_eq!(active_section(5000.0, &sections()), None);
    }

    #[test]
    fn test_overlap_last_wins() {
        let s = vec![
            SectionBounds::new("a", 0.0, 1000.0),
            SectionBounds::new("b", 0.0, 1000.0),
        ];
        assert_eq!(active_section(10.0, &s), Some("b"));
    }

    #[test]
    fn test_reveal_delay_caps() {
        assert_eq!(reveal_delay(0), Duration::ZERO);
        assert_eq!(reveal_delay(3), Duration::from_millis(240));
        assert_eq!(reveal_delay(5), Duration::from_millis(400));
        assert_eq!(reveal_delay(50), Duration::from_millis(400));
        assert_eq!(reveal_delay(usize::MAX), Duration::from_millis(400));
    }
}
