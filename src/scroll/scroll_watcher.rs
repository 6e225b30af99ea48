use super::scroll_state::ScrollState;

/// Lines scrolled before the jump-to-top button appears
pub const DEFAULT_SCROLL_THRESHOLD: u16 = 10;

/// Visibility of the two navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavButtons {
    pub top_visible: bool,
    pub bottom_visible: bool,
}

/// Decides button visibility from one scroll sample
///
/// Holds no state between samples; the result depends only on the sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWatcher {
    threshold: u16,
}

impl Default for ScrollWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollWatcher {
    pub fn new(threshold: u16) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn sample(&self, scroll: &ScrollState) -> NavButtons {
        NavButtons {
            top_visible: scroll.offset > self.threshold,
            bottom_visible: !scroll.is_at_bottom(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scrolled(content: u32, viewport: u16, offset: u16) -> ScrollState {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(content, viewport);
        scroll.scroll_down(offset);
        scroll
    }

    #[test]
    fn test_at_top_of_long_page() {
        let buttons = ScrollWatcher::new(10).sample(&scrolled(100, 20, 0));
        assert_eq!(
            buttons,
            NavButtons {
                top_visible: false,
                bottom_visible: true
            }
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let watcher = ScrollWatcher::new(10);
        assert!(!watcher.sample(&scrolled(100, 20, 10)).top_visible);
        assert!(watcher.sample(&scrolled(100, 20, 11)).top_visible);
    }

    #[test]
    fn test_at_bottom_hides_bottom_button() {
        let buttons = ScrollWatcher::new(10).sample(&scrolled(100, 20, 80));
        assert!(buttons.top_visible);
        assert!(!buttons.bottom_visible);
    }

    #[test]
    fn test_short_page_shows_nothing() {
        let buttons = ScrollWatcher::default().sample(&scrolled(5, 20, 0));
        assert_eq!(buttons, NavButtons::default());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The same sample always yields the same buttons.
        #[test]
        fn prop_sample_is_stateless(
            content in 0u32..500,
            viewport in 1u16..60,
            offset in 0u16..500,
            threshold in 0u16..50,
        ) {
            let watcher = ScrollWatcher::new(threshold);
            let scroll = scrolled(content, viewport, offset);

            let first = watcher.sample(&scroll);
            let _ = watcher.sample(&scrolled(content, viewport, 0));
            prop_assert_eq!(watcher.sample(&scroll), first);
            prop_assert_eq!(first.top_visible, scroll.offset > threshold);
        }
    }
}
