//! Scrolling for the home page
//!
//! `ScrollState` tracks the viewport; `ScrollWatcher` decides from a sample of
//! it whether the jump-to-top and jump-to-bottom buttons are shown.

mod scroll_state;
mod scroll_watcher;

pub use scroll_state::ScrollState;
pub use scroll_watcher::{DEFAULT_SCROLL_THRESHOLD, NavButtons, ScrollWatcher};
