//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where components were drawn during the last render
//! pass, and `region_at()` determines which component is at a screen position.

mod layout_hit_test;
mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};

#[cfg(test)]
#[path = "layout/layout_hit_test_tests.rs"]
mod layout_hit_test_tests;
