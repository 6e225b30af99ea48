//! User menu dropdown
//!
//! A visibility flag flipped by the trigger and closed by any click outside
//! the menu, plus keyboard selection of menu items.

mod dropdown_render;
mod dropdown_state;

pub use dropdown_render::{menu_area, render_dropdown};
pub use dropdown_state::{DropdownState, MenuItem};
