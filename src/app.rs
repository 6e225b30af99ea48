mod app_events;
mod app_render;
mod app_state;
mod home_content;
mod mouse_click;
mod mouse_events;
mod mouse_scroll;

// Re-export public types
pub use app_state::{App, Screen};
