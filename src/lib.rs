//! doniai library - terminal client for the Doniai blog
//!
//! This library exposes the core functionality of doniai for testing purposes.

pub mod app;
pub mod clock;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod layout;
pub mod notification;
pub mod publish;
pub mod scroll;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, Screen};
pub use config::Config;
pub use notification::NotificationCenter;
