// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::notification::DEFAULT_AUTO_DISMISS;
use crate::scroll::DEFAULT_SCROLL_THRESHOLD;

/// Blog server section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
        }
    }
}

/// Notification section
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// Auto-dismiss delay for the shortcut methods; 0 keeps them until closed
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Unbounded when absent
    #[serde(default)]
    pub max_active: Option<usize>,
}

fn default_duration_ms() -> u64 {
    DEFAULT_AUTO_DISMISS.as_millis() as u64
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            duration_ms: default_duration_ms(),
            max_active: None,
        }
    }
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Scroll section
#[derive(Debug, Clone, Deserialize)]
pub struct ScrollConfig {
    /// Lines scrolled before the back-to-top button appears
    #[serde(default = "default_threshold")]
    pub threshold: u16,
}

fn default_threshold() -> u16 {
    DEFAULT_SCROLL_THRESHOLD
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            threshold: default_threshold(),
        }
    }
}

/// User section
#[derive(Debug, Clone, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_user_name")]
    pub name: String,
}

fn default_user_name() -> String {
    "guest".to_string()
}

impl Default for UserConfig {
    fn default() -> Self {
        UserConfig {
            name: default_user_name(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub user: UserConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
