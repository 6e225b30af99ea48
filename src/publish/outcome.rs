//! Turn a publish result into user feedback

use super::publish_client::{PublishError, PublishResponse};
use crate::notification::NotificationCenter;

pub const PUBLISHED_MESSAGE: &str = "Post published!";
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while publishing";

/// Where the app should go after a publish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Home,
}

/// Report `result` through the notification center
///
/// Only a successful publish navigates. A cancelled request reports nothing.
pub fn report_outcome(
    result: &Result<PublishResponse, PublishError>,
    notifications: &mut NotificationCenter,
) -> Option<Navigation> {
    match result {
        Ok(response) if response.success => {
            notifications.success(PUBLISHED_MESSAGE);
            Some(Navigation::Home)
        }
        Ok(response) => {
            let message = response.message.trim();
            if message.is_empty() {
                notifications.error("Publish failed");
            } else {
                notifications.error(&format!("Publish failed: {}", message));
            }
            None
        }
        Err(PublishError::Cancelled) => None,
        Err(e) => {
            log::warn!("Publish error: {}", e);
            notifications.error(GENERIC_FAILURE_MESSAGE);
            None
        }
    }
}
