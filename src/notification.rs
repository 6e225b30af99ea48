//! Notification module for doniai
//!
//! Provides the notification center that displays transient messages.
//! Any component in the application can show a message through it.

mod center;
mod notification_render;
mod notification_state;
mod region;
mod timer_queue;

pub use center::{NotificationCenter, TickReport};
pub use notification_render::render_notifications;
pub use notification_state::{
    DEFAULT_AUTO_DISMISS, Dispatch, ENTER_TRANSITION, EXIT_TRANSITION, Notification,
    NotificationEvent, NotificationId, Phase, Severity, sanitize_message,
};
pub use region::Region;
