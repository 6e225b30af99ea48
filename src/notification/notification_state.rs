//! Notification values and their lifecycle
//!
//! A [`Notification`] moves through [`Phase`]s driven by typed
//! [`NotificationEvent`]s. The transition table lives in [`Phase::on`] so every
//! caller (timers, clicks, keys) gets the same idempotency guarantees.

use std::fmt;
use std::time::{Duration, Instant};

/// Duration of the entrance transition (mount -> fully styled)
pub const ENTER_TRANSITION: Duration = Duration::from_millis(10);

/// Duration of the exit transition (dismiss -> unmounted)
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Auto-dismiss delay used when the caller does not pick one
pub const DEFAULT_AUTO_DISMISS: Duration = Duration::from_millis(3000);

/// Opaque handle returned by `notify`, used to request dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub(super) u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notification severity - determines icon and colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✔",
            Severity::Error => "✖",
            Severity::Warning => "⚠",
        }
    }
}

/// Lifecycle phase of a mounted notification
///
/// Phases only move forward: Entering -> Visible -> Dismissing -> Removed,
/// with Entering allowed to skip straight to Dismissing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Entering,
    Visible,
    Dismissing,
    Removed,
}

/// Something that happened to a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationEvent {
    /// Entrance transition finished
    EnterComplete(NotificationId),
    /// Auto-dismiss timer fired
    AutoDismissElapsed(NotificationId),
    /// User or code asked for dismissal
    DismissRequested(NotificationId),
    /// Exit transition finished; the notification can be unmounted
    ExitComplete(NotificationId),
}

impl NotificationEvent {
    pub fn id(self) -> NotificationId {
        match self {
            NotificationEvent::EnterComplete(id)
            | NotificationEvent::AutoDismissElapsed(id)
            | NotificationEvent::DismissRequested(id)
            | NotificationEvent::ExitComplete(id) => id,
        }
    }
}

/// Result of dispatching an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Applied,
    Ignored,
}

impl Phase {
    /// Next phase for `event`, or `None` when the event does not apply
    pub fn on(self, event: NotificationEvent) -> Option<Phase> {
        use NotificationEvent::*;

        match (self, event) {
            (Phase::Entering, EnterComplete(_)) => Some(Phase::Visible),
            (Phase::Entering | Phase::Visible, AutoDismissElapsed(_) | DismissRequested(_)) => {
                Some(Phase::Dismissing)
            }
            (Phase::Dismissing, ExitComplete(_)) => Some(Phase::Removed),
            _ => None,
        }
    }

    /// Whether the notification is rendered with its full style
    pub fn is_shown(self) -> bool {
        self == Phase::Visible
    }
}

/// A single transient message
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    /// Zero means the notification stays until dismissed
    pub auto_dismiss: Duration,
    pub phase: Phase,
    pub created_at: Instant,
}

impl Notification {
    pub(super) fn new(
        id: NotificationId,
        message: &str,
        severity: Severity,
        auto_dismiss: Duration,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            message: sanitize_message(message),
            severity,
            auto_dismiss,
            phase: Phase::Entering,
            created_at,
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.auto_dismiss.is_zero()
    }
}

/// Make a message safe to print inside the terminal
///
/// Newlines and tabs collapse to spaces; every other control character is
/// dropped so messages cannot smuggle escape sequences into the frame.
pub fn sanitize_message(message: &str) -> String {
    message
        .chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
