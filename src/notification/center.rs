//! Notification center
//!
//! Owns the region and every mounted notification. Constructed once at
//! startup and handed by reference to whatever needs to show messages.
//!
//! All state changes go through [`NotificationCenter::dispatch`]: timers fire
//! typed events into it, and `dismiss` is just another event. Timers are never
//! cancelled; an event that no longer applies is dispatched and ignored.

use std::time::{Duration, Instant};

use super::notification_state::{
    DEFAULT_AUTO_DISMISS, Dispatch, ENTER_TRANSITION, EXIT_TRANSITION, Notification,
    NotificationEvent, NotificationId, Phase, Severity,
};
use super::region::Region;
use super::timer_queue::TimerQueue;
use crate::clock::{Clock, SystemClock};

/// Counts of timer events handled by one `tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub applied: usize,
    pub ignored: usize,
}

impl TickReport {
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

#[derive(Debug)]
pub struct NotificationCenter {
    region: Option<Region>,
    active: Vec<Notification>,
    timers: TimerQueue,
    next_id: u64,
    default_duration: Duration,
    max_active: Option<usize>,
    clock: Box<dyn Clock>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            region: None,
            active: Vec::new(),
            timers: TimerQueue::new(),
            next_id: 1,
            default_duration: DEFAULT_AUTO_DISMISS,
            max_active: None,
            clock,
        }
    }

    /// Auto-dismiss delay used by the severity shortcuts
    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }

    /// Cap on notifications that are not already on their way out
    pub fn with_max_active(mut self, max_active: Option<usize>) -> Self {
        self.max_active = max_active.filter(|&n| n > 0);
        self
    }

    /// Create the region if it does not exist yet
    ///
    /// Returns `true` only for the call that created it.
    pub fn initialize(&mut self) -> bool {
        if self.region.is_some() {
            return false;
        }
        self.region = Some(Region::default());
        log::debug!("Notification region initialized");
        true
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Mount a new notification and schedule its lifecycle timers
    ///
    /// An `auto_dismiss` of zero keeps it until `dismiss` is called, as does
    /// one too long to land on the clock.
    pub fn notify(
        &mut self,
        message: &str,
        severity: Severity,
        auto_dismiss: Duration,
    ) -> NotificationId {
        self.initialize();

        let now = self.clock.now();
        self.enforce_capacity(now);

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        self.active
            .push(Notification::new(id, message, severity, auto_dismiss, now));
        self.timers
            .schedule(now + ENTER_TRANSITION, NotificationEvent::EnterComplete(id));
        if !auto_dismiss.is_zero()
            && let Some(due) = now.checked_add(auto_dismiss)
        {
            self.timers.schedule(due, NotificationEvent::AutoDismissElapsed(id));
        }

        log::debug!("Notification {} ({:?}) mounted: {}", id, severity, message);
        id
    }

    pub fn info(&mut self, message: &str) -> NotificationId {
        self.info_for(message, self.default_duration)
    }

    pub fn success(&mut self, message: &str) -> NotificationId {
        self.success_for(message, self.default_duration)
    }

    pub fn warning(&mut self, message: &str) -> NotificationId {
        self.warning_for(message, self.default_duration)
    }

    pub fn error(&mut self, message: &str) -> NotificationId {
        self.error_for(message, self.default_duration)
    }

    /// `info` with its own auto-dismiss delay; zero keeps it until dismissed
    pub fn info_for(&mut self, message: &str, auto_dismiss: Duration) -> NotificationId {
        self.notify(message, Severity::Info, auto_dismiss)
    }

    pub fn success_for(&mut self, message: &str, auto_dismiss: Duration) -> NotificationId {
        self.notify(message, Severity::Success, auto_dismiss)
    }

    pub fn warning_for(&mut self, message: &str, auto_dismiss: Duration) -> NotificationId {
        self.notify(message, Severity::Warning, auto_dismiss)
    }

    pub fn error_for(&mut self, message: &str, auto_dismiss: Duration) -> NotificationId {
        self.notify(message, Severity::Error, auto_dismiss)
    }

    /// Start the exit transition
    ///
    /// No-op for unknown handles and for notifications already leaving.
    pub fn dismiss(&mut self, id: NotificationId) -> Dispatch {
        let now = self.clock.now();
        self.dispatch(NotificationEvent::DismissRequested(id), now)
    }

    /// Dismiss the most recently mounted notification that is still shown
    pub fn dismiss_newest(&mut self) -> Dispatch {
        let newest = self
            .active
            .iter()
            .rev()
            .find(|n| n.phase < Phase::Dismissing)
            .map(|n| n.id);

        match newest {
            Some(id) => self.dismiss(id),
            None => Dispatch::Ignored,
        }
    }

    /// Fire every timer that is due, including ones scheduled along the way
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.now();
        let mut report = TickReport::default();

        while let Some((due, event)) = self.timers.pop_due(now) {
            match self.dispatch(event, due) {
                Dispatch::Applied => report.applied += 1,
                Dispatch::Ignored => report.ignored += 1,
            }
        }

        report
    }

    /// Apply one event at instant `at`
    ///
    /// Follow-up timers are scheduled relative to `at`, so events replayed by a
    /// late tick keep their original timeline.
    pub fn dispatch(&mut self, event: NotificationEvent, at: Instant) -> Dispatch {
        let id = event.id();
        let Some(index) = self.active.iter().position(|n| n.id == id) else {
            return Dispatch::Ignored;
        };

        let Some(next) = self.active[index].phase.on(event) else {
            log::trace!("Notification {} ignored {:?}", id, event);
            return Dispatch::Ignored;
        };

        match next {
            Phase::Dismissing => {
                self.active[index].phase = Phase::Dismissing;
                self.timers
                    .schedule(at + EXIT_TRANSITION, NotificationEvent::ExitComplete(id));
            }
            Phase::Removed => {
                self.active.remove(index);
                log::debug!("Notification {} removed", id);
            }
            phase => self.active[index].phase = phase,
        }

        Dispatch::Applied
    }

    /// Mounted notifications in display order
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id == id)
    }

    /// Phase of a handle; `Removed` once it has been unmounted
    pub fn phase(&self, id: NotificationId) -> Option<Phase> {
        match self.get(id) {
            Some(n) => Some(n.phase),
            None if id.0 > 0 && id.0 < self.next_id => Some(Phase::Removed),
            None => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether anything is animating or waiting on a timer
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn next_timer_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    fn enforce_capacity(&mut self, now: Instant) {
        let Some(max) = self.max_active else {
            return;
        };

        let shown = self
            .active
            .iter()
            .filter(|n| n.phase < Phase::Dismissing)
            .count();
        if shown < max {
            return;
        }

        let to_evict: Vec<NotificationId> = self
            .active
            .iter()
            .filter(|n| n.phase < Phase::Dismissing)
            .take(shown + 1 - max)
            .map(|n| n.id)
            .collect();

        for id in to_evict {
            self.dispatch(NotificationEvent::DismissRequested(id), now);
        }
    }
}

#[cfg(test)]
#[path = "center_tests.rs"]
mod center_tests;
