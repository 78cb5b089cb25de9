//! Coalescing Scheduler
//!
//! Holds at most one pending deadline. Scheduling again before the deadline
//! replaces it, so only the trailing trigger of a burst ever fires. The host
//! loop supplies the current time, which keeps the scheduler deterministic
//! and lets it run on the UI thread without timers.

use std::time::{Duration, Instant};

/// Trailing-edge debouncer over a single deferred task
#[derive(Clone, Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Creates an idle debouncer with the given quiescence window
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedules the task to run `window` after `now`, replacing any pending
    /// schedule. Returns true if a pending schedule was superseded.
    pub fn schedule(&mut self, now: Instant) -> bool {
        self.deadline.replace(now + self.window).is_some()
    }

    /// Drops the pending schedule. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the pending task is due; zero once overdue
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consumes the pending schedule if its deadline has been reached.
    ///
    /// Returns true exactly once per settled burst; the caller runs the task.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(100);

    #[test]
    fn test_idle_never_fires() {
        let mut debouncer = Debouncer::new(WINDOW);
        let now = Instant::now();

        assert_eq!(debouncer.window(), WINDOW);
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_if_due(now + WINDOW * 10));
        assert_eq!(debouncer.time_until_due(now), None);
    }

    #[test]
    fn test_fires_once_after_window() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        assert!(!debouncer.schedule(start));
        assert!(!debouncer.fire_if_due(start + Duration::from_millis(99)));
        assert!(debouncer.fire_if_due(start + WINDOW));
        assert!(!debouncer.fire_if_due(start + WINDOW * 2));
    }

    #[test]
    fn test_reschedule_pushes_deadline_back() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.schedule(start);
        assert!(debouncer.schedule(start + Duration::from_millis(60)));

        // The first deadline has passed but was superseded.
        assert!(!debouncer.fire_if_due(start + Duration::from_millis(120)));
        assert!(debouncer.fire_if_due(start + Duration::from_millis(160)));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.schedule(start);
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert!(!debouncer.fire_if_due(start + WINDOW));
    }

    #[test]
    fn test_time_until_due_saturates() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.schedule(start);
        assert_eq!(
            debouncer.time_until_due(start + Duration::from_millis(30)),
            Some(Duration::from_millis(70))
        );
        assert_eq!(
            debouncer.time_until_due(start + WINDOW * 3),
            Some(Duration::ZERO)
        );
    }
}
