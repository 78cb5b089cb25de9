//! Hover Reconciler
//!
//! Keeps the store's filmstrip hover flag in line with where the pointer is.
//!
//! Pointer enter/leave events update the local hover value immediately and
//! (re)schedule a notify. Crossing between the thumbnail regions produces
//! leave/enter pairs in quick succession, so the notify is debounced: it runs
//! once the events have been quiet for [`HOVER_NOTIFY_DEBOUNCE`]. When it runs
//! it reads the hover value as it is *then*, compares it with the store, and
//! dispatches only on a difference.

use super::debounce::Debouncer;
use crate::events::Action;
use crate::store::StateContainer;
use logging::Logger;
use std::time::{Duration, Instant};

/// Quiet period required before a hover change is pushed to the store
pub const HOVER_NOTIFY_DEBOUNCE: Duration = Duration::from_millis(100);

/// Debounced bridge between pointer events and the shared hover flag
#[derive(Debug)]
pub struct HoverReconciler {
    is_hovered: bool,
    dock_toolbox_on_hover: bool,
    mounted: bool,
    notify: Debouncer,
    logger: Logger,
}

impl HoverReconciler {
    /// Creates a reconciler for a freshly mounted filmstrip.
    ///
    /// With `dock_toolbox_on_hover` set, each hover change also docks or
    /// releases the toolbox.
    pub fn new(dock_toolbox_on_hover: bool, logger: Logger) -> Self {
        Self {
            is_hovered: false,
            dock_toolbox_on_hover,
            mounted: true,
            notify: Debouncer::new(HOVER_NOTIFY_DEBOUNCE),
            logger,
        }
    }

    /// Local hover value, which may be ahead of the store
    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    pub fn is_notify_pending(&self) -> bool {
        self.notify.is_pending()
    }

    /// Time until the pending notify is due, so the host can wake up for it
    pub fn time_until_notify(&self, now: Instant) -> Option<Duration> {
        self.notify.time_until_due(now)
    }

    pub fn on_pointer_enter(&mut self, now: Instant) {
        self.set_hovered(true, now);
    }

    pub fn on_pointer_leave(&mut self, now: Instant) {
        self.set_hovered(false, now);
    }

    fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if !self.mounted {
            return;
        }

        self.is_hovered = hovered;
        if self.notify.schedule(now) {
            self.logger.debug(&format!(
                "[HOVER] Pointer {} before notify ran, rescheduled",
                if hovered { "entered" } else { "left" }
            ));
        }
    }

    /// Runs the notify if its debounce window has elapsed.
    ///
    /// Returns the number of actions dispatched (0, 1 or 2).
    pub fn poll<S>(&mut self, now: Instant, store: &mut S) -> usize
    where
        S: StateContainer + ?Sized,
    {
        if !self.notify.fire_if_due(now) {
            return 0;
        }
        self.notify_hover_state(store)
    }

    /// Pushes the current hover value to `store` if it differs from the
    /// store's flag.
    ///
    /// The docking update, when enabled, is dispatched before the hover flag.
    /// Returns the number of actions dispatched.
    pub fn notify_hover_state<S>(&self, store: &mut S) -> usize
    where
        S: StateContainer + ?Sized,
    {
        let hovered = self.is_hovered;
        if store.state().filmstrip.hovered == hovered {
            return 0;
        }

        self.logger
            .debug(&format!("[HOVER] Hover settled at {}", hovered));

        let mut dispatched = 0;
        if self.dock_toolbox_on_hover {
            store.dispatch(Action::DockToolbox(hovered));
            dispatched += 1;
        }
        store.dispatch(Action::SetFilmstripHovered(hovered));
        dispatched + 1
    }

    /// Cancels any pending notify and ignores further pointer events
    pub fn teardown(&mut self) {
        self.mounted = false;
        if self.notify.cancel() {
            self.logger
                .debug("[HOVER] Pending notify cancelled on teardown");
        }
    }
}
