//! Shared State Store
//!
//! Single owner of the [`SessionState`]. Updates arrive as [`Action`]s through
//! [`StateContainer::dispatch`] and are applied one at a time; after every
//! update that changed something, each subscriber receives the new snapshot
//! in subscription order.
//!
//! ```text
//! HoverReconciler --dispatch--> Store --snapshot--> subscribers (VisibilityFeed, ...)
//! ```

mod reducer;

use crate::events::Action;
use crate::models::SessionState;
use logging::Logger;
use std::fmt;

/// Read/dispatch access to the shared state.
///
/// The hover reconciler only depends on this trait, so tests can substitute a
/// recording container.
pub trait StateContainer {
    /// Current state snapshot
    fn state(&self) -> &SessionState;

    /// Applies `action` to the state
    fn dispatch(&mut self, action: Action);
}

/// Identifies a subscription for later removal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Returns false to end its own subscription
type Listener = Box<dyn FnMut(&SessionState) -> bool>;

/// The application's state container
pub struct Store {
    state: SessionState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    logger: Logger,
}

impl Store {
    /// Creates a store holding `initial`
    pub fn new(initial: SessionState, logger: Logger) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
            next_subscription: 0,
            logger,
        }
    }

    /// Registers `listener` to be called with every changed snapshot
    pub fn subscribe<F>(&mut self, mut listener: F) -> SubscriptionId
    where
        F: FnMut(&SessionState) + 'static,
    {
        self.subscribe_while(move |state| {
            listener(state);
            true
        })
    }

    /// Like [`Store::subscribe`], but the subscription ends the first time
    /// `listener` returns false.
    pub fn subscribe_while<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SessionState) -> bool + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        self.logger
            .debug(&format!("[STORE] Subscriber {:?} registered", id));
        id
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl StateContainer for Store {
    fn state(&self) -> &SessionState {
        &self.state
    }

    fn dispatch(&mut self, action: Action) {
        self.logger
            .debug(&format!("[STORE] Dispatching {:?}", action));

        if !reducer::reduce(&mut self.state, &action) {
            return;
        }

        let state = &self.state;
        let logger = &self.logger;
        self.listeners.retain_mut(|(id, listener)| {
            let keep = listener(state);
            if !keep {
                logger.debug(&format!("[STORE] Subscriber {:?} ended", id));
            }
            keep
        });
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LogLevel;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn test_store() -> Store {
        let (logger, _) = Logger::in_memory(LogLevel::Debug);
        Store::new(SessionState::default(), logger)
    }

    #[test]
    fn test_dispatch_updates_state() {
        let mut store = test_store();
        store.dispatch(Action::SetFilmstripHovered(true));
        assert!(store.state().filmstrip.hovered);
    }

    #[test]
    fn test_subscribers_notified_in_order_on_change() {
        let mut store = test_store();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&calls);
        store.subscribe(move |state| first.borrow_mut().push(("first", state.toolbox.docked)));
        let second = Rc::clone(&calls);
        store.subscribe(move |state| second.borrow_mut().push(("second", state.toolbox.docked)));

        store.dispatch(Action::DockToolbox(true));

        assert_eq!(*calls.borrow(), vec![("first", true), ("second", true)]);
    }

    #[test]
    fn test_unchanged_dispatch_does_not_notify() {
        let mut store = test_store();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.dispatch(Action::SetGuest(false));
        assert_eq!(*count.borrow(), 0);

        store.dispatch(Action::SetGuest(true));
        store.dispatch(Action::SetGuest(true));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut store = test_store();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        assert_eq!(store.subscriber_count(), 0);

        store.dispatch(Action::SetToolboxVisible(true));
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_subscribe_while_ends_on_false() {
        let mut store = test_store();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        store.subscribe_while(move |_| {
            *counter.borrow_mut() += 1;
            *counter.borrow() < 2
        });
        store.subscribe(|_| {});

        store.dispatch(Action::SetGuest(true));
        store.dispatch(Action::SetGuest(false));
        store.dispatch(Action::SetGuest(true));

        assert_eq!(*count.borrow(), 2);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_dispatch_is_logged() {
        let (logger, capture) = Logger::in_memory(LogLevel::Debug);
        let mut store = Store::new(SessionState::default(), logger);

        store.dispatch(Action::SetFilmstripHovered(true));

        assert!(capture.contains("[STORE] Dispatching SetFilmstripHovered(true)"));
    }
}
