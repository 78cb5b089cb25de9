//! Visibility Feed
//!
//! Connects the projector to the store: every changed snapshot is projected
//! inside the store's subscription and the result is sent over a channel. The
//! view drains the channel once per frame, the same way the app drains its
//! other event queues.

use super::projector::{VisibilityFlags, project};
use crate::config::InterfaceConfig;
use crate::store::{StateContainer, Store, SubscriptionId};
use std::sync::mpsc::{Receiver, channel};

/// Receiving end of the store → projector data flow
#[derive(Debug)]
pub struct VisibilityFeed {
    receiver: Receiver<VisibilityFlags>,
    latest: VisibilityFlags,
    subscription: SubscriptionId,
}

impl VisibilityFeed {
    /// Subscribes to `store`, projecting each snapshot with `config`.
    ///
    /// The feed starts with the projection of the store's current state.
    pub fn connect(store: &mut Store, config: InterfaceConfig) -> Self {
        let latest = project(store.state(), &config);
        let (sender, receiver) = channel();

        // A failed send means the feed was dropped; that ends the subscription.
        let subscription =
            store.subscribe_while(move |snapshot| sender.send(project(snapshot, &config)).is_ok());

        Self {
            receiver,
            latest,
            subscription,
        }
    }

    /// Drains pending projections and returns the most recent one
    pub fn latest(&mut self) -> VisibilityFlags {
        while let Ok(flags) = self.receiver.try_recv() {
            self.latest = flags;
        }
        self.latest
    }

    /// Removes the feed's subscription from `store`.
    ///
    /// A feed dropped without this is unsubscribed on the store's next change.
    pub fn disconnect(self, store: &mut Store) -> bool {
        store.unsubscribe(self.subscription)
    }
}
