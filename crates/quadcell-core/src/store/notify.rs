//! Subscriber list for snapshot notifications.
//!
//! Subscribers run synchronously, in registration order, after an edit has
//! finished propagating.

use super::{Snapshot, Store};
use crate::error::{QuadcellError, Result};

/// Handle returned by [`Store::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

type Callback = Box<dyn FnMut(&Snapshot)>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store {
    /// Register a callback that receives a snapshot after every edit.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let subs = &mut self.subscribers;
        let id = SubscriptionId(subs.next_id);
        subs.next_id += 1;
        subs.entries.push((id, Box::new(callback)));
        tracing::debug!(subscription = id.0, "subscriber registered");
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<()> {
        let entries = &mut self.subscribers.entries;
        let before = entries.len();
        entries.retain(|(sub, _)| *sub != id);
        if entries.len() == before {
            return Err(QuadcellError::UnknownSubscription(id.0));
        }
        tracing::debug!(subscription = id.0, "subscriber removed");
        Ok(())
    }

    pub(crate) fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, callback) in self.subscribers.entries.iter_mut() {
            callback(&snapshot);
        }
    }
}
