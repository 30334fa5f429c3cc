use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::errors::PreferenceError;
use crate::broadcast::{Broadcast, SubscriptionId};

/// Durable string key-value slots scoped to one origin.
pub trait StorageArea: Clone + 'static {
    fn get_item(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Notification delivered to other handles when a slot changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    pub key: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

#[derive(Default)]
struct Origin {
    items: HashMap<String, String>,
    handles: Vec<Weak<HandleInner>>,
    next_handle: u64,
}

impl Origin {
    /// Drop handles whose every clone has gone away.
    fn prune(&mut self) {
        self.handles.retain(|handle| handle.strong_count() > 0);
    }
}

struct HandleInner {
    id: u64,
    changes: Broadcast<StorageChange>,
}

/// In-memory storage shared by every tab of one origin.
#[derive(Clone, Default)]
pub struct OriginStorage {
    origin: Rc<RefCell<Origin>>,
}

impl OriginStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a per-tab handle onto this origin's storage.
    pub fn open(&self) -> StorageHandle {
        let mut origin = self.origin.borrow_mut();
        origin.prune();
        origin.next_handle += 1;
        let inner = Rc::new(HandleInner {
            id: origin.next_handle,
            changes: Broadcast::new(),
        });
        origin.handles.push(Rc::downgrade(&inner));
        StorageHandle {
            origin: self.clone(),
            inner,
        }
    }
}

/// One tab's view of an [`OriginStorage`].
///
/// Writes through a handle notify every *other* handle of the origin, the
/// way browsers fire `storage` events only in the tabs that did not write.
#[derive(Clone)]
pub struct StorageHandle {
    origin: OriginStorage,
    inner: Rc<HandleInner>,
}

impl StorageHandle {
    /// Listen for writes made by other handles.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&StorageChange) + 'static,
    {
        self.inner.changes.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.changes.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.changes.len()
    }
}

impl StorageArea for StorageHandle {
    fn get_item(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.origin.origin.borrow().items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let (change, peers) = {
            let mut origin = self.origin.origin.borrow_mut();
            let old_value =
                origin.items.insert(key.to_string(), value.to_string());
            if old_value.as_deref() == Some(value) {
                return Ok(());
            }
            origin.prune();
            let peers: Vec<Broadcast<StorageChange>> = origin
                .handles
                .iter()
                .filter_map(Weak::upgrade)
                .filter(|peer| peer.id != self.inner.id)
                .map(|peer| peer.changes.clone())
                .collect();
            let change = StorageChange {
                key: key.to_string(),
                old_value,
                new_value: Some(value.to_string()),
            };
            (change, peers)
        };

        for peer in peers {
            peer.emit(&change);
        }
        Ok(())
    }
}
