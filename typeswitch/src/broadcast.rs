use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Name of the same-document event announcing a new font selection.
pub const FONT_CHANGED_EVENT: &str = "fontChanged";

/// Handle returned by [`Broadcast::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

/// Single-threaded publish/subscribe channel.
///
/// Emitting snapshots the listener list first, so listeners may subscribe
/// or unsubscribe while being notified; such changes take effect from the
/// next emit.
pub struct Broadcast<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T> Default for Broadcast<T> {
    fn default() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 1,
                listeners: Vec::new(),
            })),
        }
    }
}

impl<T> fmt::Debug for Broadcast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast")
            .field("listeners", &self.len())
            .finish()
    }
}

impl<T> Broadcast<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` when it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|(entry, _)| *entry != id);
        registry.listeners.len() != before
    }

    /// Deliver `message` to every listener. Returns how many were called.
    pub fn emit(&self, message: &T) -> usize {
        let snapshot: Vec<Listener<T>> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in &snapshot {
            listener(message);
        }
        snapshot.len()
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Broadcast;

    #[test]
    fn given_listeners_when_emitting_then_each_receives_message() {
        let channel: Broadcast<String> = Broadcast::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            channel.subscribe(move |message: &String| {
                seen.borrow_mut().push(format!("{tag}:{message}"));
            });
        }

        let delivered = channel.emit(&String::from("lato"));

        assert_eq!(delivered, 2);
        assert_eq!(*seen.borrow(), vec!["a:lato", "b:lato"]);
    }

    #[test]
    fn given_unsubscribed_listener_when_emitting_then_it_is_skipped() {
        let channel: Broadcast<u32> = Broadcast::new();
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let id = channel.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(channel.unsubscribe(id));
        assert!(!channel.unsubscribe(id));
        assert_eq!(channel.emit(&7), 0);
        assert_eq!(*hits.borrow(), 0);
        assert!(channel.is_empty());
    }

    #[test]
    fn given_listener_unsubscribing_itself_when_emitting_then_no_panic() {
        let channel: Broadcast<u32> = Broadcast::new();
        let slot = Rc::new(RefCell::new(None));
        let inner_channel = channel.clone();
        let inner_slot = Rc::clone(&slot);
        let id = channel.subscribe(move |_| {
            let pending = inner_slot.borrow_mut().take();
            if let Some(id) = pending {
                inner_channel.unsubscribe(id);
            }
        });
        *slot.borrow_mut() = Some(id);

        assert_eq!(channel.emit(&1), 1);
        assert_eq!(channel.emit(&2), 0);
    }
}
