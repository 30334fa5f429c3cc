use crate::broadcast::{Broadcast, FONT_CHANGED_EVENT, SubscriptionId};
use crate::frame::FrameQueue;
use crate::host::Host;
use crate::page::Page;
use crate::preference::{OriginStorage, StorageChange, StorageHandle};

/// Subscription made on a [`Tab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabListener {
    FontChanged(SubscriptionId),
    Storage(SubscriptionId),
}

/// In-memory browsing context: one page, its frame queue, its
/// `fontChanged` channel and a handle onto the shared origin storage.
#[derive(Clone)]
pub struct Tab {
    page: Page,
    frames: FrameQueue,
    font_changed: Broadcast<String>,
    storage: StorageHandle,
}

impl Tab {
    /// Open a tab with a fully parsed page.
    pub fn open(origin: &OriginStorage) -> Self {
        Self::with_page(origin, Page::new())
    }

    pub fn with_page(origin: &OriginStorage, page: Page) -> Self {
        Self {
            page,
            frames: FrameQueue::new(),
            font_changed: Broadcast::new(),
            storage: origin.open(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Run one animation frame. Returns how many callbacks ran.
    pub fn run_frame(&self) -> usize {
        self.frames.run_frame()
    }

    /// Number of live subscriptions across both channels.
    pub fn listener_count(&self) -> usize {
        self.font_changed.len() + self.storage.listener_count()
    }
}

impl Host for Tab {
    type Document = Page;
    type Frames = FrameQueue;
    type Storage = StorageHandle;
    type Listener = TabListener;

    fn document(&self) -> Page {
        self.page.clone()
    }

    fn frames(&self) -> FrameQueue {
        self.frames.clone()
    }

    fn storage(&self) -> StorageHandle {
        self.storage.clone()
    }

    fn listen_font_changed<F>(&self, handler: F) -> TabListener
    where
        F: Fn(&str) + 'static,
    {
        let id = self
            .font_changed
            .subscribe(move |font_id: &String| handler(font_id));
        TabListener::FontChanged(id)
    }

    fn listen_storage_changed<F>(&self, handler: F) -> TabListener
    where
        F: Fn(&StorageChange) + 'static,
    {
        TabListener::Storage(self.storage.subscribe(handler))
    }

    fn remove_listener(&self, listener: TabListener) {
        let removed = match listener {
            TabListener::FontChanged(id) => self.font_changed.unsubscribe(id),
            TabListener::Storage(id) => self.storage.unsubscribe(id),
        };
        if !removed {
            log::debug!("listener {listener:?} was already removed");
        }
    }

    fn dispatch_font_changed(&self, font_id: &str) {
        let delivered = self.font_changed.emit(&font_id.to_string());
        log::debug!("{FONT_CHANGED_EVENT} {font_id} delivered to {delivered}");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::host::Host;
    use crate::preference::{OriginStorage, StorageArea};

    use super::Tab;

    #[test]
    fn given_font_changed_listener_when_dispatching_then_id_is_delivered() {
        let tab = Tab::open(&OriginStorage::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let listener = tab.listen_font_changed(move |id| {
            sink.borrow_mut().push(id.to_string());
        });

        tab.dispatch_font_changed("lato");
        tab.remove_listener(listener);
        tab.dispatch_font_changed("inter");

        assert_eq!(*seen.borrow(), vec!["lato"]);
        assert_eq!(tab.listener_count(), 0);
    }

    #[test]
    fn given_two_tabs_when_one_writes_then_other_hears_storage_change() {
        let origin = OriginStorage::new();
        let first = Tab::open(&origin);
        let second = Tab::open(&origin);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        second.listen_storage_changed(move |change| {
            sink.borrow_mut().push(change.new_value.clone());
        });

        first
            .storage()
            .set_item("fontPreference", "nunito")
            .expect("write should succeed");

        assert_eq!(*seen.borrow(), vec![Some(String::from("nunito"))]);
    }
}
