use crate::applier::FontApplier;
use crate::document::Document;
use crate::frame::FrameScheduler;
use crate::preference::{PreferenceStore, StorageArea, StorageChange};

/// Browsing context a loader or settings page runs in.
///
/// Bundles the document, its frame scheduler, the origin storage and the two
/// notification channels that keep mounted instances converged.
pub trait Host: Clone + 'static {
    type Document: Document;
    type Frames: FrameScheduler;
    type Storage: StorageArea;
    /// Token returned when subscribing, used to unsubscribe.
    type Listener;

    fn document(&self) -> Self::Document;

    fn frames(&self) -> Self::Frames;

    fn storage(&self) -> Self::Storage;

    /// Listen for same-document `fontChanged` notifications.
    fn listen_font_changed<F>(&self, handler: F) -> Self::Listener
    where
        F: Fn(&str) + 'static;

    /// Listen for storage writes made by other tabs of the origin.
    fn listen_storage_changed<F>(&self, handler: F) -> Self::Listener
    where
        F: Fn(&StorageChange) + 'static;

    fn remove_listener(&self, listener: Self::Listener);

    fn dispatch_font_changed(&self, font_id: &str);

    fn applier(&self) -> FontApplier<Self::Document, Self::Frames> {
        FontApplier::new(self.document(), self.frames())
    }

    fn preferences(&self) -> PreferenceStore<Self::Storage> {
        PreferenceStore::new(self.storage())
    }
}
