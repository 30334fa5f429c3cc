use crate::host::Host;
use crate::preference::FONT_PREFERENCE_KEY;

/// Applies the persisted font when a page mounts and keeps it in sync with
/// selections made elsewhere until unmounted.
pub struct FontLoader<H: Host> {
    host: H,
    listeners: Vec<H::Listener>,
}

impl<H: Host> FontLoader<H> {
    /// Load and apply the persisted font, then subscribe to `fontChanged`
    /// and to storage writes from other tabs.
    pub fn mount(host: H) -> Self {
        let applier = host.applier();
        let font_id = host.preferences().load();
        applier.apply(font_id);
        log::debug!("font loader mounted with {font_id}");

        let on_font_changed = {
            let applier = applier.clone();
            host.listen_font_changed(move |font_id| applier.apply(font_id))
        };
        let on_storage = host.listen_storage_changed(move |change| {
            if change.key != FONT_PREFERENCE_KEY {
                return;
            }
            match change.new_value.as_deref() {
                Some(font_id) if !font_id.is_empty() => applier.apply(font_id),
                _ => {},
            }
        });

        Self {
            host,
            listeners: vec![on_font_changed, on_storage],
        }
    }

    pub fn is_mounted(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn unmount(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        for listener in self.listeners.drain(..) {
            self.host.remove_listener(listener);
        }
    }
}

impl<H: Host> Drop for FontLoader<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use crate::document::Document;
    use crate::host::Host;
    use crate::preference::{FONT_PREFERENCE_KEY, OriginStorage, StorageArea};
    use crate::rules::FONT_FAMILY_PROPERTY;
    use crate::stack::resolve_stack;
    use crate::tab::Tab;

    use super::FontLoader;

    fn root_font(tab: &Tab) -> Option<String> {
        let page = tab.page();
        page.inline_style(page.document_element(), FONT_FAMILY_PROPERTY)
    }

    #[test]
    fn given_empty_storage_when_mounted_then_default_font_is_applied() {
        let tab = Tab::open(&OriginStorage::new());

        let loader = FontLoader::mount(tab.clone());

        assert!(loader.is_mounted());
        assert_eq!(root_font(&tab), Some(resolve_stack("roboto").to_css()));
        assert_eq!(tab.listener_count(), 2);
    }

    #[test]
    fn given_persisted_font_when_mounted_then_it_is_applied() {
        let origin = OriginStorage::new();
        origin
            .open()
            .set_item(FONT_PREFERENCE_KEY, "merriweather")
            .expect("write should succeed");
        let tab = Tab::open(&origin);

        let _loader = FontLoader::mount(tab.clone());

        assert_eq!(
            root_font(&tab),
            Some(resolve_stack("merriweather").to_css())
        );
    }

    #[test]
    fn given_mounted_loader_when_font_changed_dispatched_then_it_reapplies() {
        let tab = Tab::open(&OriginStorage::new());
        let _loader = FontLoader::mount(tab.clone());

        tab.dispatch_font_changed("poppins");

        assert_eq!(root_font(&tab), Some(resolve_stack("poppins").to_css()));
    }

    #[test]
    fn given_unrelated_or_empty_storage_change_when_received_then_ignored() {
        let origin = OriginStorage::new();
        let tab = Tab::open(&origin);
        let other = origin.open();
        let _loader = FontLoader::mount(tab.clone());

        other.set_item("theme", "lato").expect("write should succeed");
        other
            .set_item(FONT_PREFERENCE_KEY, "")
            .expect("write should succeed");

        assert_eq!(root_font(&tab), Some(resolve_stack("roboto").to_css()));
    }

    #[test]
    fn given_unmounted_loader_when_events_arrive_then_nothing_is_reapplied() {
        let origin = OriginStorage::new();
        let tab = Tab::open(&origin);
        let other = origin.open();
        let loader = FontLoader::mount(tab.clone());

        loader.unmount();
        tab.dispatch_font_changed("lato");
        other
            .set_item(FONT_PREFERENCE_KEY, "inter")
            .expect("write should succeed");

        assert_eq!(tab.listener_count(), 0);
        assert_eq!(root_font(&tab), Some(resolve_stack("roboto").to_css()));
    }

    #[test]
    fn given_dropped_loader_when_scope_ends_then_listeners_are_removed() {
        let tab = Tab::open(&OriginStorage::new());
        {
            let _loader = FontLoader::mount(tab.clone());
            assert_eq!(tab.listener_count(), 2);
        }

        assert_eq!(tab.listener_count(), 0);
    }
}
