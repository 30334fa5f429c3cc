use super::errors::PreferenceError;
use super::storage::StorageArea;
use crate::catalog::{default_font, find_font};

/// Storage key of the persisted font selection.
pub const FONT_PREFERENCE_KEY: &str = "fontPreference";

/// Reads and writes the persisted font selection.
#[derive(Debug, Clone)]
pub struct PreferenceStore<S> {
    storage: S,
}

impl<S: StorageArea> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Return the persisted font id, or the default id when the slot is
    /// empty, unreadable or names a font outside the catalog.
    pub fn load(&self) -> &'static str {
        let stored = match self.storage.get_item(FONT_PREFERENCE_KEY) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("font preference read failed: {err}");
                None
            },
        };

        match stored.as_deref().map(find_font) {
            Some(Some(entry)) => entry.id,
            Some(None) => {
                log::debug!("ignoring unknown font preference {stored:?}");
                default_font().id
            },
            None => default_font().id,
        }
    }

    /// Persist `font_id` as-is.
    pub fn save(&self, font_id: &str) -> Result<(), PreferenceError> {
        self.storage.set_item(FONT_PREFERENCE_KEY, font_id)
    }
}
