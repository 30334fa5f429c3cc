use crate::catalog::FontEntry;

/// Displayed selection of the font settings page.
#[derive(Debug, Default)]
pub(crate) struct FontSettingsState {
    selected: Option<&'static FontEntry>,
}

impl FontSettingsState {
    /// Return the selected entry, `None` until the page has mounted.
    pub(crate) fn selected(&self) -> Option<&'static FontEntry> {
        self.selected
    }

    pub(crate) fn select(&mut self, entry: &'static FontEntry) {
        self.selected = Some(entry);
    }
}
