mod event;
mod reducer;
mod state;
mod view;

pub use event::FontSettingsEvent;
use state::FontSettingsState;
pub use view::{
    BackLink, CurrentFontCard, FontOptionCard, FontSettingsView, Locale,
    SETTINGS_ROUTE, StaticLocale,
};

use crate::catalog::find_font;
use crate::host::Host;

/// Select `font_id` outside a settings page: apply, persist and notify
/// other mounted instances. Returns `None` for ids outside the catalog.
pub fn select_font<H: Host>(host: &H, font_id: &str) -> Option<&'static str> {
    let entry = find_font(font_id)?;
    reducer::apply_and_save(host, entry);
    host.dispatch_font_changed(entry.id);
    Some(entry.id)
}

/// Font settings page: lets the user pick a font from the catalog, applies
/// it immediately, persists it and notifies other mounted instances.
pub struct FontSettings<H, L> {
    host: H,
    locale: L,
    state: FontSettingsState,
}

impl<H: Host, L: Locale> FontSettings<H, L> {
    /// Create an unmounted page. Feed [`FontSettingsEvent::Mounted`] before
    /// rendering.
    pub fn new(host: H, locale: L) -> Self {
        Self {
            host,
            locale,
            state: FontSettingsState::default(),
        }
    }

    pub fn reduce(&mut self, event: FontSettingsEvent) {
        reducer::reduce(&mut self.state, &self.host, event);
    }

    /// Id of the displayed selection, `None` before mount.
    pub fn selected(&self) -> Option<&'static str> {
        self.state.selected().map(|entry| entry.id)
    }

    /// Render model of the page, `None` before mount.
    pub fn view(&self) -> Option<FontSettingsView> {
        self.state
            .selected()
            .map(|entry| view::build_view(&self.locale, entry))
    }
}
