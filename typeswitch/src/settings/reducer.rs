use super::event::FontSettingsEvent;
use super::state::FontSettingsState;
use crate::catalog::{FontEntry, find_font, resolve_font};
use crate::host::Host;

/// Reduce a settings event into state updates and host side effects.
pub(crate) fn reduce<H: Host>(
    state: &mut FontSettingsState,
    host: &H,
    event: FontSettingsEvent,
) {
    match event {
        FontSettingsEvent::Mounted => {
            let font_id = host.preferences().load();
            state.select(resolve_font(font_id));
            host.applier().apply(font_id);
        },
        FontSettingsEvent::FontPressed(font_id) => {
            let Some(entry) = find_font(&font_id) else {
                log::warn!("ignoring selection of unknown font {font_id}");
                return;
            };
            apply_and_save(host, entry);
            state.select(entry);
            host.dispatch_font_changed(entry.id);
        },
    }
}

/// Apply first so the page changes before persistence. Save failures keep
/// the visual change.
pub(crate) fn apply_and_save<H: Host>(host: &H, entry: &'static FontEntry) {
    host.applier().apply(entry.id);
    if let Err(err) = host.preferences().save(entry.id) {
        log::warn!("font preference save failed: {err}");
    }
}
