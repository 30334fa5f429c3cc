use typeswitch::catalog::find_font;
use typeswitch::{FontSettings, FontSettingsEvent, Host, Locale};

use crate::errors::WebError;

/// Mount a settings page model: loads, selects and applies the persisted
/// font once.
pub(crate) fn mount<H: Host, L: Locale>(
    host: H,
    locale: L,
) -> FontSettings<H, L> {
    let mut settings = FontSettings::new(host, locale);
    settings.reduce(FontSettingsEvent::Mounted);
    settings
}

/// Serialize the current view. Reads state only.
pub(crate) fn render<H: Host, L: Locale>(
    settings: &FontSettings<H, L>,
) -> Result<String, WebError> {
    Ok(serde_json::to_string(&settings.view())?)
}

/// Forward a card press, rejecting ids outside the catalog.
pub(crate) fn press<H: Host, L: Locale>(
    settings: &mut FontSettings<H, L>,
    font_id: &str,
) -> Result<(), WebError> {
    if find_font(font_id).is_none() {
        return Err(WebError::UnknownFont {
            font_id: font_id.to_string(),
        });
    }
    settings.reduce(FontSettingsEvent::FontPressed(font_id.to_string()));
    Ok(())
}
