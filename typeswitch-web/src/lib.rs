//! Browser bindings for `typeswitch`.
//!
//! Exposes the font loader, the selection entry point and the settings page
//! model to JavaScript. The DOM, `requestAnimationFrame`, `localStorage` and
//! window events are reached through [`WebHost`].

mod dom;
mod errors;
mod host;
mod settings;

pub use dom::WebDocument;
pub use errors::WebError;
pub use host::{WebFrames, WebHost, WebListener, WebStorage};

use typeswitch::catalog::catalog;
use typeswitch::settings::StaticLocale;
use typeswitch::{FontLoader, FontSettings, select_font};
use wasm_bindgen::prelude::*;

/// Mounted font loader; call `unmount()` when the owning view goes away.
#[wasm_bindgen]
pub struct FontLoaderHandle {
    loader: Option<FontLoader<WebHost>>,
}

#[wasm_bindgen]
impl FontLoaderHandle {
    pub fn unmount(&mut self) {
        if let Some(loader) = self.loader.take() {
            loader.unmount();
        }
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.loader.is_some()
    }
}

/// Apply the persisted font and follow later selections from this tab and
/// from other tabs.
#[wasm_bindgen(js_name = mountFontLoader)]
pub fn mount_font_loader() -> Result<FontLoaderHandle, JsValue> {
    let host = WebHost::current()?;
    Ok(FontLoaderHandle {
        loader: Some(FontLoader::mount(host)),
    })
}

/// Apply, persist and broadcast `fontId`. Throws for ids outside the
/// catalog.
#[wasm_bindgen(js_name = selectFont)]
pub fn select_font_js(font_id: &str) -> Result<(), JsValue> {
    let host = WebHost::current()?;
    match select_font(&host, font_id) {
        Some(_) => Ok(()),
        None => Err(WebError::UnknownFont {
            font_id: font_id.to_string(),
        }
        .into()),
    }
}

/// The catalog as a JSON array, in display order.
#[wasm_bindgen(js_name = fontOptions)]
pub fn font_options() -> Result<String, JsValue> {
    Ok(serde_json::to_string(catalog()).map_err(WebError::from)?)
}

/// Font settings page model bound to the current tab.
#[wasm_bindgen]
pub struct FontSettingsPage {
    settings: FontSettings<WebHost, StaticLocale>,
}

#[wasm_bindgen]
impl FontSettingsPage {
    /// Render model of the page as JSON. Does not touch the document.
    pub fn view(&self) -> Result<String, JsValue> {
        Ok(settings::render(&self.settings)?)
    }

    /// Select a font card: applies, persists and broadcasts `fontId`.
    /// Throws for ids outside the catalog.
    pub fn press(&mut self, font_id: &str) -> Result<(), JsValue> {
        Ok(settings::press(&mut self.settings, font_id)?)
    }

    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> Option<String> {
        self.settings.selected().map(String::from)
    }
}

/// Mount the settings page model. Loads and applies the persisted font
/// once; call `view()` afterwards as often as needed.
///
/// `messagesJson` is the app's nested message catalog; `localePrefix` is the
/// active route locale (empty for none).
#[wasm_bindgen(js_name = mountFontSettings)]
pub fn mount_font_settings(
    messages_json: &str,
    locale_prefix: &str,
) -> Result<FontSettingsPage, JsValue> {
    let host = WebHost::current()?;
    let locale = StaticLocale::from_json(messages_json, locale_prefix)
        .map_err(WebError::from)?;
    Ok(FontSettingsPage {
        settings: settings::mount(host, locale),
    })
}
