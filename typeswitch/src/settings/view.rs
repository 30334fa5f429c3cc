use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::catalog::{FontCategory, FontEntry, catalog};

/// Translation lookup and localized routing supplied by the host app.
pub trait Locale {
    /// Localized text for a dotted message key.
    fn translate(&self, key: &str) -> String;

    /// Href of an app route under the active locale.
    fn localized_href(&self, path: &str) -> String;
}

/// Message table loaded from a nested JSON catalog.
///
/// Missing keys translate to the key itself.
#[derive(Debug, Clone, Default)]
pub struct StaticLocale {
    messages: HashMap<String, String>,
    route_prefix: String,
}

impl StaticLocale {
    /// Built-in English messages with unprefixed routes.
    pub fn english() -> Self {
        let messages = ENGLISH_MESSAGES
            .iter()
            .map(|(key, text)| (key.to_string(), text.to_string()))
            .collect();
        Self {
            messages,
            route_prefix: String::new(),
        }
    }

    /// Parse a message catalog such as
    /// `{"settings": {"fonts": {"title": "..."}}}`.
    ///
    /// Routes are prefixed with `/<route_prefix>` unless it is empty.
    pub fn from_json(
        json: &str,
        route_prefix: &str,
    ) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        let mut messages = HashMap::new();
        flatten_messages(&value, String::new(), &mut messages);
        Ok(Self {
            messages,
            route_prefix: route_prefix.trim_matches('/').to_string(),
        })
    }
}

impl Locale for StaticLocale {
    fn translate(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn localized_href(&self, path: &str) -> String {
        if self.route_prefix.is_empty() {
            path.to_string()
        } else {
            format!("/{}{path}", self.route_prefix)
        }
    }
}

fn flatten_messages(
    value: &Value,
    prefix: String,
    messages: &mut HashMap<String, String>,
) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_messages(nested, path, messages);
            }
        },
        Value::String(text) => {
            messages.insert(prefix, text.clone());
        },
        _ => {},
    }
}

const ENGLISH_MESSAGES: &[(&str, &str)] = &[
    ("common.back", "Back"),
    ("settings.fonts.title", "Font Settings"),
    (
        "settings.fonts.description",
        "Choose the font used across the whole site.",
    ),
    ("settings.fonts.current", "Current Font"),
    (
        "settings.fonts.cyrillicWarning",
        "This font does not support Cyrillic. Russian text falls back to Roboto.",
    ),
    ("settings.fonts.selectFont", "Select Font"),
    ("settings.fonts.supportsAllLanguages", "Supports all languages"),
    ("settings.fonts.latinOnly", "Latin only"),
];

/// Route the back link points to.
pub const SETTINGS_ROUTE: &str = "/settings";

/// Render-ready model of the font settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSettingsView {
    pub back_link: BackLink,
    pub title: String,
    pub description: String,
    pub current: CurrentFontCard,
    pub select_heading: String,
    pub options: Vec<FontOptionCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackLink {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentFontCard {
    pub heading: String,
    pub name: String,
    pub description: String,
    /// Present when the font cannot render non-Latin scripts.
    pub script_warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontOptionCard {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: FontCategory,
    pub supports_extended_script: bool,
    pub language_badge: String,
    pub selected: bool,
}

pub(crate) fn build_view<L: Locale>(
    locale: &L,
    selected: &'static FontEntry,
) -> FontSettingsView {
    let t = |key: &str| locale.translate(&format!("settings.fonts.{key}"));

    let options = catalog()
        .iter()
        .map(|entry| FontOptionCard {
            id: entry.id,
            name: entry.display_name,
            description: entry.description,
            category: entry.category,
            supports_extended_script: entry.supports_extended_script,
            language_badge: if entry.supports_extended_script {
                t("supportsAllLanguages")
            } else {
                t("latinOnly")
            },
            selected: entry.id == selected.id,
        })
        .collect();

    FontSettingsView {
        back_link: BackLink {
            href: locale.localized_href(SETTINGS_ROUTE),
            label: locale.translate("common.back"),
        },
        title: t("title"),
        description: t("description"),
        current: CurrentFontCard {
            heading: t("current"),
            name: selected.display_name.to_string(),
            description: selected.description.to_string(),
            script_warning: (!selected.supports_extended_script)
                .then(|| t("cyrillicWarning")),
        },
        select_heading: t("selectFont"),
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::{Locale, StaticLocale};

    #[test]
    fn given_nested_catalog_when_parsed_then_keys_are_dotted() {
        let locale = StaticLocale::from_json(
            r#"{"common": {"back": "Назад"}, "settings": {"fonts": {"title": "Шрифты"}}}"#,
            "/ru/",
        )
        .expect("catalog should parse");

        assert_eq!(locale.translate("common.back"), "Назад");
        assert_eq!(locale.translate("settings.fonts.title"), "Шрифты");
        assert_eq!(locale.localized_href("/settings"), "/ru/settings");
    }

    #[test]
    fn given_missing_key_when_translating_then_key_is_returned() {
        let locale = StaticLocale::english();

        assert_eq!(
            locale.translate("settings.fonts.unknown"),
            "settings.fonts.unknown"
        );
        assert_eq!(locale.localized_href("/settings"), "/settings");
    }
}
