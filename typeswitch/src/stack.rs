use std::fmt;

use crate::catalog::{
    FontEntry, GenericFamily, family_name, find_font, resolve_font,
    universal_font,
};

/// One candidate inside a CSS `font-family` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    /// Reference to a custom property, rendered as `var(--name)`.
    Variable(&'static str),
    /// Literal family name, rendered quoted.
    Named(&'static str),
    /// Generic keyword such as `serif`.
    Generic(GenericFamily),
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFamily::Variable(name) => write!(f, "var({name})"),
            FontFamily::Named(name) => write!(f, "\"{name}\""),
            FontFamily::Generic(generic) => f.write_str(generic.keyword()),
        }
    }
}

/// Ordered font-family candidates the renderer tries in sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStack {
    families: Vec<FontFamily>,
}

impl FontStack {
    pub fn families(&self) -> &[FontFamily] {
        &self.families
    }

    /// Whether the stack references the given custom property.
    pub fn references(&self, css_variable: &str) -> bool {
        self.families.iter().any(|family| {
            matches!(
                family,
                FontFamily::Variable(name) if *name == css_variable
            )
        })
    }

    /// Render the stack as a `font-family` value.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FontStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, family) in self.families.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{family}")?;
        }
        Ok(())
    }
}

/// Build the font stack for `font_id`.
///
/// Unknown ids resolve through the default font. Fonts without
/// extended-script coverage get the universal font spliced in after their
/// own variable and family name so missing glyphs still render.
pub fn resolve_stack(font_id: &str) -> FontStack {
    let entry = resolve_font(font_id);
    let fallback = extended_script_fallback(entry);

    let mut families = Vec::with_capacity(5);
    families.push(FontFamily::Variable(entry.css_variable));
    if let Some(universal) = fallback {
        families.push(FontFamily::Variable(universal.css_variable));
    }
    families.push(FontFamily::Named(family_name(entry)));
    if let Some(universal) = fallback {
        families.push(FontFamily::Named(family_name(universal)));
    }
    families.push(FontFamily::Generic(entry.generic));

    FontStack { families }
}

/// Return `var(--universal)` when `font_id` needs an extended-script
/// fallback, or `None` when the font covers those scripts itself.
///
/// Ids missing from the catalog count as needing the fallback.
pub fn resolve_fallback_reference(font_id: &str) -> Option<String> {
    let needs_fallback =
        find_font(font_id).is_none_or(|entry| !entry.supports_extended_script);
    if !needs_fallback {
        return None;
    }

    universal_font().map(|universal| {
        FontFamily::Variable(universal.css_variable).to_string()
    })
}

fn extended_script_fallback(
    entry: &FontEntry,
) -> Option<&'static FontEntry> {
    if entry.supports_extended_script {
        return None;
    }
    universal_font()
}
