use serde::Serialize;

/// Identifier of the font used when nothing (or something unknown) is
/// selected.
pub const DEFAULT_FONT_ID: &str = "roboto";

/// Position of [`DEFAULT_FONT_ID`] inside [`FONT_CATALOG`].
const DEFAULT_FONT_INDEX: usize = 11;

/// Coarse grouping shown as a badge next to each font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontCategory {
    Gaming,
    Modern,
    Classic,
    Universal,
}

impl FontCategory {
    /// Lowercase label used in badges and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            FontCategory::Gaming => "gaming",
            FontCategory::Modern => "modern",
            FontCategory::Classic => "classic",
            FontCategory::Universal => "universal",
        }
    }
}

/// Generic CSS family keyword that closes a font stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenericFamily {
    Serif,
    SansSerif,
}

impl GenericFamily {
    pub fn keyword(self) -> &'static str {
        match self {
            GenericFamily::Serif => "serif",
            GenericFamily::SansSerif => "sans-serif",
        }
    }
}

/// One selectable display font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontEntry {
    /// Stable key used for persistence and lookup.
    pub id: &'static str,
    /// Human-readable label, optionally with a parenthetical qualifier.
    pub display_name: &'static str,
    /// CSS custom property bound to the font asset by the page build.
    pub css_variable: &'static str,
    /// Whether the glyph set covers non-Latin scripts such as Cyrillic.
    pub supports_extended_script: bool,
    pub category: FontCategory,
    pub description: &'static str,
    pub generic: GenericFamily,
}

/// Every font the settings page offers, in display order.
pub static FONT_CATALOG: [FontEntry; 14] = [
    FontEntry {
        id: "orbitron",
        display_name: "Orbitron (Gaming)",
        css_variable: "--font-orbitron",
        supports_extended_script: false,
        category: FontCategory::Gaming,
        description: "Futuristic gaming font - supports Latin only",
        generic: GenericFamily::SansSerif,
    },
    FontEntry {
        id: "rajdhani",
        display_name: "Rajdhani (Gaming)",
        css_variable: "--font-rajdhani",
        supports_extended_script: false,
        category: FontCategory::Gaming,
        description: "Gaming-style font - supports Latin only",
        generic: GenericFamily::SansSerif,
    },
    FontEntry {
        id: "playfair-display",
        display_name: "Playfair Display (Elegant)",
        css_variable: "--font-playfair-display",
        supports_extended_script: true,
        category: FontCategory::Classic,
        description: "Elegant serif font - supports all languages",
        generic: GenericFamily::Serif,
    },
    FontEntry {
        id: "montserrat",
        display_name: "Montserrat (Modern)",
        css_variable: "--font-montserrat",
        supports_extended_script: true,
        category: FontCategory::Modern,
        description: "Modern geometric sans-serif - supports all languages",
        generic: GenericFamily::SansSerif,
    },
    FontEntry {
        id: "raleway",
        display_name: "Raleway (Elegant)",
        css_variable: "--font-raleway",
        supports_extended_script: true,
        category: FontCategory::Modern,
        description: "Elegant sans-serif with unique character - supports all languages",
        generic: GenericFamily::SansSerif,
    },
    FontEntry {
        id: "poppins",
        display_name: "Poppins (Friendly)",
        css_variable: "--font-poppins",
        supports_extended_script: false,
        category: FontCategory::Modern,
        description: "Modern, friendly rounded font - supports Latin only",
        generic: GenericFamily::SansSerif,
    },
    FontEntry {
        id: "lato",
        display_name: "Lato (Professional)",
        css_variable: "--font-lato",
        supports_extended_script: false,
        category: FontCategory::Modern,
        description: "Clean, professional sans-serif - supports Latin only",
        generic: GenericFamily::SansSerif,
    },
    FontEntry {
        id: "merriweather",
        display_name: "Merriweather (Readable)",
        css_variable: "--font-merriweather",
        supports_extended_script: true,
        category: FontCategory::Classic,
        description: "Highly readable serif font - supports all languages",
        generic: GenericFamily::Serif,
    },
    FontEntry {
        id: "nunito",
        display_name: "Nunito (Rounded)",
        css_variable: "--font-nunito",
        supports_extended_script: true,
        category: FontCategory::Modern,
        description: "Rounded, friendly sans-serif - supports all languages",
        generic: GenericFamily::SansSerif,
    },
    FontEntry {
        id: "comfortaa",
        display_name: "Comfortaa (Modern)",
        css_variable: "--font-comfortaa",
        supports_extended_script: true,
        category: FontCategory::Modern,
        description: "Rounded, modern geometric font - supports all languages",
        generic: GenericFamily::SansSerif,
    },
    FontEntry {
        id: "bebas-neue",
        display_name: "Bebas Neue (Bold)",
        css_variable: "--font-bebas-neue",
        supports_extended_script: false,
        category: FontCategory::Gaming,
        description: "Bold, impactful display font - supports Latin only",
        generic: GenericFamily::SansSerif,
    },
    FontEntry {
        id: "roboto",
        display_name: "Roboto (Universal)",
        css_variable: "--font-roboto",
        supports_extended_script: true,
        category: FontCategory::Universal,
        description: "Modern, clean font - supports all languages",
        generic: GenericFamily::SansSerif,
    },
    FontEntry {
        id: "inter",
        display_name: "Inter (Modern)",
        css_variable: "--font-inter",
        supports_extended_script: true,
        category: FontCategory::Modern,
        description: "Modern, readable font - supports all languages",
        generic: GenericFamily::SansSerif,
    },
    FontEntry {
        id: "open-sans",
        display_name: "Open Sans (Classic)",
        css_variable: "--font-open-sans",
        supports_extended_script: true,
        category: FontCategory::Classic,
        description: "Classic, professional font - supports all languages",
        generic: GenericFamily::SansSerif,
    },
];

/// Explicit family names for multi-word families.
static FAMILY_NAME_OVERRIDES: [(&str, &str); 3] = [
    ("playfair-display", "Playfair Display"),
    ("bebas-neue", "Bebas Neue"),
    ("open-sans", "Open Sans"),
];

/// Return the whole catalog in display order.
pub fn catalog() -> &'static [FontEntry] {
    &FONT_CATALOG
}

/// Look up a catalog entry by id.
pub fn find_font(id: &str) -> Option<&'static FontEntry> {
    FONT_CATALOG.iter().find(|entry| entry.id == id)
}

/// Return the entry for [`DEFAULT_FONT_ID`].
pub fn default_font() -> &'static FontEntry {
    &FONT_CATALOG[DEFAULT_FONT_INDEX]
}

/// Look up a catalog entry, substituting the default for unknown ids.
pub fn resolve_font(id: &str) -> &'static FontEntry {
    find_font(id).unwrap_or_else(default_font)
}

/// First universal entry able to render extended scripts.
pub fn universal_font() -> Option<&'static FontEntry> {
    FONT_CATALOG.iter().find(|entry| {
        entry.category == FontCategory::Universal
            && entry.supports_extended_script
    })
}

/// Literal family name the renderer knows the font by.
pub fn family_name(entry: &FontEntry) -> &'static str {
    if let Some((_, name)) = FAMILY_NAME_OVERRIDES
        .iter()
        .find(|(id, _)| *id == entry.id)
    {
        return *name;
    }

    match entry.display_name.split_once(" (") {
        Some((name, _)) => name,
        None => entry.display_name,
    }
}
