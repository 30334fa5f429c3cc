//! Selector tables and the override stylesheet generated from them.
//!
//! The same tables drive the injected CSS and the inline sweeps performed by
//! the applier, so the set of covered and excluded elements has a single
//! definition.

use std::fmt;

use crate::stack::FontStack;

/// Id of the singleton `<style>` element holding the override rules.
pub const STYLE_ELEMENT_ID: &str = "dynamic-font-style";

/// Root custom property holding the resolved font stack.
pub const STACK_PROPERTY: &str = "--selected-heading-font";

/// Root custom property holding the extended-script fallback reference.
pub const FALLBACK_PROPERTY: &str = "--heading-fallback-font";

pub const FONT_FAMILY_PROPERTY: &str = "font-family";

/// Tags never forced to the selected font: non-rendered content and vector
/// graphics primitives.
pub const EXCLUDED_TAGS: &[&str] = &[
    "script",
    "style",
    "svg",
    "path",
    "circle",
    "rect",
    "line",
    "polygon",
    "ellipse",
    "g",
    "defs",
    "clipPath",
    "mask",
    "pattern",
    "linearGradient",
    "radialGradient",
    "stop",
];

/// Common text-bearing element types.
pub const TEXT_TAGS: &[&str] = &[
    "html", "body", "h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "div",
    "a", "li", "td", "th", "label", "input", "textarea", "select", "button",
    "article", "section", "aside", "nav", "header", "footer", "main",
    "blockquote", "cite", "code", "pre", "em", "strong", "b", "i", "u",
    "small", "sub", "sup", "ul", "ol", "dl", "dt", "dd", "table", "thead",
    "tbody", "tfoot", "tr", "caption", "form", "fieldset", "legend",
    "optgroup", "option",
];

/// Class used by page headings that pick up the selected font.
pub const HEADING_CLASS: &str = "font-heading";

/// Class-name fragments of utility classes that may carry their own
/// `font-family` in the surrounding stylesheet.
pub const UTILITY_CLASS_FRAGMENTS: &[&str] = &[
    "container", "mx-auto", "px-4", "py-20", "text-", "font-", "mb-", "mt-",
    "p-", "m-",
];

/// A simple selector the override rules are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorPart {
    /// Type selector, e.g. `p`.
    Tag(&'static str),
    /// Class selector, e.g. `.font-heading`.
    Class(&'static str),
    /// Substring match on the class attribute, e.g. `[class*="mb-"]`.
    ClassContains(&'static str),
}

impl SelectorPart {
    fn matches(&self, tag: &str, class_attr: &str) -> bool {
        match self {
            SelectorPart::Tag(name) => name.eq_ignore_ascii_case(tag),
            SelectorPart::Class(name) => {
                class_attr.split_ascii_whitespace().any(|class| class == *name)
            },
            SelectorPart::ClassContains(fragment) => {
                class_attr.contains(*fragment)
            },
        }
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorPart::Tag(name) => f.write_str(name),
            SelectorPart::Class(name) => write!(f, ".{name}"),
            SelectorPart::ClassContains(fragment) => {
                write!(f, "[class*=\"{fragment}\"]")
            },
        }
    }
}

/// Element selector understood by every [`crate::Document`]
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Every element whose tag is not listed.
    AllExcept(&'static [&'static str]),
    /// Elements matching at least one part.
    AnyOf(Vec<SelectorPart>),
}

impl Selector {
    /// Whether an element with the given tag and class attribute matches.
    pub fn matches(&self, tag: &str, class_attr: &str) -> bool {
        match self {
            Selector::AllExcept(excluded) => {
                !excluded.iter().any(|name| name.eq_ignore_ascii_case(tag))
            },
            Selector::AnyOf(parts) => {
                parts.iter().any(|part| part.matches(tag, class_attr))
            },
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::AllExcept(excluded) => {
                f.write_str("*")?;
                for tag in excluded.iter() {
                    write!(f, ":not({tag})")?;
                }
                Ok(())
            },
            Selector::AnyOf(parts) => {
                for (index, part) in parts.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{part}")?;
                }
                Ok(())
            },
        }
    }
}

/// Every element except [`EXCLUDED_TAGS`].
pub fn all_elements() -> Selector {
    Selector::AllExcept(EXCLUDED_TAGS)
}

/// Text-bearing tags plus heading markers.
pub fn text_elements() -> Selector {
    Selector::AnyOf(text_parts().collect())
}

/// Text-bearing tags, heading markers and utility class fragments.
pub fn override_targets() -> Selector {
    let utility = UTILITY_CLASS_FRAGMENTS
        .iter()
        .copied()
        .map(SelectorPart::ClassContains);
    Selector::AnyOf(text_parts().chain(utility).collect())
}

fn text_parts() -> impl Iterator<Item = SelectorPart> {
    TEXT_TAGS
        .iter()
        .copied()
        .map(SelectorPart::Tag)
        .chain([
            SelectorPart::Class(HEADING_CLASS),
            SelectorPart::ClassContains(HEADING_CLASS),
        ])
}

/// Build the override stylesheet forcing `stack` onto the page.
///
/// Three rules: a catch-all over [`all_elements`], a redundant rule over
/// [`override_targets`] to win specificity fights, and a descendant rule
/// forcing inheritance.
pub fn override_stylesheet(stack: &FontStack) -> String {
    let stack = stack.to_css();
    format!(
        "{all} {{\n  font-family: {stack} !important;\n}}\n\
         {targets} {{\n  font-family: {stack} !important;\n}}\n\
         * * {{\n  font-family: inherit !important;\n}}\n",
        all = all_elements(),
        targets = override_targets(),
    )
}

#[cfg(test)]
mod tests {
    use crate::stack::resolve_stack;

    use super::{
        EXCLUDED_TAGS, Selector, SelectorPart, all_elements,
        override_stylesheet, override_targets, text_elements,
    };

    #[test]
    fn given_exclusion_selector_when_rendered_then_lists_every_tag() {
        let css = all_elements().to_string();

        assert!(css.starts_with("*:not(script):not(style):not(svg)"));
        assert!(css.ends_with(":not(stop)"));
        assert_eq!(css.matches(":not(").count(), EXCLUDED_TAGS.len());
    }

    #[test]
    fn given_graphic_tags_when_matching_all_elements_then_excluded() {
        let selector = all_elements();

        assert!(!selector.matches("svg", ""));
        assert!(!selector.matches("clippath", ""));
        assert!(!selector.matches("SCRIPT", ""));
        assert!(selector.matches("div", "anything"));
        assert!(selector.matches("custom-widget", ""));
    }

    #[test]
    fn given_text_selector_when_matching_then_tags_and_heading_class_match() {
        let selector = text_elements();

        assert!(selector.matches("P", ""));
        assert!(selector.matches("custom-title", "hero font-heading"));
        assert!(selector.matches("x-card", "font-heading-xl"));
        assert!(!selector.matches("x-card", "mb-4"));
        assert!(!selector.matches("svg", ""));
    }

    #[test]
    fn given_override_targets_when_matching_then_utility_fragments_match() {
        let selector = override_targets();

        assert!(selector.matches("x-card", "mb-4"));
        assert!(selector.matches("x-card", "container"));
        assert!(!selector.matches("x-card", "hidden"));
    }

    #[test]
    fn given_parts_when_rendered_then_css_syntax_is_used() {
        let selector = Selector::AnyOf(vec![
            SelectorPart::Tag("p"),
            SelectorPart::Class("font-heading"),
            SelectorPart::ClassContains("mb-"),
        ]);

        assert_eq!(
            selector.to_string(),
            "p, .font-heading, [class*=\"mb-\"]"
        );
    }

    #[test]
    fn given_stack_when_building_stylesheet_then_three_rules_carry_stack() {
        let stack = resolve_stack("lato");
        let css = override_stylesheet(&stack);

        assert_eq!(
            css.matches(&format!("font-family: {stack} !important;")).count(),
            2
        );
        assert!(css.contains("* * {\n  font-family: inherit !important;\n}"));
        assert!(css.contains("[class*=\"py-20\"]"));
    }
}
