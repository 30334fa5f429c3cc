use crate::document::Document;
use crate::frame::FrameScheduler;
use crate::rules::{
    FALLBACK_PROPERTY, FONT_FAMILY_PROPERTY, STACK_PROPERTY, STYLE_ELEMENT_ID,
    Selector, all_elements, override_stylesheet, text_elements,
};
use crate::stack::{resolve_fallback_reference, resolve_stack};

/// Forces a selected font onto every rendered element of a document.
///
/// Every call recomputes and overwrites the whole applied state (style
/// element, custom properties, inline overrides), so repeated calls are
/// idempotent and the last applied id wins.
#[derive(Debug, Clone)]
pub struct FontApplier<D, F> {
    document: D,
    frames: F,
}

impl<D, F> FontApplier<D, F>
where
    D: Document,
    F: FrameScheduler,
{
    pub fn new(document: D, frames: F) -> Self {
        Self { document, frames }
    }

    /// Apply `font_id`, resolving unknown ids to the default font.
    pub fn apply(&self, font_id: &str) {
        let stack = resolve_stack(font_id);
        let css_stack = stack.to_css();
        let doc = &self.document;
        let root = doc.document_element();

        doc.set_style_property(&root, STACK_PROPERTY, &css_stack);
        self.write_override_rules(&override_stylesheet(&stack));
        doc.set_style_property(&root, FONT_FAMILY_PROPERTY, &css_stack);

        match doc.body() {
            Some(body) => {
                doc.set_style_property(&body, FONT_FAMILY_PROPERTY, &css_stack);
                sweep(doc, &text_elements(), &css_stack);
                sweep(doc, &all_elements(), &css_stack);
                self.schedule_follow_up(css_stack.clone());
            },
            None => {
                log::debug!("document body missing; font sweeps skipped");
            },
        }

        match resolve_fallback_reference(font_id) {
            Some(reference) => {
                doc.set_style_property(&root, FALLBACK_PROPERTY, &reference);
            },
            None => doc.remove_style_property(&root, FALLBACK_PROPERTY),
        }

        log::debug!("applied font {font_id}: {css_stack}");
    }

    fn write_override_rules(&self, css: &str) {
        let doc = &self.document;
        let style = doc
            .element_by_id(STYLE_ELEMENT_ID)
            .or_else(|| doc.append_style_element(STYLE_ELEMENT_ID));
        match style {
            Some(style) => doc.set_text_content(&style, css),
            None => log::warn!("font override stylesheet could not be created"),
        }
    }

    /// Repeat the sweep after the next paint to catch late-mounted content.
    fn schedule_follow_up(&self, css_stack: String) {
        let doc = self.document.clone();
        self.frames.request_frame(Box::new(move || {
            sweep(&doc, &all_elements(), &css_stack);
            if let Some(body) = doc.body() {
                for parent in doc.text_node_parents(&body) {
                    doc.set_style_property(
                        &parent,
                        FONT_FAMILY_PROPERTY,
                        &css_stack,
                    );
                }
            }
            doc.force_layout();
        }));
    }
}

fn sweep<D: Document>(doc: &D, selector: &Selector, css_stack: &str) {
    for element in doc.query_all(selector) {
        doc.set_style_property(&element, FONT_FAMILY_PROPERTY, css_stack);
    }
}

#[cfg(test)]
mod tests {
    use crate::document::Document;
    use crate::frame::FrameQueue;
    use crate::page::Page;
    use crate::rules::{
        FALLBACK_PROPERTY, FONT_FAMILY_PROPERTY, STACK_PROPERTY,
        STYLE_ELEMENT_ID,
    };
    use crate::stack::resolve_stack;

    use super::FontApplier;

    fn applier(page: &Page) -> (FontApplier<Page, FrameQueue>, FrameQueue) {
        let frames = FrameQueue::new();
        (FontApplier::new(page.clone(), frames.clone()), frames)
    }

    fn font_family(page: &Page, node: usize) -> Option<String> {
        page.inline_style(node, FONT_FAMILY_PROPERTY)
    }

    #[test]
    fn given_page_when_applied_then_root_body_and_properties_are_set() {
        let page = Page::new();
        let (applier, _frames) = applier(&page);
        let expected = resolve_stack("orbitron").to_css();

        applier.apply("orbitron");

        let root = page.document_element();
        let body = page.body().expect("body should exist");
        assert_eq!(font_family(&page, root), Some(expected.clone()));
        assert_eq!(font_family(&page, body), Some(expected.clone()));
        assert_eq!(page.inline_style(root, STACK_PROPERTY), Some(expected));
        assert_eq!(
            page.inline_style(root, FALLBACK_PROPERTY).as_deref(),
            Some("var(--font-roboto)")
        );
    }

    #[test]
    fn given_extended_script_font_when_applied_then_fallback_is_cleared() {
        let page = Page::new();
        let (applier, _frames) = applier(&page);

        applier.apply("lato");
        applier.apply("montserrat");

        let root = page.document_element();
        assert_eq!(page.inline_style(root, FALLBACK_PROPERTY), None);
    }

    #[test]
    fn given_repeated_applies_when_inspected_then_single_latest_stylesheet() {
        let page = Page::new();
        let (applier, _frames) = applier(&page);

        applier.apply("orbitron");
        applier.apply("merriweather");
        applier.apply("merriweather");

        assert_eq!(page.count_with_id(STYLE_ELEMENT_ID), 1);
        let style = page
            .element_by_id(STYLE_ELEMENT_ID)
            .expect("style element should exist");
        let css = page.text_content(style);
        assert!(css.contains(&resolve_stack("merriweather").to_css()));
        assert!(!css.contains("--font-orbitron"));
    }

    #[test]
    fn given_graphics_when_swept_then_only_text_elements_get_inline_font() {
        let page = Page::new();
        let body = page.attach_body();
        let heading = page.append_element(body, "h1");
        let svg = page.append_element(body, "svg");
        let path = page.append_element(svg, "path");
        let (applier, _frames) = applier(&page);

        applier.apply("poppins");

        let expected = resolve_stack("poppins").to_css();
        assert_eq!(font_family(&page, heading), Some(expected));
        assert_eq!(font_family(&page, svg), None);
        assert_eq!(font_family(&page, path), None);
    }

    #[test]
    fn given_content_mounted_after_apply_when_frame_runs_then_it_is_covered() {
        let page = Page::new();
        let body = page.attach_body();
        let (applier, frames) = applier(&page);

        applier.apply("raleway");
        let svg = page.append_element(body, "svg");
        let label = page.append_element(svg, "text");
        page.append_text(label, "late label");
        let late = page.append_element(body, "x-widget");
        assert_eq!(font_family(&page, late), None);

        assert_eq!(frames.run_frame(), 1);

        let expected = resolve_stack("raleway").to_css();
        assert_eq!(font_family(&page, late), Some(expected.clone()));
        assert_eq!(font_family(&page, label), Some(expected));
        assert_eq!(font_family(&page, svg), None);
        assert_eq!(page.layout_reads(), 1);
    }

    #[test]
    fn given_late_svg_with_bare_text_when_frame_runs_then_svg_is_styled() {
        let page = Page::new();
        let body = page.attach_body();
        let (applier, frames) = applier(&page);

        applier.apply("merriweather");
        let svg = page.append_element(body, "svg");
        page.append_text(svg, "inline caption");
        frames.run_frame();

        // The sweeps skip vector graphics; only the text-node walk reaches
        // the `<svg>` that owns the text.
        assert_eq!(
            font_family(&page, svg),
            Some(resolve_stack("merriweather").to_css())
        );
    }

    #[test]
    fn given_missing_body_when_applied_then_root_still_receives_font() {
        let page = Page::loading();
        let (applier, frames) = applier(&page);

        applier.apply("inter");

        let root = page.document_element();
        let expected = resolve_stack("inter").to_css();
        assert_eq!(font_family(&page, root), Some(expected.clone()));
        assert_eq!(page.inline_style(root, STACK_PROPERTY), Some(expected));
        assert_eq!(page.count_with_id(STYLE_ELEMENT_ID), 1);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn given_missing_body_when_body_arrives_and_reapplied_then_page_heals() {
        let page = Page::loading();
        let (applier, frames) = applier(&page);
        applier.apply("nunito");

        let body = page.attach_body();
        let paragraph = page.append_element(body, "p");
        applier.apply("nunito");
        frames.run_frame();

        let expected = resolve_stack("nunito").to_css();
        assert_eq!(font_family(&page, body), Some(expected.clone()));
        assert_eq!(font_family(&page, paragraph), Some(expected));
    }

    #[test]
    fn given_two_applies_before_frame_when_frames_run_then_last_wins() {
        let page = Page::new();
        let body = page.attach_body();
        let (applier, frames) = applier(&page);

        applier.apply("lato");
        applier.apply("comfortaa");
        let late = page.append_element(body, "x-late");
        frames.run_frame();

        // Both follow-ups ran in order; the later one wrote last.
        assert_eq!(
            font_family(&page, late),
            Some(resolve_stack("comfortaa").to_css())
        );
    }
}
