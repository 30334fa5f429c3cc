use std::fmt::Write as _;

use typeswitch::catalog::resolve_font;
use typeswitch::rules::{FONT_FAMILY_PROPERTY, STYLE_ELEMENT_ID};
use typeswitch::{
    Document, FontApplier, FrameQueue, NodeId, Page, resolve_fallback_reference,
    resolve_stack,
};

use crate::commands::{Store, target_font};

/// Markup of the sample page: headings, body copy, an icon and a card.
fn sample_page() -> Page {
    let page = Page::new();
    let Some(body) = page.body() else {
        return page;
    };

    let header = page.append_element(body, "header");
    let title = page.append_element(header, "h1");
    page.set_class(title, "font-heading text-4xl");
    page.append_text(title, "Font Settings");

    let main = page.append_element(body, "main");
    page.set_class(main, "container mx-auto px-4");
    let copy = page.append_element(main, "p");
    page.append_text(copy, "The quick brown fox. Съешь же ещё этих булок.");

    let icon = page.append_element(main, "svg");
    let path = page.append_element(icon, "path");
    page.set_id(path, "icon-path");

    let card = page.append_element(main, "div");
    page.set_class(card, "rounded-lg");
    page.append_text(card, "Card body");
    page
}

pub(crate) fn run(store: &Store, id: Option<&str>) -> String {
    let font_id = target_font(store, id);
    let entry = resolve_font(font_id);
    let page = sample_page();
    let frames = FrameQueue::new();
    let applier = FontApplier::new(page.clone(), frames.clone());

    applier.apply(font_id);
    let styled_before_frame = styled_count(&page);

    // Content mounted between the apply call and the next paint.
    let late = page.body().map(|body| {
        let widget = page.append_element(body, "custom-widget");
        page.append_text(widget, "Mounted late");
        widget
    });
    frames.run_frame();

    let elements = page.elements();
    let expected = resolve_stack(font_id).to_css();
    let late_styled = late.is_some_and(|node| {
        page.inline_style(node, FONT_FAMILY_PROPERTY).as_deref()
            == Some(expected.as_str())
    });

    let mut output = String::new();
    let _ = writeln!(output, "font: {} ({})", entry.id, entry.display_name);
    let _ = writeln!(output, "stack: {expected}");
    let _ = writeln!(
        output,
        "fallback: {}",
        resolve_fallback_reference(font_id).unwrap_or_else(|| "none".into())
    );
    let _ = writeln!(
        output,
        "override stylesheet: {}",
        if page.count_with_id(STYLE_ELEMENT_ID) == 1 {
            "installed"
        } else {
            "missing"
        }
    );
    let _ = writeln!(
        output,
        "styled elements: {} before paint, {} of {} after",
        styled_before_frame,
        styled_count(&page),
        elements.len()
    );
    let _ = writeln!(
        output,
        "late content styled: {}",
        if late_styled { "yes" } else { "no" }
    );
    let _ = writeln!(output, "layout reads: {}", page.layout_reads());
    output
}

fn styled_count(page: &Page) -> usize {
    page.elements()
        .into_iter()
        .filter(|node: &NodeId| {
            page.inline_style(*node, FONT_FAMILY_PROPERTY).is_some()
        })
        .count()
}
