use typeswitch::preference::{FONT_PREFERENCE_KEY, OriginStorage, StorageArea};
use typeswitch::rules::{FONT_FAMILY_PROPERTY, STACK_PROPERTY};
use typeswitch::settings::StaticLocale;
use typeswitch::{
    Document, FontLoader, FontSettings, FontSettingsEvent, Host, Page, Tab,
    resolve_stack,
};

fn root_font(tab: &Tab) -> Option<String> {
    let page = tab.page();
    page.inline_style(page.document_element(), FONT_FAMILY_PROPERTY)
}

#[test]
fn given_two_tabs_when_first_selects_montserrat_then_second_converges() {
    let origin = OriginStorage::new();
    let first = Tab::open(&origin);
    let second = Tab::open(&origin);
    let _first_loader = FontLoader::mount(first.clone());
    let _second_loader = FontLoader::mount(second.clone());
    let mut settings =
        FontSettings::new(first.clone(), StaticLocale::english());
    settings.reduce(FontSettingsEvent::Mounted);

    settings.reduce(FontSettingsEvent::FontPressed(String::from("montserrat")));

    let expected = resolve_stack("montserrat").to_css();
    assert_eq!(root_font(&first), Some(expected.clone()));
    assert_eq!(root_font(&second), Some(expected.clone()));
    let page = second.page();
    assert_eq!(
        page.inline_style(page.document_element(), STACK_PROPERTY),
        Some(expected)
    );
}

#[test]
fn given_late_content_in_second_tab_when_frame_runs_then_it_is_covered() {
    let origin = OriginStorage::new();
    let first = Tab::open(&origin);
    let second = Tab::open(&origin);
    let _loader = FontLoader::mount(second.clone());
    second.run_frame();

    first
        .storage()
        .set_item(FONT_PREFERENCE_KEY, "bebas-neue")
        .expect("write should succeed");
    let page = second.page();
    let body = page.body().expect("body should exist");
    let card = page.append_element(body, "div");
    let label = page.append_element(card, "custom-label");
    page.append_text(label, "Привет");
    second.run_frame();

    let expected = resolve_stack("bebas-neue").to_css();
    assert_eq!(
        page.inline_style(label, FONT_FAMILY_PROPERTY),
        Some(expected)
    );
}

#[test]
fn given_page_still_loading_when_loader_mounts_then_next_apply_heals_it() {
    let origin = OriginStorage::new();
    let page = Page::loading();
    let tab = Tab::with_page(&origin, page.clone());
    let _loader = FontLoader::mount(tab.clone());

    let body = page.attach_body();
    assert_eq!(page.inline_style(body, FONT_FAMILY_PROPERTY), None);
    tab.dispatch_font_changed("lato");

    assert_eq!(
        page.inline_style(body, FONT_FAMILY_PROPERTY),
        Some(resolve_stack("lato").to_css())
    );
}

#[test]
fn given_writer_tab_when_it_saves_then_it_gets_no_storage_echo() {
    let origin = OriginStorage::new();
    let first = Tab::open(&origin);
    let second = Tab::open(&origin);
    let _loader = FontLoader::mount(first.clone());
    let _other = FontLoader::mount(second.clone());

    first
        .preferences()
        .save("playfair-display")
        .expect("save should succeed");

    assert_eq!(root_font(&first), Some(resolve_stack("roboto").to_css()));
    assert_eq!(
        root_font(&second),
        Some(resolve_stack("playfair-display").to_css())
    );
}
