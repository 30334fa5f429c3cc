use std::fmt::Write as _;

use typeswitch::catalog::{catalog, find_font};
use typeswitch::preference::{FileStorage, PreferenceStore};
use typeswitch::rules::{FALLBACK_PROPERTY, STACK_PROPERTY, override_stylesheet};
use typeswitch::{resolve_fallback_reference, resolve_stack};

use crate::errors::CliError;

pub(crate) type Store = PreferenceStore<FileStorage>;

pub(crate) fn list(store: &Store, json: bool) -> Result<String, CliError> {
    if json {
        let mut output = serde_json::to_string_pretty(catalog())?;
        output.push('\n');
        return Ok(output);
    }

    let current = store.load();
    let mut output = String::new();
    for entry in catalog() {
        let marker = if entry.id == current { '*' } else { ' ' };
        let scripts = if entry.supports_extended_script {
            "all scripts"
        } else {
            "latin only"
        };
        let _ = writeln!(
            output,
            "{marker} {:<17} {:<26} {:<9} {scripts}",
            entry.id,
            entry.display_name,
            entry.category.label(),
        );
    }
    Ok(output)
}

pub(crate) fn current(store: &Store) -> String {
    format!("{}\n", store.load())
}

pub(crate) fn select(store: &Store, id: &str) -> Result<String, CliError> {
    let entry = find_font(id).ok_or_else(|| CliError::UnknownFont {
        id: id.to_string(),
    })?;
    store.save(entry.id)?;
    log::info!("font preference set to {}", entry.id);
    Ok(format!("selected {} ({})\n", entry.id, entry.display_name))
}

/// Font id named on the command line, else the persisted one.
pub(crate) fn target_font<'a>(store: &Store, id: Option<&'a str>) -> &'a str {
    id.unwrap_or_else(|| store.load())
}

pub(crate) fn css(store: &Store, id: Option<&str>) -> String {
    let font_id = target_font(store, id);
    let stack = resolve_stack(font_id);

    let mut output = String::from(":root {\n");
    let _ = writeln!(output, "  {STACK_PROPERTY}: {stack};");
    if let Some(reference) = resolve_fallback_reference(font_id) {
        let _ = writeln!(output, "  {FALLBACK_PROPERTY}: {reference};");
    }
    output.push_str("}\n\n");
    output.push_str(&override_stylesheet(&stack));
    output.push('\n');
    output
}
