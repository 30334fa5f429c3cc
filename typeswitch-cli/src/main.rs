//! `typeswitch` command: inspect the font catalog, manage the persisted
//! selection and preview what the applier does to a page.

mod commands;
mod errors;
mod preview;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use typeswitch::preference::{FileStorage, PreferenceStore};

#[derive(Parser)]
#[command(version, about = "Pick and preview display fonts")]
struct Cli {
    /// Preference file (defaults to ~/.config/typeswitch/preferences.json)
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every selectable font
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the persisted font id
    Current,
    /// Persist a new font selection
    Select {
        /// Catalog id, e.g. `montserrat`
        id: String,
    },
    /// Print the custom properties and override stylesheet for a font
    Css {
        /// Catalog id (defaults to the persisted selection)
        id: Option<String>,
    },
    /// Apply a font to a sample page and report what changed
    Preview {
        /// Catalog id (defaults to the persisted selection)
        id: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let storage = match cli.store {
        Some(path) => FileStorage::new(path),
        None => FileStorage::user_default(),
    };
    log::debug!("using preference file {}", storage.path().display());
    let store = PreferenceStore::new(storage);

    let output = match cli.command {
        Command::List { json } => commands::list(&store, json),
        Command::Current => Ok(commands::current(&store)),
        Command::Select { id } => commands::select(&store, &id),
        Command::Css { id } => Ok(commands::css(&store, id.as_deref())),
        Command::Preview { id } => Ok(preview::run(&store, id.as_deref())),
    }
    .context("typeswitch command failed")?;

    print!("{output}");
    Ok(())
}
