use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Args;
use kotoba_config::Config;
use kotoba_lang_japanese::{NoteParser, read_note_file};
use kotoba_store::JsonFileStore;

#[derive(Debug, Args)]
pub struct CreateOptions {
    /// Input note file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Output database file
    #[arg(short, long)]
    pub database: PathBuf,

    /// Overwrite the database file if it exists
    #[arg(long)]
    pub overwrite: bool,
}

pub fn handle_create(
    options: &CreateOptions,
    config: &Config,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if !options.file.exists() {
        bail!("input file {} does not exist", options.file.display());
    }

    let existed = options.database.exists();
    if existed && !options.overwrite {
        bail!("output database file {} already exists", options.database.display());
    }

    let mut store = JsonFileStore::create(&options.database, options.overwrite)
        .context("failed to create database")?
        .with_pretty(config.store.pretty);
    if existed {
        writeln!(
            out,
            "output database file {} has been removed",
            options.database.display()
        )?;
    }

    let lines = read_note_file(&options.file)?;
    let summary = NoteParser::ingest(&lines, &mut store)?;

    tracing::info!(
        "Stored {} entries from {} into {}",
        summary.entries,
        options.file.display(),
        store.path().display()
    );
    writeln!(out, "database created")?;

    Ok(())
}
