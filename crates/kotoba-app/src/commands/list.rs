use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Subcommand;
use kotoba_core::VocabularyStore;
use kotoba_lang_japanese::parts_of_speech;
use kotoba_store::JsonFileStore;

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// List parts of speech from the specified database
    Parts {
        /// Database file to be read from
        #[arg(short, long)]
        database: PathBuf,
    },
}

pub fn handle_list(command: &ListCommand, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        ListCommand::Parts { database } => handle_list_parts(database, out),
    }
}

fn handle_list_parts(database: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    if !database.exists() {
        bail!("specified database does not exist");
    }

    let store = JsonFileStore::open(database).context("failed to open database")?;
    let labels = store
        .distinct_labels()
        .context("failed to retrieve parts of speech")?;

    for part in parts_of_speech(labels) {
        writeln!(out, "{part}")?;
    }

    Ok(())
}
