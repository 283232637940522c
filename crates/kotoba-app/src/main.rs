use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kotoba_config::Config;

mod commands;
mod logging;

use commands::create::{CreateOptions, handle_create};
use commands::list::{ListCommand, handle_list};

#[derive(Parser)]
#[command(name = "kotoba", version, about = "Build a vocabulary database from Japanese study notes")]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of config
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a vocabulary database by parsing a note file
    Create(CreateOptions),
    /// List subjects from a vocabulary database
    List {
        #[command(subcommand)]
        subject: ListCommand,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if cli.verbose {
        config.log.filter = "debug".to_string();
    }

    logging::init(&config.log);
    tracing::debug!("config: {:?}", config);

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, &mut std::io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}

/// Print the whole error chain on one line
fn report_error(err: &anyhow::Error, out: &mut impl Write) {
    let _ = writeln!(out, "Error: {err:#}");
}

fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();

    match command {
        Command::Create(options) => handle_create(&options, config, &mut stdout),
        Command::List { subject } => handle_list(&subject, &mut stdout),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "kotoba", "create", "-f", "notes.md", "-d", "vocab.json", "--overwrite",
        ])
        .unwrap();

        match cli.command {
            Command::Create(options) => {
                assert_eq!(options.file, PathBuf::from("notes.md"));
                assert_eq!(options.database, PathBuf::from("vocab.json"));
                assert!(options.overwrite);
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn test_create_requires_file_and_database() {
        assert!(Cli::try_parse_from(["kotoba", "create", "-f", "notes.md"]).is_err());
        assert!(Cli::try_parse_from(["kotoba", "create", "-d", "vocab.json"]).is_err());
    }

    #[test]
    fn test_report_error_prints_chain_once() {
        let err = anyhow::anyhow!("disk full").context("failed to create database");
        let mut out = Vec::new();
        report_error(&err, &mut out);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: failed to create database: disk full\n"
        );
    }

    #[test]
    fn test_list_requires_subject() {
        assert!(Cli::try_parse_from(["kotoba", "list"]).is_err());

        let cli = Cli::try_parse_from(["kotoba", "list", "parts", "-d", "vocab.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::List {
                subject: ListCommand::Parts { .. }
            }
        ));
    }
}
