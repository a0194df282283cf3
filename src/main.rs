//! student-roster - Terminal Student Record Manager
//!
//! Adds, searches, updates and deletes student records kept in a flat text file.

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgMatches, Command};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use student_roster::config::{Config, Overrides, ThemeName};
use student_roster::ui::{ColorTheme, TerminalUI};
use student_roster::{Application, FlatFileStore};

fn command() -> Command {
    Command::new("student-roster")
        .version(student_roster::VERSION)
        .about("Manage student records from the terminal")
        .long_about(
            "student-roster keeps one student per line (roll number, name, marks) in a plain \
             text file and edits it through a keyboard-driven table with dialogs.",
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .help("Record file to open [default: students.txt]"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Configuration file (TOML)"),
        )
        .arg(
            Arg::new("theme")
                .short('t')
                .long("theme")
                .value_parser(PossibleValuesParser::new(ThemeName::VARIANTS))
                .help("Color theme"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .help("Write logs to this file instead of stderr"),
        )
}

fn overrides_from(matches: &ArgMatches) -> Result<Overrides> {
    let theme = matches
        .get_one::<String>("theme")
        .map(|name| name.parse::<ThemeName>())
        .transpose()?;

    Ok(Overrides {
        store_path: matches.get_one::<String>("file").map(PathBuf::from),
        theme,
        log_file: matches.get_one::<String>("log-file").map(PathBuf::from),
    })
}

/// The terminal owns stderr while the UI runs, so logs can be sent to a file instead.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = command().get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let config = Config::load(config_path.as_deref(), overrides_from(&matches)?)?;

    init_logging(config.log_file.as_deref())?;
    log::debug!("configuration: {config:?}");

    if config.store_path.is_dir() {
        anyhow::bail!("Path is a directory: {}", config.store_path.display());
    }

    let store = Arc::new(FlatFileStore::new(&config.store_path));
    let ui_renderer = Box::new(TerminalUI::with_theme(ColorTheme::from_name(config.theme))?);
    let mut app = Application::new(store, ui_renderer)
        .await
        .with_context(|| format!("cannot load {}", config.store_path.display()))?;

    app.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!student_roster::VERSION.is_empty());
    }

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn test_flags_become_overrides() {
        let matches = command()
            .try_get_matches_from([
                "student-roster",
                "-f",
                "class.txt",
                "--theme",
                "high-contrast",
            ])
            .unwrap();
        let overrides = overrides_from(&matches).unwrap();
        assert_eq!(overrides.store_path, Some(PathBuf::from("class.txt")));
        assert_eq!(overrides.theme, Some(ThemeName::HighContrast));
        assert!(overrides.log_file.is_none());
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(command()
            .try_get_matches_from(["student-roster", "--theme", "neon"])
            .is_err());
    }
}
