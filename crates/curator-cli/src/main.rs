//! curator CLI
//!
//! Thin wrapper over [`curator_session::LabelingSession`]. Every command
//! prints one JSON document on stdout; logs go to stderr.
//!
//! # Commands
//!
//! - `status`: catalog and engine status
//! - `next`: the item to label next
//! - `label --id N --answer q=a ...`: submit a label
//! - `stats`: progress statistics
//! - `reload`: rebuild the engine and restore the snapshot
//! - `add`: add one item with feature extraction
//! - `import`: bulk import metadata and a feature matrix
//! - `items list|get`, `questions list|add|update|remove`
//!
//! Failures exit with a code per failure class, see [`exit_code`].

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;

use curator_core::config::CuratorConfig;
use curator_session::LabelingSession;

mod commands;
mod exit_code;

use exit_code::CliExitCode;

/// Active-learning labeling for image collections
#[derive(Parser, Debug)]
#[command(name = "curator", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Catalog size, feature availability, engine and extraction status
    Status,
    /// The item the engine wants labeled next
    Next,
    /// Submit a label for an item
    Label(commands::labeling::LabelArgs),
    /// Labeling progress statistics
    Stats,
    /// Rebuild the engine from the catalog and restore the saved snapshot
    Reload,
    /// Add one item: copy its image, extract features, rebuild the engine
    Add(commands::catalog::AddArgs),
    /// Bulk import item metadata and a binary feature matrix
    Import(commands::catalog::ImportArgs),
    /// Browse the item catalog
    Items {
        #[command(subcommand)]
        action: commands::catalog::ItemsCommands,
    },
    /// Manage labeling questions
    Questions {
        #[command(subcommand)]
        action: commands::questions::QuestionsCommands,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<CuratorConfig> {
    Ok(match path {
        Some(path) => CuratorConfig::load(path)?,
        None => CuratorConfig::default(),
    })
}

fn run(cli: Cli) -> anyhow::Result<serde_json::Value> {
    let config = load_config(cli.config.as_ref())?;
    curator_observability::init_tracing(&config.observability);
    let session = LabelingSession::open(config)?;

    match cli.command {
        Commands::Status => commands::labeling::status(&session),
        Commands::Next => commands::labeling::next(&session),
        Commands::Label(args) => commands::labeling::label(&session, args),
        Commands::Stats => commands::labeling::stats(&session),
        Commands::Reload => commands::labeling::reload(&session),
        Commands::Add(args) => commands::catalog::add(&session, args),
        Commands::Import(args) => commands::catalog::import(&session, args),
        Commands::Items { action } => commands::catalog::handle_items_command(&session, action),
        Commands::Questions { action } => {
            commands::questions::handle_questions_command(&session, action)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(output) => {
            println!("{output:#}");
            CliExitCode::Success
        }
        Err(err) => {
            let code = exit_code::exit_code_for_error(&err);
            error!(error = %err, code = code as i32, "command failed");
            eprintln!("error: {err:#}");
            code
        }
    };

    std::process::exit(code as i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_label_with_ordered_answers() {
        let cli = Cli::try_parse_from([
            "curator",
            "label",
            "--id",
            "7",
            "--answer",
            "style=Baroque",
            "--answer",
            "subject=Portrait",
        ])
        .unwrap();
        let Commands::Label(args) = cli.command else {
            panic!("expected label command");
        };
        assert_eq!(args.id, 7);
        let label = args.to_label();
        assert_eq!(label.class_tag(), Some("Baroque"));
        assert_eq!(label.get("subject"), Some("Portrait"));
    }

    #[test]
    fn rejects_answer_without_separator() {
        let result = Cli::try_parse_from(["curator", "label", "--id", "1", "--answer", "style"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["curator", "stats", "--config", "curator.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("curator.toml")));
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn parses_nested_question_update() {
        let cli = Cli::try_parse_from([
            "curator",
            "questions",
            "update",
            "2",
            "--text",
            "Which era?",
            "--option",
            "Old",
            "--option",
            "New",
        ])
        .unwrap();
        let Commands::Questions {
            action: commands::questions::QuestionsCommands::Update { id, question },
        } = cli.command
        else {
            panic!("expected questions update");
        };
        assert_eq!(id, 2);
        assert_eq!(question.options, vec!["Old", "New"]);
        assert_eq!(question.correct_answer, None);
    }

    #[test]
    fn missing_config_file_is_invalid_input() {
        let err = load_config(Some(&PathBuf::from("/nonexistent/curator.toml"))).unwrap_err();
        assert_eq!(exit_code::exit_code_for_error(&err), CliExitCode::InvalidInput);
    }
}
